//! Plain-text rendering of a `ViewState` snapshot

use std::fmt::Write as _;

use prodboard_core::view::{SummaryView, Table, TableRow};
use prodboard_core::{UploadPanel, ViewState};

/// Parts of the view a command prints after the alert line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Categories,
    TopProducts,
    Performance,
    RevenueTrends,
    ImportHistory,
    Upload,
    User,
}

/// Render the alert banner, the current view and the requested sections.
pub fn render(state: &ViewState, sections: &[Section]) -> String {
    let mut out = String::new();

    if let Some(alert) = &state.alert {
        let _ = writeln!(out, "[{}] {}", alert.severity, alert.message);
    }
    let _ = writeln!(out, "Vista: {}", state.view);

    for section in sections {
        out.push('\n');
        match section {
            Section::Summary => render_summary(&mut out, &state.summary),
            Section::Categories => {
                render_table(&mut out, "Resumen por categoría", &state.categories);
            }
            Section::TopProducts => {
                render_table(&mut out, "Productos principales", &state.top_products);
            }
            Section::Performance => render_table(&mut out, "Rendimiento", &state.performance),
            Section::RevenueTrends => {
                render_table(&mut out, "Tendencia de ingresos", &state.revenue_trends);
            }
            Section::ImportHistory => {
                render_table(&mut out, "Historial de importaciones", &state.import_history);
            }
            Section::Upload => render_upload(&mut out, &state.upload),
            Section::User => match &state.user {
                Some(user) => {
                    let _ = writeln!(out, "Usuario: {} <{}>", user.display_name(), user.email);
                }
                None => out.push_str("Usuario: desconocido\n"),
            },
        }
    }
    out
}

fn render_summary(out: &mut String, summary: &SummaryView) {
    let _ = writeln!(out, "Total producido:    {}", summary.total_produced);
    let _ = writeln!(out, "Total vendido:      {}", summary.total_sold);
    let _ = writeln!(out, "Ingresos totales:   {}", summary.total_revenue);
    let _ = writeln!(out, "Productos activos:  {}", summary.active_products);
}

fn render_upload(out: &mut String, panel: &UploadPanel) {
    match panel {
        UploadPanel::Idle => {}
        UploadPanel::Busy => out.push_str("Procesando archivo...\n"),
        UploadPanel::Imported { result } => {
            let _ = writeln!(out, "Archivo procesado exitosamente");
            let _ = writeln!(out, "Registros importados: {}", result.records_imported);
            let _ = writeln!(out, "ID de lote: {}", result.batch_id);
        }
        UploadPanel::Failed { message } => {
            let _ = writeln!(out, "{message}");
        }
    }
}

fn render_table(out: &mut String, title: &str, table: &Table) {
    let _ = writeln!(out, "{title}");

    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        if let TableRow::Cells { cells } = row {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let headers: Vec<&str> = table.headers.clone();
    push_line(out, &headers, &widths);
    for row in &table.rows {
        match row {
            TableRow::Placeholder { message, .. } => {
                let _ = writeln!(out, "  {message}");
            }
            TableRow::Cells { cells } => {
                let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
                push_line(out, &cells, &widths);
            }
        }
    }
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
