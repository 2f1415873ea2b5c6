//! Dashboard data loads
//!
//! Every load here is read-only and degrades silently: a missing session, a
//! 401, a failed request or an undecodable body is logged and the previous
//! view is left as it was. Loads return `true` only when new data was applied.

use prodboard_domain::constants::{
    CURRENT_USER_PATH, DEFAULT_PERFORMANCE_LIMIT, IMPORT_BATCHES_PATH, PERFORMANCE_PATH,
    REVENUE_TRENDS_PATH, SUMMARY_PATH,
};
use prodboard_domain::{
    ImportBatch, PerformanceRow, RevenueTrends, SummaryEnvelope, SummaryMetrics, TrendPeriod,
    UserProfile,
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::SessionClient;
use crate::transport_ports::ApiRequest;
use crate::view::{
    render_category_breakdown, render_import_history, render_performance, render_revenue_trends,
    render_summary, render_top_products,
};

impl SessionClient {
    /// Reload the summary cards and the default performance table together
    pub async fn refresh_dashboard(&self) -> bool {
        let (summary, performance) =
            tokio::join!(self.load_summary(), self.load_default_performance());
        summary && performance
    }

    /// Summary cards plus the per-category and top-product breakdowns
    #[instrument(skip(self))]
    pub async fn load_summary(&self) -> bool {
        let Some(envelope) = self.fetch_json::<SummaryEnvelope>(ApiRequest::get(SUMMARY_PATH)).await
        else {
            return false;
        };
        let categories = render_category_breakdown(&envelope.categories);
        let top_products = render_top_products(&envelope.top_products);
        let summary = render_summary(&SummaryMetrics::from(envelope));

        let mut state = self.state.lock();
        state.summary = summary;
        state.categories = categories;
        state.top_products = top_products;
        true
    }

    /// Load the top `limit` products by the server's ranking
    #[instrument(skip(self))]
    pub async fn load_performance(&self, limit: u32) -> bool {
        let request = ApiRequest::get(PERFORMANCE_PATH).with_query("limit", limit);
        let Some(rows) = self.fetch_json::<Vec<PerformanceRow>>(request).await else {
            return false;
        };
        debug!(rows = rows.len(), "performance loaded");
        self.state.lock().performance = render_performance(&rows);
        true
    }

    pub async fn load_default_performance(&self) -> bool {
        self.load_performance(DEFAULT_PERFORMANCE_LIMIT).await
    }

    /// Revenue bucketed by day, week or month over the backend's default window
    #[instrument(skip(self))]
    pub async fn load_revenue_trends(&self, period: TrendPeriod) -> bool {
        let request = ApiRequest::get(REVENUE_TRENDS_PATH).with_query("period", period);
        let Some(trends) = self.fetch_json::<RevenueTrends>(request).await else {
            return false;
        };
        debug!(buckets = trends.trends.len(), "revenue trends loaded");
        self.state.lock().revenue_trends = render_revenue_trends(&trends.trends);
        true
    }

    #[instrument(skip(self))]
    pub async fn load_import_history(&self) -> bool {
        let request = ApiRequest::get(IMPORT_BATCHES_PATH);
        let Some(batches) = self.fetch_json::<Vec<ImportBatch>>(request).await else {
            return false;
        };
        self.state.lock().import_history = render_import_history(&batches);
        true
    }

    /// Fetch the signed-in user's profile for the dashboard header
    #[instrument(skip(self))]
    pub async fn load_current_user(&self) -> bool {
        let Some(profile) = self.fetch_json::<UserProfile>(ApiRequest::get(CURRENT_USER_PATH)).await
        else {
            return false;
        };
        self.state.lock().user = Some(profile);
        true
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Option<T> {
        if !self.session.is_authenticated() {
            debug!(path = %request.path, "no session; skipping load");
            return None;
        }

        let path = request.path.clone();
        let reply = match self.authed_request(request).await {
            Ok(Some(reply)) => reply,
            Ok(None) => return None,
            Err(err) => {
                warn!(%path, error = %err, "load failed");
                return None;
            }
        };
        if !reply.is_success() {
            warn!(%path, status = reply.status, "load rejected");
            return None;
        }
        match reply.json() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%path, error = %err, "load returned an unexpected body");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use prodboard_domain::constants::{NO_DATA_MESSAGE, NO_IMPORTS_MESSAGE};

    use super::super::testing::harness;
    use super::*;
    use crate::view::{SummaryView, TableRow};

    #[tokio::test]
    async fn summary_missing_revenue_renders_zero() {
        let h = harness(Some("tok"));
        h.transport.respond(
            SUMMARY_PATH,
            200,
            r#"{"summary":{"total_produced":120,"total_sold":80,"active_products":4}}"#,
        );

        h.client.load_summary().await;

        let summary = h.client.snapshot().summary;
        assert_eq!(summary.total_revenue, "$0.00");
        assert_eq!(summary.total_produced, "120");
        assert_eq!(summary.active_products, "4");
    }

    #[tokio::test]
    async fn summary_failure_keeps_previous_values() {
        let h = harness(Some("tok"));
        h.transport.respond(SUMMARY_PATH, 200, r#"{"summary":{"total_revenue":99.5}}"#);
        h.client.load_summary().await;

        h.transport.respond(SUMMARY_PATH, 500, r#"{"detail":"boom"}"#);
        h.client.load_summary().await;
        h.transport.respond(SUMMARY_PATH, 200, "not json");
        h.client.load_summary().await;

        let state = h.client.snapshot();
        assert_eq!(state.summary.total_revenue, "$99.50");
        assert!(state.alert.is_none());
    }

    #[tokio::test]
    async fn summary_fills_breakdown_tables() {
        let h = harness(Some("tok"));
        h.transport.respond(
            SUMMARY_PATH,
            200,
            r#"{"summary":{"total_revenue":1320.5},
                "categories":[{"category_name":"Registro","product_count":2,
                               "total_revenue":1320.5,"total_production":55}],
                "top_products":[{"name":"Actas","revenue":900},{"name":"Copias","revenue":420.5}]}"#,
        );

        assert!(h.client.load_summary().await);

        let state = h.client.snapshot();
        assert_eq!(
            state.categories.rows,
            vec![TableRow::Cells {
                cells: vec!["Registro".into(), "2".into(), "$1320.50".into(), "55".into()]
            }]
        );
        assert_eq!(state.top_products.rows.len(), 2);
        let TableRow::Cells { cells } = &state.top_products.rows[0] else { panic!("expected cells") };
        assert_eq!(cells, &vec!["Actas".to_string(), "$900.00".to_string()]);
    }

    #[tokio::test]
    async fn summary_without_breakdowns_shows_placeholders() {
        let h = harness(Some("tok"));
        h.transport.respond(SUMMARY_PATH, 200, r#"{"summary":{}}"#);

        h.client.load_summary().await;

        let state = h.client.snapshot();
        assert!(state.categories.is_placeholder());
        assert!(state.top_products.is_placeholder());
    }

    #[tokio::test]
    async fn revenue_trends_send_period() {
        let h = harness(Some("tok"));
        h.transport.respond(
            REVENUE_TRENDS_PATH,
            200,
            r#"{"trends":[{"date":"2024-04-01","value":310.25}],"period":"monthly"}"#,
        );

        assert!(h.client.load_revenue_trends(TrendPeriod::Monthly).await);

        let sent = &h.transport.requests()[0];
        assert_eq!(sent.query, vec![("period".to_string(), "monthly".to_string())]);
        assert_eq!(
            h.client.snapshot().revenue_trends.rows,
            vec![TableRow::Cells { cells: vec!["1/4/2024".into(), "$310.25".into()] }]
        );
    }

    #[tokio::test]
    async fn load_results_report_whether_data_was_applied() {
        let h = harness(Some("tok"));
        h.transport.respond(PERFORMANCE_PATH, 500, r#"{"detail":"boom"}"#);
        h.transport.respond(IMPORT_BATCHES_PATH, 200, "not json");
        h.transport.respond(SUMMARY_PATH, 200, r#"{"summary":{}}"#);

        assert!(!h.client.load_default_performance().await);
        assert!(!h.client.load_import_history().await);
        assert!(!h.client.load_revenue_trends(TrendPeriod::Daily).await);
        assert!(h.client.load_summary().await);
        assert!(!h.client.refresh_dashboard().await);

        let h = harness(None);
        assert!(!h.client.load_summary().await);
        assert!(!h.client.load_current_user().await);
    }

    #[tokio::test]
    async fn performance_sends_limit_and_renders_rows() {
        let h = harness(Some("tok"));
        h.transport.respond(
            PERFORMANCE_PATH,
            200,
            r#"[
                {"product_name":"Actas","category_name":"Registro","total_produced":10,
                 "total_sold":7,"total_revenue":1500,"sell_through_rate":70},
                {"product_name":"Copias","category_name":null,"total_produced":3,
                 "total_sold":1,"total_revenue":12.346,"sell_through_rate":33.333}
            ]"#,
        );

        h.client.load_performance(5).await;

        let sent = &h.transport.requests()[0];
        assert_eq!(sent.query, vec![("limit".to_string(), "5".to_string())]);

        let table = h.client.snapshot().performance;
        assert_eq!(table.rows.len(), 2);
        let TableRow::Cells { cells } = &table.rows[1] else { panic!("expected cells") };
        assert_eq!(cells[1], "Sin Categoría");
        assert_eq!(cells[4], "$12.35");
        assert_eq!(cells[5], "33.3%");
    }

    #[tokio::test]
    async fn empty_performance_renders_placeholder() {
        let h = harness(Some("tok"));
        h.transport.respond(PERFORMANCE_PATH, 200, "[]");

        h.client.load_default_performance().await;

        let table = h.client.snapshot().performance;
        assert_eq!(
            table.rows,
            vec![TableRow::Placeholder { message: NO_DATA_MESSAGE.into(), colspan: 6 }]
        );
        assert_eq!(h.transport.requests()[0].query[0].1, "10");
    }

    #[tokio::test]
    async fn loads_are_skipped_without_session() {
        let h = harness(None);
        h.client.refresh_dashboard().await;
        h.client.load_import_history().await;
        h.client.load_current_user().await;

        assert!(h.transport.requests().is_empty());
        assert_eq!(h.client.snapshot().summary, SummaryView::default());
    }

    #[tokio::test]
    async fn import_history_and_profile_are_stored() {
        let h = harness(Some("tok"));
        h.transport.respond(IMPORT_BATCHES_PATH, 200, "[]");
        h.transport.respond(
            CURRENT_USER_PATH,
            200,
            r#"{"id":3,"username":"ana","email":"ana@example.com","full_name":"Ana Pérez"}"#,
        );

        h.client.load_import_history().await;
        h.client.load_current_user().await;

        let state = h.client.snapshot();
        assert_eq!(
            state.import_history.rows,
            vec![TableRow::Placeholder { message: NO_IMPORTS_MESSAGE.into(), colspan: 6 }]
        );
        assert_eq!(state.user.as_ref().map(UserProfile::display_name), Some("Ana Pérez"));
    }
}
