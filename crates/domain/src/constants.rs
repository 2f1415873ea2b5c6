//! Application constants
//!
//! Endpoint paths, storage keys and the user-facing messages shown by the
//! dashboard. Messages are kept verbatim so every rendering target shows the
//! same text.

// API layout
pub const API_BASE_PATH: &str = "/api/v1";
pub const TOKEN_PATH: &str = "/auth/token";
pub const REGISTER_PATH: &str = "/auth/register";
pub const CURRENT_USER_PATH: &str = "/auth/me";
pub const UPLOAD_PATH: &str = "/files/upload";
pub const IMPORT_BATCHES_PATH: &str = "/files/batches";
pub const SUMMARY_PATH: &str = "/analytics/summary";
pub const PERFORMANCE_PATH: &str = "/analytics/performance";
pub const REVENUE_TRENDS_PATH: &str = "/analytics/trends/revenue";
pub const UPLOAD_FIELD_NAME: &str = "file";

// Session storage
pub const TOKEN_STORAGE_KEY: &str = "auth_token";
pub const KEYCHAIN_SERVICE: &str = "prodboard";

// Views
pub const DEFAULT_PERFORMANCE_LIMIT: u32 = 10;
pub const PERFORMANCE_COLUMNS: usize = 6;
pub const IMPORT_HISTORY_COLUMNS: usize = 6;
pub const CATEGORY_COLUMNS: usize = 4;
pub const TOP_PRODUCT_COLUMNS: usize = 2;
pub const TREND_COLUMNS: usize = 2;
pub const ALERT_TIMEOUT_SECS: u64 = 5;

// Labels
pub const NO_DATA_MESSAGE: &str = "No hay datos disponibles";
pub const NO_IMPORTS_MESSAGE: &str = "No hay importaciones registradas";
pub const UNCATEGORIZED_LABEL: &str = "Sin Categoría";
pub const REPORT_FILE_PREFIX: &str = "reporte";

// Alerts
pub const LOGIN_SUCCESS: &str = "Login exitoso";
pub const LOGIN_ERROR_PREFIX: &str = "Error de login: ";
pub const LOGIN_FALLBACK: &str = "Credenciales incorrectas";
pub const LOGIN_MISSING_TOKEN: &str = "Respuesta sin token de acceso";
pub const MISSING_CREDENTIALS: &str = "Por favor, ingresa usuario y contraseña";
pub const REGISTER_SUCCESS: &str = "Usuario registrado exitosamente. Ahora puedes iniciar sesión.";
pub const REGISTER_ERROR_PREFIX: &str = "Error de registro: ";
pub const REGISTER_FALLBACK: &str = "Error desconocido";
pub const MISSING_REGISTRATION_FIELDS: &str = "Por favor, completa todos los campos";
pub const CONNECTION_ERROR_PREFIX: &str = "Error de conexión: ";
pub const SESSION_EXPIRED: &str = "Sesión expirada. Por favor, inicia sesión nuevamente.";
pub const MISSING_FILE: &str = "Por favor, selecciona un archivo";
pub const UPLOAD_ERROR_PREFIX: &str = "Error: ";
pub const UPLOAD_FALLBACK: &str = "Error al procesar archivo";
pub const DOWNLOAD_ERROR: &str = "Error al descargar el reporte";
