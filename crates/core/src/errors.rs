use thiserror::Error;

/// Unified error type for the chart core.
/// Every fallible public function returns `Result<T, ChartError>`.
#[derive(Debug, Error)]
pub enum ChartError {
    // ── Embedded data ───────────────────────────────────────────────
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Data shape mismatch: {field} has {len} entries but there are {labels} labels")]
    DataShape {
        labels: usize,
        field: String,
        len: usize,
    },

    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response parse error: {0}")]
    ResponseParse(String),

    // ── Rendering ───────────────────────────────────────────────────
    #[error("Render backend error: {0}")]
    Render(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        ChartError::Parse(e.to_string())
    }
}

impl From<reqwest::Error> for ChartError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return ChartError::ResponseParse(e.to_string());
        }
        match e.status() {
            Some(status) => ChartError::Api {
                status: status.as_u16(),
                message: e.to_string(),
            },
            None => ChartError::Network(redact_query(e.to_string())),
        }
    }
}

/// Strip the query string from a URL embedded in a reqwest error message.
fn redact_query(msg: String) -> String {
    match msg.find('?') {
        Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
        None => msg,
    }
}
