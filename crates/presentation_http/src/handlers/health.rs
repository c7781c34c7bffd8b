//! Health check handler

/// Liveness check - is the server running?
pub async fn health_check() -> &'static str {
    "ok"
}
