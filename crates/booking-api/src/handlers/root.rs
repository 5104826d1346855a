//! Root handler

/// GET /
pub async fn hello_world() -> &'static str {
    "Hello world"
}
