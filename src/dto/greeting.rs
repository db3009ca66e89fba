use serde::Serialize;
use utoipa::ToSchema;

/// Fixed payload returned by `/api/hello`.
#[derive(Debug, Serialize, ToSchema)]
pub struct GreetingResponse {
    /// Always "hello API".
    pub greeting: String,
}

impl GreetingResponse {
    /// Build the canonical greeting.
    pub fn hello() -> Self {
        Self {
            greeting: "hello API".to_string(),
        }
    }
}
