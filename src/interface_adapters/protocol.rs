use serde::{Deserialize, Serialize};

// Request payload for plant identification.
#[derive(Debug, Deserialize)]
pub struct IdentifyRequest {
    // Raw base64 or a `data:image/...;base64,` URI. Null and absent are both accepted here
    // and rejected by the use case.
    #[serde(rename = "base64Image")]
    pub base64_image: Option<String>,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
