use serde::{Deserialize, Serialize};

/// Envelope for every api response.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBase<T> {
    pub status: i32,
    pub message: String,
    pub content: Option<T>,
}

impl<T> ResponseBase<T> {
    pub fn new(status: i32, message: &str, content: Option<T>) -> Self {
        Self {
            status,
            message: message.to_string(),
            content,
        }
    }

    pub fn ok(content: Option<T>) -> Self {
        Self::new(200, "Ok", content)
    }

    pub fn err(status: i32, message: &str) -> Self {
        Self::new(status, message, None)
    }
}
