use roster_derive::api_model;

/// Error payload: `{"error": "..."}`.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable reason
    pub error: String,
}

/// Confirmation payload: `{"message": "..."}`.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct MessageBody {
    /// Human-readable confirmation
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
