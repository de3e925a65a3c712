use std::borrow::Cow;
use std::fmt::Display;

/// Errors raised by the users feature slice.
#[roster_derive::roster_error]
pub enum UsersError {
    /// No record carries the requested identifier.
    #[error("User {id} not found{}", format_context(.context))]
    NotFound { id: String, context: Option<Cow<'static, str>> },

    /// A JSON body was sent but could not be read; `status` is the HTTP status to answer with.
    #[error("Invalid user payload{}: {message}", format_context(.context))]
    InvalidPayload { status: u16, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal users error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl UsersError {
    pub(crate) fn not_found(id: impl Display) -> Self {
        Self::NotFound { id: id.to_string(), context: None }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::UsersError;
    use axum::Json;
    use axum::extract::rejection::JsonRejection;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use roster_kernel::domain::constants::{INTERNAL_ERROR, INVALID_PAYLOAD, USER_NOT_FOUND};
    use roster_kernel::server::{ApiStateError, ErrorBody};

    impl IntoResponse for UsersError {
        fn into_response(self) -> Response {
            let (status, message) = match &self {
                Self::NotFound { .. } => {
                    tracing::debug!(error = %self, "Lookup matched no user");
                    (StatusCode::NOT_FOUND, USER_NOT_FOUND)
                },
                Self::InvalidPayload { status, .. } => {
                    tracing::debug!(error = %self, "Rejected user payload");
                    (StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST), INVALID_PAYLOAD)
                },
                Self::Internal { .. } => {
                    tracing::error!(error = %self, "Users request failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
                },
            };

            (status, Json(ErrorBody::new(message))).into_response()
        }
    }

    impl From<JsonRejection> for UsersError {
        fn from(rejection: JsonRejection) -> Self {
            Self::InvalidPayload {
                status: rejection.status().as_u16(),
                message: rejection.body_text().into(),
                context: None,
            }
        }
    }

    impl From<ApiStateError> for UsersError {
        fn from(err: ApiStateError) -> Self {
            Self::from(err.to_string())
        }
    }
}
