use crate::error::UsersError;
use crate::model::UserPayload;
use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};

/// Name carried by a create or update request.
///
/// Bodies that do not declare a JSON content type are ignored and yield no name. A JSON
/// body that fails to parse, or whose `name` is not a string, is rejected with an
/// `ErrorBody`.
#[derive(Debug, Default)]
pub(crate) struct NamePayload(pub(crate) Option<String>);

impl<S: Send + Sync> FromRequest<S> for NamePayload {
    type Rejection = UsersError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !declares_json(req.headers()) {
            return Ok(Self(None));
        }

        let Json(payload) = Json::<UserPayload>::from_request(req, state).await?;
        Ok(Self(payload.name))
    }
}

fn declares_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
