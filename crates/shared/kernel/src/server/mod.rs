//! Server-side building blocks shared by every feature slice.

mod health;
mod response;
pub mod router;
mod state;

pub use health::HealthResponse;
pub use response::{ErrorBody, MessageBody};
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateErrorExt, ApiStateInner};
