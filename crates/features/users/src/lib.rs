//! Users feature slice.
//!
//! Owns the in-memory [`UserRegistry`] and, with the `server` feature, the HTTP handlers
//! mounted by [`router::users_router`]. The registry lives inside the [`Users`] slice
//! registered in the API state; handlers reach it through axum's `State`.

mod error;
#[cfg(feature = "server")]
mod handlers;
mod model;
#[cfg(feature = "server")]
mod payload;
mod registry;
#[cfg(feature = "server")]
pub mod router;

pub use crate::error::{UsersError, UsersErrorExt};
pub use crate::model::{User, UserId, UserPayload};
pub use crate::registry::UserRegistry;
use roster_kernel::domain::config::UsersConfig;
use roster_kernel::domain::registry::InitializedSlice;

/// Users feature state
#[roster_derive::roster_slice]
pub struct Users {
    pub registry: UserRegistry,
}

/// Initialize the users slice.
///
/// # Errors
/// Never fails for the in-memory registry.
pub fn init(config: &UsersConfig) -> Result<InitializedSlice, UsersError> {
    let registry = if config.seed { UserRegistry::seeded() } else { UserRegistry::new() };

    tracing::info!(seeded = config.seed, users = registry.len(), "Users feature initialized");

    Ok(InitializedSlice::new(Users::new(UsersInner { registry })))
}
