//! Facade crate for the roster service.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `roster` with the `server` feature.
//! - Call `roster::init` to build the feature slices, then mount `roster::server::router::api_router`.

pub use roster_domain as domain;
use roster_domain::config::ApiConfig;
pub use roster_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use roster_kernel::server::ApiState;
        pub use roster_kernel::server::router::system_router;
        pub use roster_users::router::users_router;
        use utoipa_axum::router::OpenApiRouter;

        /// Every route the service exposes, system routes included.
        pub fn api_router() -> OpenApiRouter<ApiState> {
            OpenApiRouter::new().merge(system_router()).merge(users_router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use roster_users as users;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "users",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Users
    slices.push(features::users::init(&config.users)?);

    Ok(slices)
}
