//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading, the shared API state and the
//! system routes every deployment carries.
//!
//! ## Config loading
//! ```rust,no_run
//! use roster_kernel::config::load_config;
//! use roster_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("roster")).unwrap();
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use roster_domain as domain;
