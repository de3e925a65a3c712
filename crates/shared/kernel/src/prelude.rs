pub use crate::config::{ConfigError, load_config};
pub use roster_domain::config::ApiConfig;
pub use roster_domain::constants::{SYSTEM_TAG, USERS_TAG};
pub use roster_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError, ErrorBody, MessageBody};
