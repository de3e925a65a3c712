use crate::error::UsersError;
use roster_derive::api_model;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registry-assigned user identifier.
///
/// Path segments are parsed explicitly into this type before any comparison; text that is
/// not an unsigned integer cannot name a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = UsersError;

    /// Accepts only the canonical decimal form: ASCII digits, no sign, no padding and no
    /// leading zero. Anything else names no record.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let canonical = raw.bytes().all(|b| b.is_ascii_digit())
            && !raw.is_empty()
            && (raw.len() == 1 || !raw.starts_with('0'));
        if !canonical {
            return Err(UsersError::not_found(raw));
        }
        raw.parse::<u64>().map(Self).map_err(|_| UsersError::not_found(raw))
    }
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// A stored user record.
pub struct User {
    /// Identifier assigned at creation
    pub id: UserId,
    /// Display name; omitted when the record was created without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: Some(name.into()) }
    }
}

#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default)]
/// Request body of create and update.
pub struct UserPayload {
    /// New display name
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,
}
