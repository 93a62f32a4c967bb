//! User identity handed to domain providers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of the requesting user.
///
/// Authentication itself (password hashing, token issuance) lives outside
/// this subsystem; by the time a load runs, the identity is either resolved
/// or the load fails with an authorization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
