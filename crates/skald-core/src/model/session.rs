//! The local session record.

use serde::{Deserialize, Serialize};

/// Local record of the signed-in user: the bearer token plus the handle the
/// token was issued for. The two travel together; a session is never stored
/// with only one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub handle: String,
}

impl Session {
    pub fn new(token: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            handle: handle.into(),
        }
    }
}
