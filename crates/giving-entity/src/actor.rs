//! Authenticated caller identity.

use serde::{Deserialize, Serialize};

/// The admin on whose behalf a request runs.
///
/// Inserted into request extensions once the bearer key has been resolved;
/// requests without one are treated as anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Platform user ID.
    pub id: i64,
    /// Login e-mail.
    pub email: String,
}

impl Actor {
    /// Creates an actor.
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}
