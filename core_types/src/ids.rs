//! Identifiers for session entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier for a window.
///
/// Window ids are chosen by the caller that launches the window and encode
/// the window's logical identity (e.g. `explorer-C:/Users/guest/Documents`).
/// Opening an id that is already present focuses the existing window rather
/// than creating a second one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(String);

impl WindowId {
    /// Creates a window id from a key string
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WindowId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for WindowId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Uniqueness token appended to window ids that intentionally spawn a new
/// instance per launch.
///
/// Tokens are random rather than clock-derived, so two launches in the same
/// instant still receive distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchToken(Uuid);

impl LaunchToken {
    /// Creates a new random launch token
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a launch token from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for LaunchToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LaunchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}
