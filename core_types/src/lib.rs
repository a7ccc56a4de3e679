//! # Core Types
//!
//! Shared identity types for the desktop session.
//!
//! ## Philosophy
//!
//! - **Stable keys**: windows are addressed by caller-chosen string keys,
//!   so re-opening a logical window focuses it instead of duplicating it
//! - **Explicit uniqueness**: when a launch must spawn a fresh instance,
//!   the uniqueness token is an explicit value, not a clock read

mod ids;

pub use ids::{LaunchToken, WindowId};
