//! # Virtual File System
//!
//! In-memory tree of named entries simulated for the desktop metaphor.
//!
//! ## Philosophy
//!
//! - **Tagged shapes**: drives, folders, files and shortcuts are enum
//!   variants, so "a shortcut has no children" and "a file has at most one
//!   content source" hold structurally instead of by convention
//! - **Total lookups**: resolution returns `Option`; a missing segment is
//!   a `None`, never a panic
//! - **Immutable after construction**: the tree is built once at session
//!   start; no create/delete/rename surface exists
//!
//! ## Non-Goals
//!
//! This is NOT real file storage. Nothing persists, file payloads are
//! inline strings or fetchable references, and there is no permission
//! model.

mod entry;
pub mod path;
mod seed;
mod tree;

pub use entry::{Children, ContentSource, Entry, FileKind, SystemApp};
pub use seed::{build_tree, CertificateRecord, DesktopProfile, ProjectRecord, SocialLink};
pub use tree::VfsTree;
