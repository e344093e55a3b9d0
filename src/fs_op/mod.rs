//! One-shot filesystem operations.
//!
//! Each operation is a single synchronous call into the host filesystem API
//! wrapped with a focused error type. Handles are scoped so they are
//! released on every exit path, and no operation retries or keeps state
//! between calls.

pub mod append;
pub mod copy;
pub mod create;
pub mod error;
pub mod list;
pub mod metadata;
pub mod mv;
pub mod permissions;
pub mod read;
pub mod remove;
pub mod stat;

pub use error::FsOpError;
