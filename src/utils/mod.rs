//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window, storage, document and media-query access
//! - [`log`] - Console logging (stderr off the browser)

pub mod dom;
pub mod log;
