//! Track listing: enumerate a directory and load each file's raw bytes.
//!
//! The lister is intentionally dumb: no recursion, no extension filtering
//! and no sorting guarantee. Whatever the playback side does with the bytes
//! is its own business.

mod list;
mod model;
mod picker;

pub use list::*;
pub use model::*;
pub use picker::*;
