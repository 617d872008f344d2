//! JSON document adapter backing all task ports with a single file.
//!
//! The document lives inside a data directory opened with `cap-std`, so the
//! adapter can only touch files below that directory.

mod document;
mod store;

pub use store::{DEFAULT_FILE_NAME, JsonStoreError, JsonTaskStore};
