//! docpath - Typed field paths for document database clients
//!
//! This crate provides the public API for referencing document fields.
//!
//! # Example
//!
//! ```
//! use docpath::{document_id, FieldPath};
//!
//! let city = FieldPath::new(["address", "city"])?;
//! assert!(!city.is_equal(&document_id()));
//! # Ok::<(), docpath::PathError>(())
//! ```

// Re-export the field path API
pub use docpath_core::field_path;
pub use docpath_core::{document_id, FieldPath, DOCUMENT_KEY_NAME};

// Re-export error types callers match on
pub use docpath_core::{Code, PathError, PathResult};

// Re-export validation helpers shared with higher-level APIs
pub use docpath_core::util::try_cast;
pub use docpath_core::validation;
