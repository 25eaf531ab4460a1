pub mod errors;
pub mod field_path;
pub mod model;
pub mod util;
pub mod validation;

pub use errors::*;
pub use field_path::*;
pub use model::{SegmentPath, DOCUMENT_KEY_NAME};
