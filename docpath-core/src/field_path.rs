use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{PathError, PathResult};
use crate::model::SegmentPath;
use crate::util::try_cast;
use crate::validation::{validate_named_array_at_least_number_of_elements, validate_non_empty_segments};

/// A reference to a field in a document
///
/// The path may consist of a single field name (a top-level field) or a list
/// of field names (a nested field). Each name is one opaque segment: `"a.b"`
/// names a single field containing a dot, not a nested field.
///
/// # Examples
/// ```
/// # use docpath_core::FieldPath;
/// let nested = FieldPath::new(["address", "city"]).unwrap();
/// assert!(nested.is_equal(&FieldPath::new(vec!["address".to_string(), "city".to_string()]).unwrap()));
/// assert!(FieldPath::new(Vec::<String>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FieldPath {
    internal_path: SegmentPath,
}

impl FieldPath {
    /// Create a path from one or more non-empty field names
    pub fn new<I, S>(field_names: I) -> PathResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field_names: Vec<String> = field_names.into_iter().map(Into::into).collect();

        validate_named_array_at_least_number_of_elements("FieldPath", &field_names, "fieldNames", 1)?;
        validate_non_empty_segments(&field_names)?;

        Ok(Self {
            internal_path: SegmentPath::new(field_names),
        })
    }

    /// Path referring to the document's own identifier
    pub fn document_id() -> Self {
        Self {
            internal_path: SegmentPath::key_field(),
        }
    }

    pub fn is_equal(&self, other: &FieldPath) -> bool {
        self.internal_path.is_equal(&other.internal_path)
    }

    /// Equality against a type-erased value
    ///
    /// Fails with `InvalidArgument` when `other` is not a `FieldPath`.
    pub fn is_equal_dyn(&self, other: &dyn Any) -> PathResult<bool> {
        let path = try_cast::<FieldPath>(other)?;
        Ok(self.is_equal(path))
    }

    pub fn segments(&self) -> &[String] {
        self.internal_path.segments()
    }

    pub fn len(&self) -> usize {
        self.internal_path.len()
    }

    /// Always false; a constructed path has at least one segment
    pub fn is_empty(&self) -> bool {
        self.internal_path.is_empty()
    }

    pub fn is_document_id(&self) -> bool {
        self.internal_path.is_key_field()
    }

    pub fn canonical_string(&self) -> String {
        self.internal_path.canonical_string()
    }

    pub fn internal_path(&self) -> &SegmentPath {
        &self.internal_path
    }
}

/// Shorthand for [`FieldPath::document_id`]
pub fn document_id() -> FieldPath {
    FieldPath::document_id()
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

impl PartialOrd for FieldPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldPath {
    fn cmp(&self, other: &Self) -> Ordering {
        SegmentPath::comparator(&self.internal_path, &other.internal_path)
    }
}

impl TryFrom<Vec<String>> for FieldPath {
    type Error = PathError;

    fn try_from(field_names: Vec<String>) -> Result<Self, Self::Error> {
        FieldPath::new(field_names)
    }
}

impl TryFrom<&[&str]> for FieldPath {
    type Error = PathError;

    fn try_from(field_names: &[&str]) -> Result<Self, Self::Error> {
        FieldPath::new(field_names.iter().copied())
    }
}

impl From<FieldPath> for Vec<String> {
    fn from(path: FieldPath) -> Self {
        path.internal_path.segments().to_vec()
    }
}

/// Build a [`FieldPath`] from a variadic list of field names
///
/// Expands to a `PathResult<FieldPath>`.
///
/// # Examples
/// ```
/// # use docpath_core::field_path;
/// let path = field_path!("a", "b").unwrap();
/// assert_eq!(path.segments(), ["a", "b"]);
/// assert!(field_path!().is_err());
/// ```
#[macro_export]
macro_rules! field_path {
    ($($name:expr),* $(,)?) => {{
        let field_names: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$(::std::convert::Into::into($name)),*];
        $crate::FieldPath::new(field_names)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Code;
    use crate::model::DOCUMENT_KEY_NAME;

    // === Construction Tests ===

    #[test]
    fn test_new_single_segment() {
        let path = FieldPath::new(["title"]).unwrap();
        assert_eq!(path.segments(), ["title"]);
        assert_eq!(path.len(), 1);
        assert!(!path.is_empty());
    }

    #[test]
    fn test_new_keeps_segments_opaque() {
        let path = FieldPath::new(["a.b", " c "]).unwrap();
        assert_eq!(path.segments(), ["a.b", " c "]);
    }

    #[test]
    fn test_new_rejects_no_segments() {
        let err = FieldPath::new(Vec::<&str>::new()).unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
        assert_eq!(
            err.message(),
            "Function FieldPath() requires its fieldNames argument to be an array with at least 1 element."
        );
    }

    #[test]
    fn test_new_rejects_empty_segment() {
        let err = FieldPath::new(["a", "", "c"]).unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
        assert_eq!(
            err.message(),
            "Invalid field name at argument 2. Field names must not be empty."
        );
    }

    #[test]
    fn test_macro_and_try_from() {
        let from_macro = field_path!("a", String::from("b")).unwrap();
        let from_slice = FieldPath::try_from(&["a", "b"][..]).unwrap();
        let from_vec = FieldPath::try_from(vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(from_macro, from_slice);
        assert_eq!(from_slice, from_vec);
        assert!(field_path!("x", "").is_err());
    }

    // === Equality Tests ===

    #[test]
    fn test_is_equal() {
        let a = FieldPath::new(["a", "b"]).unwrap();
        assert!(a.is_equal(&FieldPath::new(["a", "b"]).unwrap()));
        assert!(!a.is_equal(&FieldPath::new(["b", "a"]).unwrap()));
        assert!(!a.is_equal(&FieldPath::new(["a"]).unwrap()));
        assert!(!a.is_equal(&FieldPath::new(["a", "b", "c"]).unwrap()));
    }

    #[test]
    fn test_is_equal_dyn() {
        let a = FieldPath::new(["a"]).unwrap();
        let same = FieldPath::new(["a"]).unwrap();
        let other = FieldPath::new(["z"]).unwrap();
        assert!(a.is_equal_dyn(&same).unwrap());
        assert!(!a.is_equal_dyn(&other).unwrap());

        let not_a_path = vec!["a".to_string()];
        let err = a.is_equal_dyn(&not_a_path).unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
    }

    // === Document Id Tests ===

    #[test]
    fn test_document_id() {
        let id = document_id();
        assert!(id.is_equal(&document_id()));
        assert!(id.is_document_id());
        assert_eq!(id.segments(), [DOCUMENT_KEY_NAME]);
        assert!(!id.is_equal(&FieldPath::new(["id"]).unwrap()));
        assert!(id.is_equal(&FieldPath::new([DOCUMENT_KEY_NAME]).unwrap()));
    }

    // === Display / Ordering Tests ===

    #[test]
    fn test_display_uses_canonical_string() {
        let path = FieldPath::new(["user", "first name"]).unwrap();
        assert_eq!(path.to_string(), "user.`first name`");
        assert_eq!(document_id().to_string(), "__name__");
    }

    #[test]
    fn test_ordering() {
        let mut paths = vec![
            FieldPath::new(["b"]).unwrap(),
            FieldPath::new(["a", "b"]).unwrap(),
            FieldPath::new(["a"]).unwrap(),
        ];
        paths.sort();
        let rendered: Vec<String> = paths.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["a", "a.b", "b"]);
    }

    #[test]
    fn test_field_path_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldPath>();
    }
}
