//! Internal segment representation backing the public field path

use std::cmp::Ordering;

/// Reserved segment naming a document's own key rather than a stored field
pub const DOCUMENT_KEY_NAME: &str = "__name__";

/// Ordered list of field-name segments
///
/// Callers are responsible for validating segments before construction;
/// this type only stores and compares them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentPath {
    segments: Vec<String>,
}

impl SegmentPath {
    pub(crate) fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub(crate) fn key_field() -> Self {
        Self::new(vec![DOCUMENT_KEY_NAME.to_string()])
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    pub fn first_segment(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Element-wise ordinal equality
    pub fn is_equal(&self, other: &SegmentPath) -> bool {
        self.len() == other.len()
            && self
                .segments
                .iter()
                .zip(other.segments.iter())
                .all(|(a, b)| a == b)
    }

    /// Total order: first differing segment decides, otherwise the shorter path
    /// sorts first
    pub fn comparator(left: &SegmentPath, right: &SegmentPath) -> Ordering {
        for (a, b) in left.segments.iter().zip(right.segments.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        left.len().cmp(&right.len())
    }

    /// True when this path is exactly the document key sentinel
    pub fn is_key_field(&self) -> bool {
        self.len() == 1 && self.segments[0] == DOCUMENT_KEY_NAME
    }

    /// Dotted display form
    ///
    /// Segments that are not plain identifiers are wrapped in backticks, with
    /// backslashes and backticks escaped.
    ///
    /// # Examples
    /// ```
    /// # use docpath_core::FieldPath;
    /// let path = FieldPath::new(["a", "b c", "d"]).unwrap();
    /// assert_eq!(path.canonical_string(), "a.`b c`.d");
    /// ```
    pub fn canonical_string(&self) -> String {
        self.segments
            .iter()
            .map(String::as_str)
            .map(canonical_segment)
            .collect::<Vec<_>>()
            .join(".")
    }
}

fn canonical_segment(segment: &str) -> String {
    let escaped = segment.replace('\\', "\\\\").replace('`', "\\`");
    if is_valid_identifier(&escaped) {
        escaped
    } else {
        format!("`{}`", escaped)
    }
}

fn is_valid_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
