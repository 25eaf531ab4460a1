//! Argument validation shared by the public API
//!
//! Every check returns [`PathError::InvalidArgument`] with a message that
//! names the offending function or argument, so callers can surface it as-is.

use crate::errors::{PathError, PathResult};

/// Format a count with a noun, adding a trailing `s` unless the count is 1
///
/// # Examples
/// ```
/// # use docpath_core::validation::format_plural;
/// assert_eq!(format_plural(1, "element"), "1 element");
/// assert_eq!(format_plural(3, "element"), "3 elements");
/// assert_eq!(format_plural(0, "element"), "0 elements");
/// ```
pub fn format_plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Require that the array passed as `name` to `function_name` has at least
/// `min_elements` items
///
/// # Examples
/// ```
/// # use docpath_core::validation::validate_named_array_at_least_number_of_elements;
/// assert!(validate_named_array_at_least_number_of_elements("f", &["a"], "xs", 1).is_ok());
///
/// let err = validate_named_array_at_least_number_of_elements::<&str>("f", &[], "xs", 1)
///     .unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Function f() requires its xs argument to be an array with at least 1 element."
/// );
/// ```
pub fn validate_named_array_at_least_number_of_elements<T>(
    function_name: &str,
    value: &[T],
    name: &str,
    min_elements: usize,
) -> PathResult<()> {
    if value.len() < min_elements {
        tracing::debug!(
            function = function_name,
            argument = name,
            len = value.len(),
            min = min_elements,
            "Rejected array argument with too few elements"
        );
        return Err(PathError::InvalidArgument(format!(
            "Function {}() requires its {} argument to be an array with at least {}.",
            function_name,
            name,
            format_plural(min_elements, "element")
        )));
    }
    Ok(())
}

/// Require every field name to be non-empty
///
/// The error reports the 1-based position of the first empty name.
pub fn validate_non_empty_segments<S: AsRef<str>>(field_names: &[S]) -> PathResult<()> {
    let empty = field_names
        .iter()
        .position(|name| name.as_ref().is_empty());

    if let Some(index) = empty {
        let position = index + 1;
        tracing::debug!(position, "Rejected empty field name");
        return Err(PathError::InvalidArgument(format!(
            "Invalid field name at argument {}. Field names must not be empty.",
            position
        )));
    }
    Ok(())
}
