use std::any::{type_name, Any};

use crate::errors::{PathError, PathResult};

/// Narrow a type-erased value to `T`
///
/// Used where a value crosses a `dyn Any` boundary and static typing can no
/// longer guarantee the concrete type. A mismatch is an argument error, never
/// a silent `false`.
///
/// # Examples
/// ```
/// # use docpath_core::util::try_cast;
/// let value: Box<dyn std::any::Any> = Box::new(7u32);
/// assert_eq!(*try_cast::<u32>(value.as_ref()).unwrap(), 7);
/// assert!(try_cast::<String>(value.as_ref()).is_err());
/// ```
pub fn try_cast<T: Any>(value: &dyn Any) -> PathResult<&T> {
    value.downcast_ref::<T>().ok_or_else(|| {
        tracing::debug!(expected = type_name::<T>(), "Type narrowing failed");
        PathError::InvalidArgument(
            "Type does not match the expected instance. Did you pass a reference from a different SDK?"
                .to_string(),
        )
    })
}
