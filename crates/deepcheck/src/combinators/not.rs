//! NOT combinator - logical negation of validators
//!
//! ```rust
//! use deepcheck::prelude::*;
//!
//! let not_admin = not(starts_with("admin"));
//! assert!(not_admin.validate("user123").is_ok());
//! assert!(not_admin.validate("admin123").is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// - If the inner validator succeeds, `Not` fails with a `not` failure
///   naming the input type that unexpectedly passed.
/// - If the inner validator fails, `Not` succeeds and the inner failure is
///   discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(
                ValidationError::new("not", "value passed a validator it must fail")
                    .with_param("input_type", std::any::type_name::<V::Input>()),
            ),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{contains, ne};

    #[test]
    fn test_not_inverts_success() {
        let err = not(contains("forbidden"))
            .validate("this is forbidden")
            .unwrap_err();
        assert_eq!(err.code, "not");
        assert_eq!(err.param("input_type"), Some("str"));
    }

    #[test]
    fn test_not_inverts_failure() {
        assert!(not(contains("forbidden")).validate("allowed").is_ok());
    }

    #[test]
    fn test_not_ne_is_eq() {
        let eq3 = ne(3).not();
        assert!(eq3.validate(&3).is_ok());
        assert!(eq3.validate(&2).is_err());
    }

    #[test]
    fn test_not_over_inputs_without_debug() {
        use crate::validators::{nil, not_nil};
        use crate::walk::Walkable;

        let absent: Option<Box<dyn Walkable>> = None;
        let present: Option<Box<dyn Walkable>> = Some(Box::new(1_u8));

        let is_nil = not(not_nil::<Option<Box<dyn Walkable>>>());
        assert!(is_nil.validate(&absent).is_ok());
        assert_eq!(is_nil.validate(&present).unwrap_err().code, "not");

        let is_present = nil::<Option<Box<dyn Walkable>>>().not();
        assert!(is_present.validate(&present).is_ok());
        assert!(is_present.validate(&absent).is_err());
    }

    #[test]
    fn test_double_negation() {
        let validator = contains("test").not().not();
        assert!(validator.validate("test").is_ok());
        assert!(validator.validate("hello").is_err());
    }
}
