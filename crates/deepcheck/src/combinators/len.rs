//! Length combinator
//!
//! [`Len`] measures a sized value with [`Length`] and hands the count to a
//! `usize` validator. Strings are measured in characters. Applying `Len` to
//! a type without a length does not compile.
//!
//! ```rust
//! use deepcheck::prelude::*;
//!
//! let short = len::<str, _>(lte(3));
//! assert!(short.validate("123").is_ok());
//! assert!(short.validate("1234").is_err());
//! ```

use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};
use crate::zero::Length;

/// Validates the element count of the input with an inner validator.
///
/// The inner failure is returned unchanged.
pub struct Len<T: ?Sized, V> {
    inner: V,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, V: Clone> Clone for Len<T, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, V: std::fmt::Debug> std::fmt::Debug for Len<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Len").field("inner", &self.inner).finish()
    }
}

impl<T: ?Sized, V> Len<T, V> {
    /// Creates a new `Len` combinator.
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the count validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<T, V> Validate for Len<T, V>
where
    T: Length + ?Sized,
    V: Validate<Input = usize>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        self.inner.validate(&input.length())
    }
}

/// Creates a [`Len`] combinator.
pub fn len<T, V>(inner: V) -> Len<T, V>
where
    T: Length + ?Sized,
    V: Validate<Input = usize>,
{
    Len::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{eq, gte, lte};
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    #[case("", true)]
    #[case("1", true)]
    #[case("12", true)]
    #[case("123", true)]
    #[case("1234", false)]
    #[case("12345", false)]
    fn test_len_lte_3_on_str(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(len::<str, _>(lte(3)).validate(input).is_ok(), ok);
    }

    #[test]
    fn test_len_counts_chars_not_bytes() {
        assert!(len::<str, _>(eq(3)).validate("äöü").is_ok());
    }

    #[test]
    fn test_len_on_containers() {
        let at_most_three = len::<Vec<i32>, _>(lte(3));
        assert!(at_most_three.validate(&vec![1, 2, 3]).is_ok());
        assert!(at_most_three.validate(&vec![1, 2, 3, 4, 5]).is_err());

        let non_empty = len::<HashMap<&str, i32>, _>(gte(1));
        assert!(non_empty.validate(&HashMap::from([("a", 1)])).is_ok());
        assert!(non_empty.validate(&HashMap::new()).is_err());
    }

    #[test]
    fn test_len_returns_inner_failure_unchanged() {
        let err = len::<str, _>(lte(3)).validate("1234").unwrap_err();
        assert_eq!(err, lte(3_usize).validate(&4).unwrap_err());
    }
}
