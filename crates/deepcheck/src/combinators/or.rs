//! OR combinators - logical disjunction of validators
//!
//! [`Or`] tries two validators, [`Any`] tries a list. Evaluation stops at
//! the first success. When every alternative fails, the failure of the *last*
//! alternative tried is reported unchanged.
//!
//! ```rust
//! use deepcheck::prelude::*;
//!
//! let validator = any(vec![eq(1), eq(2)]);
//! assert!(validator.validate(&2).is_ok());
//! // Neither matched: the report comes from `eq(2)`.
//! assert_eq!(validator.validate(&3).unwrap_err().param("expected"), Some("2"));
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// If the left validator passes, the right one is not evaluated. If both
/// fail, the right validator's failure is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(_) => self.right.validate(input),
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Short-circuit disjunction over a list of validators.
///
/// An empty list has no alternative that could succeed, so it rejects every
/// input with an `any` failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Any<V> {
    validators: Vec<V>,
}

impl<V> Any<V> {
    /// Returns the wrapped validators in evaluation order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for Any<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut last = None;

        for validator in &self.validators {
            match validator.validate(input) {
                Ok(()) => return Ok(()),
                Err(e) => last = Some(e),
            }
        }

        Err(last.unwrap_or_else(|| ValidationError::new("any", "no alternatives to satisfy")))
    }
}

/// Creates an [`Any`] combinator.
#[must_use]
pub fn any<V>(validators: impl IntoIterator<Item = V>) -> Any<V>
where
    V: Validate,
{
    Any {
        validators: validators.into_iter().collect(),
    }
}
