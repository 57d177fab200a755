//! AND combinators - logical conjunction of validators
//!
//! [`And`] joins two validators; [`All`] joins any number of validators of
//! one type (use [`BoxedValidator`](crate::foundation::BoxedValidator) or the
//! [`all!`](crate::all) macro to mix types). Both short-circuit: validators
//! run in order and the first failure is returned as is.
//!
//! ```rust
//! use deepcheck::prelude::*;
//!
//! let validator = all(vec![gt(0).boxed(), lt(10).boxed(), ne(5).boxed()]);
//! assert!(validator.validate(&3).is_ok());
//! assert_eq!(validator.validate(&5).unwrap_err().code, "ne");
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// The left validator runs first; if it fails its failure is returned
/// unchanged and the right validator is not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Short-circuit conjunction over a list of validators.
///
/// An empty list accepts every input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct All<V> {
    validators: Vec<V>,
}

impl<V> All<V> {
    /// Returns the wrapped validators in evaluation order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }
}

impl<V> Validate for All<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(input)?;
        }
        Ok(())
    }
}

/// Creates an [`All`] combinator.
#[must_use]
pub fn all<V>(validators: impl IntoIterator<Item = V>) -> All<V>
where
    V: Validate,
{
    All {
        validators: validators.into_iter().collect(),
    }
}
