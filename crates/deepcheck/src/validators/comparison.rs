//! Equality, ordering and membership validators
//!
//! Operands are rendered with `Debug` into the failure params, so any
//! `PartialOrd`/`PartialEq` type works, not just numbers.

use std::fmt::Debug;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// ORDERING
// ============================================================================

crate::validator! {
    /// Validates that a value is strictly greater than a threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use deepcheck::validators::gt;
    /// use deepcheck::foundation::Validate;
    ///
    /// let validator = gt(5);
    /// assert!(validator.validate(&6).is_ok());
    /// assert!(validator.validate(&5).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Gt<T: PartialOrd + Debug> { bound: T } for T;
    rule(self, input) { *input > self.bound }
    error(self, input) {
        ValidationError::new("gt", format!("value must be greater than {:?}", self.bound))
            .with_param("bound", format!("{:?}", self.bound))
            .with_param("actual", format!("{input:?}"))
    }
    fn gt(bound: T);
}

crate::validator! {
    /// Validates that a value is greater than or equal to a threshold.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Gte<T: PartialOrd + Debug> { bound: T } for T;
    rule(self, input) { *input >= self.bound }
    error(self, input) {
        ValidationError::new("gte", format!("value must be at least {:?}", self.bound))
            .with_param("bound", format!("{:?}", self.bound))
            .with_param("actual", format!("{input:?}"))
    }
    fn gte(bound: T);
}

crate::validator! {
    /// Validates that a value is strictly less than a threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use deepcheck::validators::lt;
    /// use deepcheck::foundation::Validate;
    ///
    /// let validator = lt(10);
    /// assert!(validator.validate(&9).is_ok());
    /// assert!(validator.validate(&10).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Lt<T: PartialOrd + Debug> { bound: T } for T;
    rule(self, input) { *input < self.bound }
    error(self, input) {
        ValidationError::new("lt", format!("value must be less than {:?}", self.bound))
            .with_param("bound", format!("{:?}", self.bound))
            .with_param("actual", format!("{input:?}"))
    }
    fn lt(bound: T);
}

crate::validator! {
    /// Validates that a value does not exceed a threshold.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Lte<T: PartialOrd + Debug> { bound: T } for T;
    rule(self, input) { *input <= self.bound }
    error(self, input) {
        ValidationError::new("lte", format!("value must be at most {:?}", self.bound))
            .with_param("bound", format!("{:?}", self.bound))
            .with_param("actual", format!("{input:?}"))
    }
    fn lte(bound: T);
}

// ============================================================================
// EQUALITY
// ============================================================================

crate::validator! {
    /// Validates that a value equals an expected value.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Eq<T: PartialEq + Debug> { expected: T } for T;
    rule(self, input) { *input == self.expected }
    error(self, input) {
        ValidationError::new("eq", format!("value must equal {:?}", self.expected))
            .with_param("expected", format!("{:?}", self.expected))
            .with_param("actual", format!("{input:?}"))
    }
    fn eq(expected: T);
}

crate::validator! {
    /// Validates that a value differs from a forbidden value.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Ne<T: PartialEq + Debug> { forbidden: T } for T;
    rule(self, input) { *input != self.forbidden }
    error(self, input) {
        ValidationError::new("ne", format!("value must not equal {:?}", self.forbidden))
            .with_param("forbidden", format!("{:?}", self.forbidden))
    }
    fn ne(forbidden: T);
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Validates that a value equals at least one of an allowed set.
///
/// An empty set admits nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf<T> {
    allowed: Vec<T>,
}

impl<T> OneOf<T> {
    /// Returns the allowed values in declaration order.
    pub fn allowed(&self) -> &[T] {
        &self.allowed
    }
}

impl<T> Validate for OneOf<T>
where
    T: PartialEq + Debug,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if self.allowed.iter().any(|candidate| candidate == input) {
            return Ok(());
        }

        Err(
            ValidationError::new("one_of", "value is not one of the allowed values")
                .with_param("allowed", format!("{:?}", self.allowed))
                .with_param("actual", format!("{input:?}")),
        )
    }
}

/// Creates a [`OneOf`] validator.
#[must_use]
pub fn one_of<T>(allowed: impl IntoIterator<Item = T>) -> OneOf<T>
where
    T: PartialEq + Debug,
{
    OneOf {
        allowed: allowed.into_iter().collect(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
