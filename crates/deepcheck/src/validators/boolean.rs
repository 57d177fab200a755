//! Boolean validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a boolean value is `true`.
    pub IsTrue for bool;
    rule(input) { *input }
    error(input) { ValidationError::new("is_true", "value must be true") }
    fn is_true();
}

crate::validator! {
    /// Validates that a boolean value is `false`.
    pub IsFalse for bool;
    rule(input) { !*input }
    error(input) { ValidationError::new("is_false", "value must be false") }
    fn is_false();
}

/// Asserts a condition computed by the caller.
///
/// Handy inside a hand-written [`Validatable`](crate::foundation::Validatable)
/// impl for cross-field rules.
///
/// ```
/// use deepcheck::validators::check_true;
///
/// let (start, end) = (3, 7);
/// assert!(check_true(start <= end).is_ok());
/// ```
pub fn check_true(condition: bool) -> Result<(), ValidationError> {
    crate::foundation::Validate::validate(&IsTrue, &condition)
}

/// Asserts that a condition computed by the caller does not hold.
pub fn check_false(condition: bool) -> Result<(), ValidationError> {
    crate::foundation::Validate::validate(&IsFalse, &condition)
}
