//! Core traits for the validation system
//!
//! [`Validate`] is the validator contract: a pure predicate over a borrowed
//! input that reports a [`ValidationError`] on failure. [`Validatable`] is
//! the self-validation capability a type can expose to the walker.

use crate::foundation::ValidationError;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The contract every validator implements.
///
/// A validator is an immutable value; calling it has no side effects and may
/// be repeated, from any number of threads when the validator is `Sync`.
///
/// # Examples
///
/// ```rust
/// use deepcheck::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", "value must be even"))
///         }
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert!(Even.validate(&3).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

/// A type-erased validator, for heterogeneous validator lists.
pub type BoxedValidator<T> = Box<dyn Validate<Input = T> + Send + Sync>;

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Rc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// CLOSURE VALIDATORS
// ============================================================================

/// A validator built from a closure.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<T: ?Sized, F> {
    f: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> std::fmt::Debug for FromFn<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<T, F> Validate for FromFn<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), ValidationError>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        (self.f)(input)
    }
}

/// Turns a closure into a validator.
///
/// ```rust
/// use deepcheck::foundation::{Validate, ValidationError, from_fn};
///
/// let no_spaces = from_fn(|s: &str| {
///     if s.contains(' ') {
///         Err(ValidationError::new("no_spaces", "must not contain spaces"))
///     } else {
///         Ok(())
///     }
/// });
/// assert!(no_spaces.validate("abc").is_ok());
/// assert!(no_spaces.validate("a c").is_err());
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), ValidationError>,
{
    FromFn {
        f,
        _phantom: PhantomData,
    }
}

// ============================================================================
// SELF-VALIDATION CAPABILITY
// ============================================================================

/// A type that knows how to validate itself.
///
/// Implementing this trait is how a type takes part in a walk: once the type
/// is also [`Walkable`](crate::walk::Walkable) with `#[walk(validatable)]`,
/// every walk that reaches one of its values calls `validate` on it instead of
/// descending into it.
///
/// An implementation usually checks its own invariants and then walks its
/// members with [`walk`](crate::walk::walk). Walking `self` from here never
/// re-enters this method, because a walk does not validate its root.
///
/// ```rust,ignore
/// impl Validatable for Account {
///     fn validate(&self) -> Result<(), ValidationError> {
///         deepcheck::join([
///             gte(18).validate(&self.age),
///             deepcheck::walk(self),
///         ])
///     }
/// }
/// ```
pub trait Validatable {
    /// Validates the value, usually including its descendants.
    fn validate(&self) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement [`Validate`].
///
/// ```rust
/// use deepcheck::prelude::*;
///
/// let small_or_round = lt(10).or(from_fn(|n: &i32| {
///     if n % 100 == 0 { Ok(()) } else { Err(ValidationError::new("round", "not round")) }
/// }));
/// assert!(small_or_round.validate(&3).is_ok());
/// assert!(small_or_round.validate(&300).is_ok());
/// assert!(small_or_round.validate(&42).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND, short-circuiting on the
    /// first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR, short-circuiting on the
    /// first success. When both fail, the right-hand failure is reported.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Erases the validator's concrete type.
    fn boxed(self) -> BoxedValidator<Self::Input>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;
