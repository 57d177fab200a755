//! Absence and emptiness validators
//!
//! - [`Nil`] / [`NotNil`] test logical absence through [`Zero::is_nil`].
//!   Kinds that can never be absent (numbers, records, booleans) are always
//!   present: `not_nil` passes and `nil` fails for them.
//! - [`Empty`] / [`Required`] test the zero/default value through
//!   [`is_zero`], so an absent value always counts as empty.
//!
//! # Examples
//!
//! ```rust
//! use deepcheck::prelude::*;
//!
//! assert!(required::<str>().validate("x").is_ok());
//! assert!(required::<str>().validate("").is_err());
//!
//! assert!(nil::<Option<i32>>().validate(&None).is_ok());
//! assert!(not_nil::<i32>().validate(&0).is_ok());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};
use crate::zero::{Zero, is_zero};

macro_rules! zero_validator {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident, |$input:ident| $rule:expr, $code:literal, $message:literal
    ) => {
        $(#[$meta])*
        pub struct $name<T: ?Sized> {
            _phantom: PhantomData<fn(&T)>,
        }

        impl<T: ?Sized> $name<T> {
            /// Creates the validator.
            #[must_use]
            pub const fn new() -> Self {
                Self { _phantom: PhantomData }
            }
        }

        impl<T: ?Sized> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized> Copy for $name<T> {}

        impl<T: ?Sized> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<T: Zero + ?Sized> Validate for $name<T> {
            type Input = T;

            fn validate(&self, $input: &T) -> Result<(), ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    Err(ValidationError::new($code, $message)
                        .with_param("kind", $input.kind().as_str()))
                }
            }
        }

        #[doc = concat!("Creates a [`", stringify!($name), "`] validator.")]
        #[must_use]
        pub const fn $factory<T: Zero + ?Sized>() -> $name<T> {
            $name::new()
        }
    };
}

zero_validator! {
    /// Passes only for a logically absent value.
    Nil, nil, |input| input.is_nil(), "nil", "value must be absent"
}

zero_validator! {
    /// Passes for any present value, including every non-nilable kind.
    NotNil, not_nil, |input| !input.is_nil(), "not_nil", "value must be present"
}

zero_validator! {
    /// Passes only for the zero/default value of the input type.
    Empty, empty, |input| is_zero(input), "empty", "value must be empty"
}

zero_validator! {
    /// Passes for any value other than the zero/default value of its type.
    Required, required, |input| !is_zero(input), "required", "value is required"
}
