//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`Validatable`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators are generic over their input type, so a validator for `str`
//! cannot be applied to an `i32` by accident:
//!
//! ```rust,ignore
//! use deepcheck::foundation::Validate;
//!
//! struct NotBlank;
//!
//! impl Validate for NotBlank {
//!     type Input = str; // Only validates strings
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         // ...
//!     }
//! }
//! ```

pub mod error;
pub mod traits;

pub use error::{Params, ValidationError, ValidationErrors};
pub use traits::{BoxedValidator, FromFn, Validatable, Validate, ValidateExt, from_fn};
