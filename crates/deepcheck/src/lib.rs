//! # deepcheck
//!
//! Composable validators plus a walker that finds and runs validation logic
//! on values nested anywhere inside records, sequences, maps and
//! references.
//!
//! ## Quick Start
//!
//! ```rust
//! use deepcheck::prelude::*;
//!
//! #[derive(Walkable)]
//! #[walk(validatable)]
//! struct Username(pub String);
//!
//! impl Validatable for Username {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         deepcheck::all![len::<str, _>(gte(3)), not(contains(" "))].validate(&self.0)
//!     }
//! }
//!
//! #[derive(Walkable)]
//! #[walk(validatable)]
//! struct Team {
//!     pub name: String,
//!     pub members: Vec<Username>,
//!     // Encapsulated: never walked.
//!     scratch: Vec<Username>,
//! }
//!
//! impl Validatable for Team {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         join([required::<str>().validate(&self.name), walk(self)])
//!     }
//! }
//!
//! let team = Team {
//!     name: "core".into(),
//!     members: vec![Username("alice".into()), Username("b".into())],
//!     scratch: vec![Username("".into())],
//! };
//!
//! let err = validate(&team).unwrap_err();
//! assert_eq!(err.param("bound"), Some("3"));
//! ```
//!
//! ## Pieces
//!
//! - [`foundation`]: the [`Validate`] and [`Validatable`] traits and
//!   [`ValidationError`]
//! - [`combinators`]: `all`, `any`, `not`, `len` and friends
//! - [`validators`]: ready-made leaves (ordering, equality, strings,
//!   absence, booleans, and with `contrib` email/UUID shapes)
//! - [`walk`](mod@walk): the walker and the [`walk()`], [`validate()`] entry points
//! - [`zero`]: zero/nil classification and lengths
//! - [`join`]: non-lossy aggregation
//!
//! ## Features
//!
//! - `derive` (default): `#[derive(Walkable)]`, `#[derive(Zero)]`
//! - `json` (default): walk, measure and zero-test `serde_json::Value`
//! - `serde`: `Serialize` for [`ValidationError`] and [`ValidationErrors`]
//! - `contrib` (default): regex-backed `email()` and `uuid4()`

// ValidationError is returned by value from every validator and walk.
#![allow(clippy::result_large_err)]
// Nested combinators (And<Or<Not<...>, ...>, ...>) have long types.
#![allow(clippy::type_complexity)]

// Lets derive output refer to `::deepcheck` from inside this crate.
extern crate self as deepcheck;

pub mod aggregate;
pub mod combinators;
pub mod foundation;
pub mod kind;
mod macros;
pub mod prelude;
pub mod validators;
pub mod walk;
pub mod zero;

pub use aggregate::join;
pub use foundation::{Validatable, Validate, ValidateExt, ValidationError, ValidationErrors};
pub use kind::Kind;
#[allow(deprecated)]
pub use walk::{Walkable, Walker, validate, visit, walk};
pub use zero::{Length, Zero};

#[cfg(feature = "derive")]
pub use deepcheck_macros::{Walkable, Zero};
