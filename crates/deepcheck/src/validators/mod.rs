//! Built-in validators
//!
//! Ready-made leaves for the combinator algebra in [`crate::combinators`].
//!
//! # Categories
//!
//! - **Comparison**: [`one_of`], [`gt`], [`gte`], [`lt`], [`lte`], [`eq`], [`ne`]
//! - **String**: [`starts_with`], [`ends_with`], [`contains`], [`contains_char`]
//! - **Nullable**: [`nil`], [`not_nil`], [`empty`], [`required`]
//! - **Boolean**: [`is_true`], [`is_false`], [`check_true`], [`check_false`]
//! - **Contrib** (feature `contrib`): [`email`], [`uuid4`]
//!
//! # Examples
//!
//! ```rust
//! use deepcheck::prelude::*;
//!
//! let port = gte(1024).and(lte(49151));
//! assert!(port.validate(&8080).is_ok());
//!
//! let status = one_of(["active", "suspended"]);
//! assert!(status.validate(&"active").is_ok());
//! assert!(status.validate(&"deleted").is_err());
//! ```

pub mod boolean;
pub mod comparison;
#[cfg(feature = "contrib")]
pub mod contrib;
pub mod nullable;
pub mod string;

pub use boolean::{IsFalse, IsTrue, check_false, check_true, is_false, is_true};
pub use comparison::{Eq, Gt, Gte, Lt, Lte, Ne, OneOf, eq, gt, gte, lt, lte, ne, one_of};
#[cfg(feature = "contrib")]
pub use contrib::{Email, Uuid4, email, uuid4};
pub use nullable::{Empty, Nil, NotNil, Required, empty, nil, not_nil, required};
pub use string::{Contains, ContainsChar, EndsWith, StartsWith, contains, contains_char, ends_with, starts_with};
