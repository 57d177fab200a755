//! Combinators that build validators out of other validators
//!
//! - [`And`] / [`All`]: every validator must pass (first failure wins)
//! - [`Or`] / [`Any`]: one validator must pass (last failure reported)
//! - [`Not`]: inverts a validator
//! - [`Len`]: validates the length of a sized value

pub mod and;
pub mod len;
pub mod not;
pub mod or;

pub use and::{All, And, all, and};
pub use len::{Len, len};
pub use not::{Not, not};
pub use or::{Any, Or, any, or};
