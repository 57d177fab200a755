//! # deepcheck-macros
//!
//! Derive macros for `deepcheck`. Use them through the re-exports in
//! `deepcheck` (feature `derive`), not directly.
//!
//! | Macro | Description |
//! |-------|-------------|
//! | [`Walkable`](derive@Walkable) | Describes a struct or enum to the walker |
//! | [`Zero`](derive@Zero) | Zero when every field is zero |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod support;
mod walkable;
mod zero;

/// Derive macro for the `Walkable` trait.
///
/// The type becomes a record whose members are its fields in declaration
/// order.
///
/// # Visibility
///
/// - Struct fields declared plain `pub` are walked.
/// - Private, `pub(crate)`, `pub(super)` and `pub(in ...)` fields are
///   encapsulated: the walker skips them and everything beneath them. Their
///   types need not implement `Walkable`.
/// - Enum variant fields are walked, named `Variant.field` or `Variant.0`.
///
/// Generic type parameters get a `Walkable` bound only when a walked field
/// mentions them.
///
/// # Attributes
///
/// ## Container attributes
///
/// - `#[walk(validatable)]` - the type implements `Validatable`; the walker
///   calls it whenever it reaches a value of this type
///
/// ## Field attributes
///
/// - `#[walk(skip)]` - encapsulate this field even if it is `pub`
///
/// # Example
///
/// ```ignore
/// #[derive(Walkable)]
/// #[walk(validatable)]
/// pub struct Order {
///     pub lines: Vec<Line>,
///     #[walk(skip)]
///     pub cache: Cache,
///     audit: AuditLog,
/// }
///
/// impl Validatable for Order {
///     fn validate(&self) -> Result<(), ValidationError> {
///         deepcheck::walk(self)
///     }
/// }
/// ```
#[proc_macro_derive(Walkable, attributes(walk))]
pub fn derive_walkable(input: TokenStream) -> TokenStream {
    walkable::derive(input)
}

/// Derive macro for the `Zero` trait.
///
/// A struct is zero when every field, public or not, is zero. Every field
/// type must implement `Zero`. Enums and unions are rejected.
///
/// # Example
///
/// ```ignore
/// #[derive(Default, Zero)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// assert!(deepcheck::zero::is_zero(&Point::default()));
/// ```
#[proc_macro_derive(Zero)]
pub fn derive_zero(input: TokenStream) -> TokenStream {
    zero::derive(input)
}
