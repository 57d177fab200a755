//! Prelude module for convenient imports.
//!
//! `use deepcheck::prelude::*;` brings in the traits, the combinators, the
//! built-in validator factories, the walker entry points and, with the
//! `derive` feature, the derive macros.
//!
//! Validator *types* named after std items (`Eq`, `Ne`) are left out so the
//! glob does not shadow the std prelude; reach them through
//! [`crate::validators`].

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    BoxedValidator, Validatable, Validate, ValidateExt, ValidationError, ValidationErrors,
    from_fn,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{All, And, Any, Len, Not, Or, all, and, any, len, not, or};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    check_false, check_true, contains, contains_char, empty, ends_with, eq, gt, gte, is_false,
    is_true, lt, lte, ne, nil, not_nil, one_of, required, starts_with,
};

#[cfg(feature = "contrib")]
pub use crate::validators::{email, uuid4};

// ============================================================================
// WALKER, ZERO/NIL, AGGREGATION
// ============================================================================

pub use crate::aggregate::join;
pub use crate::kind::Kind;
pub use crate::walk::{Member, Node, WalkOptions, Walkable, Walker, validate, walk};
pub use crate::zero::{Length, Zero, is_nil, is_zero, length_of};

// ============================================================================
// DERIVE
// ============================================================================

#[cfg(feature = "derive")]
pub use deepcheck_macros::{Walkable, Zero};
