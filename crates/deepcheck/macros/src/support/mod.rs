//! Shared helpers for the derives: attribute parsing and diagnostics.

pub mod attrs;
pub mod diag;
