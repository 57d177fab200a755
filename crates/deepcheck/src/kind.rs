//! Structural classification of values

use std::fmt;

/// The structural category of a value, shared by the walker and the
/// zero/nil utilities.
///
/// Every value belongs to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kind {
    /// A pointer or optional holder (`Option`, `Box`, `&`, `Rc`, `Arc`).
    Reference,
    /// A type-erased holder such as `Box<dyn Walkable>`.
    Dynamic,
    /// An ordered container visited by ascending index.
    Sequence,
    /// A key/value container.
    Associative,
    /// A value with fixed named members (structs, enums, tuples).
    Record,
    /// A value with no further structure.
    Scalar,
}

impl Kind {
    /// Returns `true` for kinds that can be logically absent.
    #[must_use]
    pub const fn is_nilable(self) -> bool {
        matches!(
            self,
            Self::Reference | Self::Dynamic | Self::Sequence | Self::Associative
        )
    }

    /// Returns `true` for container kinds, which always have an element count.
    ///
    /// Strings are [`Kind::Scalar`] but still implement
    /// [`Length`](crate::zero::Length); whether a type can be measured is
    /// decided by that trait, not by its kind.
    #[must_use]
    pub const fn is_sized(self) -> bool {
        matches!(self, Self::Sequence | Self::Associative)
    }

    /// Stable lowercase name, used in failure params.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Dynamic => "dynamic",
            Self::Sequence => "sequence",
            Self::Associative => "associative",
            Self::Record => "record",
            Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
