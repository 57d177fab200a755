//! Recursive validation of nested values
//!
//! The walker descends through references, type-erased holders, sequences,
//! maps and records, and hands every value that has its own
//! [`Validatable`] capability to that capability. It stops at the first
//! failure.
//!
//! There are three entry points:
//!
//! - [`walk`] validates the *descendants* of a value, never the value
//!   itself. A type's own `Validatable` impl can therefore call
//!   `walk(self)` without recursing into itself.
//! - [`validate`] uses the value's own capability when it has one and
//!   otherwise falls back to [`walk`].
//! - [`visit`] is an older name for [`walk`].
//!
//! # Traversal rules
//!
//! | Node | Children | Capability checked on children |
//! |------|----------|-------------------------------|
//! | Reference | the referent (absent: none) | same as the reference |
//! | Dynamic | the held value | always |
//! | Sequence | elements, iteration order | always |
//! | Associative | key, then value, per entry | always |
//! | Record | public members, declaration order | always |
//! | Scalar | none | - |
//!
//! Encapsulated record members are skipped along with everything beneath
//! them. Absent values are valid. Slices, arrays, `Vec`, `VecDeque` and
//! `BTreeSet` are walked in a fixed order; `HashSet` and `HashMap` are not,
//! so when several of their members fail, which failure is reported varies.
//!
//! # Cycles
//!
//! There is no cycle detection. A structure that reaches itself recurses
//! until the stack runs out, unless a depth limit is set with
//! [`Walker::with_max_depth`].
//!
//! # Example
//!
//! ```rust
//! use deepcheck::prelude::*;
//!
//! #[derive(Walkable)]
//! #[walk(validatable)]
//! struct Port(pub u16);
//!
//! impl Validatable for Port {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         gte(1024).validate(&self.0)
//!     }
//! }
//!
//! let ports = vec![Port(8080), Port(22)];
//! assert_eq!(deepcheck::walk(&ports).unwrap_err().code, "gte");
//! ```

mod impls;
#[cfg(feature = "json")]
mod json;
mod node;

pub use node::{Member, Node, Visibility, Walkable};

use std::fmt;

use crate::foundation::ValidationError;

// ============================================================================
// OPTIONS
// ============================================================================

/// Walker configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WalkOptions {
    /// Maximum nesting depth below the root. `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl WalkOptions {
    /// Unlimited depth.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    /// Limits how many levels below the root the walker descends.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

// ============================================================================
// WALKER
// ============================================================================

/// A reusable, immutable walker.
///
/// The free functions [`walk`], [`visit`] and [`validate`] use
/// `Walker::default()`.
///
/// ```rust
/// use deepcheck::walk::Walker;
///
/// let nested = vec![vec![vec![1]]];
/// assert!(Walker::new().walk(&nested).is_ok());
///
/// let err = Walker::new().with_max_depth(2).walk(&nested).unwrap_err();
/// assert_eq!(err.code, "max_depth_exceeded");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Walker {
    options: WalkOptions,
}

impl Walker {
    /// Creates a walker with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: WalkOptions::new(),
        }
    }

    /// Creates a walker with the given options.
    #[must_use]
    pub const fn with_options(options: WalkOptions) -> Self {
        Self { options }
    }

    /// Limits how many levels below the root this walker descends.
    ///
    /// Descending further fails with `max_depth_exceeded`.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options = self.options.with_max_depth(max_depth);
        self
    }

    pub const fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// Validates the descendants of `value`, never `value` itself.
    pub fn walk<T: Walkable + ?Sized>(&self, value: &T) -> Result<(), ValidationError> {
        Traversal::new(self.options).visit_node(value.node(), false)
    }

    /// Validates `value` through its own capability, or walks it when it
    /// has none.
    pub fn validate<T: Walkable + ?Sized>(&self, value: &T) -> Result<(), ValidationError> {
        match value.validatable() {
            Some(capability) => capability.validate(),
            None => self.walk(value),
        }
    }
}

/// Validates the descendants of `value`, never `value` itself.
///
/// Fails with the first failing descendant in traversal order.
pub fn walk<T: Walkable + ?Sized>(value: &T) -> Result<(), ValidationError> {
    Walker::new().walk(value)
}

/// Older name for [`walk`], with identical behavior.
#[deprecated(note = "use `walk`")]
pub fn visit<T: Walkable + ?Sized>(value: &T) -> Result<(), ValidationError> {
    walk(value)
}

/// Validates `value` itself when it has the [`Validatable`] capability,
/// otherwise its descendants.
///
/// [`Validatable`]: crate::foundation::Validatable
pub fn validate<T: Walkable + ?Sized>(value: &T) -> Result<(), ValidationError> {
    Walker::new().validate(value)
}

// ============================================================================
// TRAVERSAL
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Segment {
    Field(&'static str),
    Index(usize),
    Key(usize),
    Value(usize),
    Deref,
}

/// Location of the node being visited, rendered only when logged.
struct Path<'a>(&'a [Segment]);

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self.0 {
            match segment {
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
                Segment::Key(entry) => write!(f, "{{{entry}}}:key")?,
                Segment::Value(entry) => write!(f, "{{{entry}}}")?,
                Segment::Deref => f.write_str("*")?,
            }
        }
        Ok(())
    }
}

/// State for a single walk.
struct Traversal {
    options: WalkOptions,
    path: Vec<Segment>,
}

impl Traversal {
    fn new(options: WalkOptions) -> Self {
        Self {
            options,
            path: Vec::new(),
        }
    }

    fn visit_value(&mut self, value: &dyn Walkable, check_self: bool) -> Result<(), ValidationError> {
        if check_self && let Some(capability) = value.validatable() {
            tracing::trace!(
                path = %Path(&self.path),
                depth = self.path.len(),
                "invoking validatable"
            );
            return capability.validate().inspect_err(|error| {
                tracing::debug!(
                    path = %Path(&self.path),
                    code = %error.code,
                    "walk stopped on failure"
                );
            });
        }

        self.visit_node(value.node(), check_self)
    }

    fn visit_node(&mut self, node: Node<'_>, check_self: bool) -> Result<(), ValidationError> {
        match node {
            Node::Reference(None) | Node::Scalar => Ok(()),
            Node::Reference(Some(target)) => self.descend(Segment::Deref, target, check_self),
            Node::Dynamic(target) => self.descend(Segment::Deref, target, true),
            Node::Sequence(items) => {
                for (index, item) in items.enumerate() {
                    self.descend(Segment::Index(index), item, true)?;
                }
                Ok(())
            }
            Node::Associative(entries) => {
                for (entry, (key, value)) in entries.enumerate() {
                    self.descend(Segment::Key(entry), key, true)?;
                    self.descend(Segment::Value(entry), value, true)?;
                }
                Ok(())
            }
            Node::Record(members) => {
                for member in members {
                    if let Some(value) = member.value() {
                        self.descend(Segment::Field(member.name()), value, true)?;
                    }
                }
                Ok(())
            }
        }
    }

    fn descend(
        &mut self,
        segment: Segment,
        value: &dyn Walkable,
        check_self: bool,
    ) -> Result<(), ValidationError> {
        if let Some(max_depth) = self.options.max_depth
            && self.path.len() >= max_depth
        {
            let path = Path(&self.path).to_string();
            tracing::warn!(%path, max_depth, "walk depth limit exceeded");
            return Err(ValidationError::new(
                "max_depth_exceeded",
                format!("nesting deeper than {max_depth} levels"),
            )
            .with_param("max_depth", max_depth.to_string())
            .with_param("path", path));
        }

        self.path.push(segment);
        let result = self.visit_value(value, check_self);
        self.path.pop();
        result
    }
}
