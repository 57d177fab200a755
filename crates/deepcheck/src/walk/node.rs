//! The traversal model: [`Walkable`], [`Node`] and [`Member`].

use std::fmt;

use crate::foundation::Validatable;
use crate::kind::Kind;

/// A value the walker can descend into.
///
/// Most types get this from `#[derive(Walkable)]` or from the impls this
/// crate provides for std containers and pointers. A hand-written impl
/// describes the value's shape through [`node`](Walkable::node) and, if the
/// type validates itself, exposes that through
/// [`validatable`](Walkable::validatable).
///
/// ```rust
/// use deepcheck::walk::{Member, Node, Walkable};
///
/// struct Span {
///     pub start: u32,
///     pub end: u32,
/// }
///
/// impl Walkable for Span {
///     fn node(&self) -> Node<'_> {
///         Node::Record(vec![
///             Member::public("start", &self.start),
///             Member::public("end", &self.end),
///         ])
///     }
/// }
/// ```
pub trait Walkable {
    /// Describes this value's structure for one traversal step.
    fn node(&self) -> Node<'_>;

    /// This value's own validation capability, if it has one.
    fn validatable(&self) -> Option<&dyn Validatable> {
        None
    }
}

/// One traversal step: the kind of a value plus the children to visit.
pub enum Node<'a> {
    /// A pointer or optional holder. `None` is absent and always valid.
    Reference(Option<&'a dyn Walkable>),
    /// A type-erased holder. The held value is always checked for its own
    /// capability.
    Dynamic(&'a dyn Walkable),
    /// Elements, visited in the container's iteration order.
    ///
    /// Slices, arrays, `Vec`, `VecDeque` and `BTreeSet` iterate in a fixed
    /// order, so the first failure among them is deterministic. `HashSet`
    /// iterates in an unspecified order, like the maps under
    /// [`Node::Associative`].
    Sequence(Box<dyn Iterator<Item = &'a dyn Walkable> + 'a>),
    /// Key/value entries, each visited key first.
    Associative(Box<dyn Iterator<Item = (&'a dyn Walkable, &'a dyn Walkable)> + 'a>),
    /// Members in declaration order.
    Record(Vec<Member<'a>>),
    /// No further structure.
    Scalar,
}

impl<'a> Node<'a> {
    /// Builds a [`Node::Sequence`] from borrowed elements.
    pub fn sequence<T, I>(items: I) -> Self
    where
        T: Walkable + 'a,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
    {
        Self::Sequence(Box::new(
            items.into_iter().map(|item| item as &'a dyn Walkable),
        ))
    }

    /// Builds a [`Node::Associative`] from borrowed entries.
    pub fn associative<K, V, I>(entries: I) -> Self
    where
        K: Walkable + 'a,
        V: Walkable + 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>,
        I::IntoIter: 'a,
    {
        Self::Associative(Box::new(entries.into_iter().map(|(key, value)| {
            (key as &'a dyn Walkable, value as &'a dyn Walkable)
        })))
    }

    /// The kind this node represents.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Reference(_) => Kind::Reference,
            Self::Dynamic(_) => Kind::Dynamic,
            Self::Sequence(_) => Kind::Sequence,
            Self::Associative(_) => Kind::Associative,
            Self::Record(_) => Kind::Record,
            Self::Scalar => Kind::Scalar,
        }
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(target) => f
                .debug_tuple("Reference")
                .field(&target.map(|_| ".."))
                .finish(),
            Self::Record(members) => f.debug_tuple("Record").field(members).finish(),
            other => f.write_str(match other.kind() {
                Kind::Dynamic => "Dynamic(..)",
                Kind::Sequence => "Sequence(..)",
                Kind::Associative => "Associative(..)",
                _ => "Scalar",
            }),
        }
    }
}

/// Whether a record member is observable from outside its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Walked like any other child.
    Public,
    /// Skipped, together with everything beneath it.
    Encapsulated,
}

/// A named member of a record.
///
/// Encapsulated members carry no value, so their types need not be
/// walkable.
#[derive(Clone, Copy)]
pub struct Member<'a> {
    name: &'static str,
    value: Option<&'a dyn Walkable>,
}

impl<'a> Member<'a> {
    /// A member the walker descends into.
    #[must_use]
    pub fn public(name: &'static str, value: &'a dyn Walkable) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    /// A member the walker skips.
    #[must_use]
    pub const fn encapsulated(name: &'static str) -> Self {
        Self { name, value: None }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn visibility(&self) -> Visibility {
        if self.value.is_some() {
            Visibility::Public
        } else {
            Visibility::Encapsulated
        }
    }

    /// The member's value; `None` for encapsulated members.
    pub fn value(&self) -> Option<&'a dyn Walkable> {
        self.value
    }
}

impl fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("visibility", &self.visibility())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_member_visibility() {
        let value = 5_u8;
        let public = Member::public("a", &value);
        let hidden = Member::encapsulated("b");

        assert_eq!(public.visibility(), Visibility::Public);
        assert!(public.value().is_some());
        assert_eq!(hidden.visibility(), Visibility::Encapsulated);
        assert!(hidden.value().is_none());
        assert_eq!(hidden.name(), "b");
    }

    #[test]
    fn test_node_kind() {
        let items = vec![1, 2, 3];
        assert_eq!(Node::sequence(&items).kind(), Kind::Sequence);
        assert_eq!(Node::Reference(None).kind(), Kind::Reference);
        assert_eq!(format!("{:?}", Node::Reference(None)), "Reference(None)");
    }

    #[test]
    fn test_sequence_preserves_order() {
        let items = vec![10_u8, 20, 30];
        let Node::Sequence(iter) = Node::sequence(&items) else {
            panic!("expected a sequence");
        };
        assert_eq!(iter.count(), 3);
    }
}
