//! [`Walkable`] for std types.
//!
//! Pointers to sized values are [`Node::Reference`]s and pointers to
//! `dyn Walkable` are [`Node::Dynamic`]. Pointers to `str` and slices have
//! no sized referent to hand out, so they describe themselves as the
//! pointee would.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use super::node::{Member, Node, Walkable};
use crate::foundation::Validatable;

// ============================================================================
// SCALARS
// ============================================================================

macro_rules! impl_walkable_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Walkable for $ty {
                fn node(&self) -> Node<'_> {
                    Node::Scalar
                }
            }
        )*
    };
}

impl_walkable_scalar! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char, (),
    str, String, Duration,
}

impl<T: ?Sized> Walkable for PhantomData<T> {
    fn node(&self) -> Node<'_> {
        Node::Scalar
    }
}

// ============================================================================
// REFERENCES
// ============================================================================

impl<T: Walkable> Walkable for Option<T> {
    fn node(&self) -> Node<'_> {
        Node::Reference(self.as_ref().map(|value| value as &dyn Walkable))
    }

    fn validatable(&self) -> Option<&dyn Validatable> {
        self.as_ref().and_then(Walkable::validatable)
    }
}

macro_rules! impl_walkable_reference {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Walkable> Walkable for $ptr {
                fn node(&self) -> Node<'_> {
                    Node::Reference(Some(&**self))
                }

                fn validatable(&self) -> Option<&dyn Validatable> {
                    (**self).validatable()
                }
            }
        )*
    };
}

impl_walkable_reference!(Box<T>, Rc<T>, Arc<T>, &T, &mut T);

impl<T: Walkable + Clone> Walkable for Cow<'_, T> {
    fn node(&self) -> Node<'_> {
        Node::Reference(Some(&**self))
    }

    fn validatable(&self) -> Option<&dyn Validatable> {
        (**self).validatable()
    }
}

macro_rules! impl_walkable_unsized_pointee {
    ($([$($generics:tt)*] $ptr:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Walkable for $ptr {
                fn node(&self) -> Node<'_> {
                    (**self).node()
                }
            }
        )*
    };
}

impl_walkable_unsized_pointee! {
    [] &str,
    [] Box<str>,
    [] Rc<str>,
    [] Arc<str>,
    [] Cow<'_, str>,
    [T: Walkable] &[T],
    [T: Walkable] Box<[T]>,
    [T: Walkable] Rc<[T]>,
    [T: Walkable] Arc<[T]>,
    [T: Walkable + Clone] Cow<'_, [T]>,
}

// ============================================================================
// DYNAMIC
// ============================================================================

macro_rules! impl_walkable_dynamic {
    ($($holder:ty),* $(,)?) => {
        $(
            impl Walkable for $holder {
                fn node(&self) -> Node<'_> {
                    Node::Dynamic(&**self)
                }

                fn validatable(&self) -> Option<&dyn Validatable> {
                    (**self).validatable()
                }
            }
        )*
    };
}

impl_walkable_dynamic! {
    Box<dyn Walkable + '_>,
    Box<dyn Walkable + Send + '_>,
    Box<dyn Walkable + Send + Sync + '_>,
    &dyn Walkable,
    &(dyn Walkable + Send + Sync),
    Rc<dyn Walkable + '_>,
    Arc<dyn Walkable + '_>,
    Arc<dyn Walkable + Send + Sync + '_>,
}

// ============================================================================
// SEQUENCES
// ============================================================================

impl<T: Walkable> Walkable for [T] {
    fn node(&self) -> Node<'_> {
        Node::sequence(self)
    }
}

impl<T: Walkable, const N: usize> Walkable for [T; N] {
    fn node(&self) -> Node<'_> {
        Node::sequence(self)
    }
}

impl<T: Walkable> Walkable for Vec<T> {
    fn node(&self) -> Node<'_> {
        Node::sequence(self)
    }
}

impl<T: Walkable> Walkable for VecDeque<T> {
    fn node(&self) -> Node<'_> {
        Node::sequence(self)
    }
}

impl<T: Walkable> Walkable for BTreeSet<T> {
    fn node(&self) -> Node<'_> {
        Node::sequence(self)
    }
}

// Iteration order is unspecified; with several failing members, which one
// is reported is not fixed.
impl<T: Walkable, S> Walkable for HashSet<T, S> {
    fn node(&self) -> Node<'_> {
        Node::sequence(self)
    }
}

// ============================================================================
// ASSOCIATIVE
// ============================================================================

impl<K: Walkable, V: Walkable> Walkable for BTreeMap<K, V> {
    fn node(&self) -> Node<'_> {
        Node::associative(self)
    }
}

impl<K: Walkable, V: Walkable, S> Walkable for HashMap<K, V, S> {
    fn node(&self) -> Node<'_> {
        Node::associative(self)
    }
}

// ============================================================================
// TUPLES
// ============================================================================

macro_rules! impl_walkable_tuple {
    ($($idx:tt $name:ident)+) => {
        impl<$($name: Walkable),+> Walkable for ($($name,)+) {
            fn node(&self) -> Node<'_> {
                Node::Record(vec![$(Member::public(stringify!($idx), &self.$idx)),+])
            }
        }
    };
}

impl_walkable_tuple!(0 A);
impl_walkable_tuple!(0 A 1 B);
impl_walkable_tuple!(0 A 1 B 2 C);
impl_walkable_tuple!(0 A 1 B 2 C 3 D);
impl_walkable_tuple!(0 A 1 B 2 C 3 D 4 E);
impl_walkable_tuple!(0 A 1 B 2 C 3 D 4 E 5 F);
impl_walkable_tuple!(0 A 1 B 2 C 3 D 4 E 5 F 6 G);
impl_walkable_tuple!(0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;

    fn kind_of<T: Walkable + ?Sized>(value: &T) -> Kind {
        value.node().kind()
    }

    #[test]
    fn test_kinds() {
        assert_eq!(kind_of(&1_i32), Kind::Scalar);
        assert_eq!(kind_of("text"), Kind::Scalar);
        assert_eq!(kind_of(&"text"), Kind::Scalar);
        assert_eq!(kind_of(&Some(1)), Kind::Reference);
        assert_eq!(kind_of(&Box::new(1)), Kind::Reference);
        assert_eq!(kind_of(&vec![1]), Kind::Sequence);
        assert_eq!(kind_of(&[1, 2][..]), Kind::Sequence);
        assert_eq!(kind_of(&BTreeMap::from([(1, 2)])), Kind::Associative);
        assert_eq!(kind_of(&(1, "a")), Kind::Record);

        let erased: Box<dyn Walkable> = Box::new(1);
        assert_eq!(kind_of(&erased), Kind::Dynamic);
    }

    #[test]
    fn test_none_is_absent() {
        assert!(matches!(None::<i32>.node(), Node::Reference(None)));
    }

    #[test]
    fn test_tuple_members_are_public_and_indexed() {
        let pair = (1_u8, String::from("x"));
        let Node::Record(members) = pair.node() else {
            panic!("expected a record");
        };
        let names: Vec<_> = members.iter().map(Member::name).collect();
        assert_eq!(names, ["0", "1"]);
        assert!(members.iter().all(|m| m.value().is_some()));
    }

    #[test]
    fn test_sets_are_sequences() {
        let ordered = BTreeSet::from([3_u8, 1, 2]);
        let Node::Sequence(items) = ordered.node() else {
            panic!("expected a sequence");
        };
        assert_eq!(items.count(), 3);

        let unordered: HashSet<u8> = HashSet::from([1, 2]);
        assert_eq!(kind_of(&unordered), Kind::Sequence);
    }

    #[test]
    fn test_map_entries_pair_key_and_value() {
        let map = BTreeMap::from([("a", 1), ("b", 2)]);
        let Node::Associative(entries) = map.node() else {
            panic!("expected an associative node");
        };
        assert_eq!(entries.count(), 2);
    }
}
