//! Zero/nil utilities
//!
//! Classifies values as logically absent ([`is_nil`]) or equal to the
//! default value of their type ([`is_zero`]), and measures sized values
//! ([`length_of`]).
//!
//! The zero rule is "equals `Default::default()`": `0`, `false`, `'\0'`,
//! the empty string, empty containers and `None`. Smart pointers and
//! references are transparent. Arrays and tuples are zero when every
//! element is. Records opt in with `#[derive(Zero)]`.
//!
//! ```rust
//! use deepcheck::zero::{is_nil, is_zero};
//!
//! assert!(is_zero(&0_u8));
//! assert!(is_zero(&Box::new(String::new())));
//! assert!(is_nil(&None::<i32>));
//! assert!(!is_nil(&0_u8));
//! ```

mod length;

pub use length::{Length, length_of};

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crate::kind::Kind;
use crate::walk::Walkable;

/// Zero and absence classification.
///
/// `is_zero` must hold whenever `is_nil` holds.
pub trait Zero {
    /// The structural kind of this value.
    fn kind(&self) -> Kind;

    /// Returns `true` when the value is logically absent.
    ///
    /// Only nilable kinds can be absent; the default is `false`.
    fn is_nil(&self) -> bool {
        false
    }

    /// Returns `true` when the value equals the default value of its type.
    fn is_zero(&self) -> bool;
}

/// Returns `true` when `value` is logically absent.
pub fn is_nil<T: Zero + ?Sized>(value: &T) -> bool {
    value.is_nil()
}

/// Returns `true` when `value` is absent or equals its type's default.
pub fn is_zero<T: Zero + ?Sized>(value: &T) -> bool {
    value.is_nil() || value.is_zero()
}

// ============================================================================
// SCALARS
// ============================================================================

macro_rules! impl_zero_scalar {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Zero for $ty {
                fn kind(&self) -> Kind {
                    Kind::Scalar
                }

                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_zero_scalar! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
    bool => false,
    char => '\0',
    () => (),
    Duration => Duration::ZERO,
}

impl<T: ?Sized> Zero for PhantomData<T> {
    fn kind(&self) -> Kind {
        Kind::Scalar
    }

    fn is_zero(&self) -> bool {
        true
    }
}

impl Zero for str {
    fn kind(&self) -> Kind {
        Kind::Scalar
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for String {
    fn kind(&self) -> Kind {
        Kind::Scalar
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

// ============================================================================
// REFERENCES
// ============================================================================

impl<T: Zero> Zero for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Reference
    }

    fn is_nil(&self) -> bool {
        self.is_none()
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

macro_rules! impl_zero_transparent {
    ($($ptr:ident),*) => {
        $(
            impl<T: Zero + ?Sized> Zero for $ptr<T> {
                fn kind(&self) -> Kind {
                    forward_kind(&**self)
                }

                fn is_nil(&self) -> bool {
                    (**self).is_nil()
                }

                fn is_zero(&self) -> bool {
                    (**self).is_zero()
                }
            }
        )*
    };
}

impl_zero_transparent!(Box, Rc, Arc);

impl<T: Zero + ?Sized> Zero for &T {
    fn kind(&self) -> Kind {
        forward_kind(&**self)
    }

    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: Zero + ToOwned + ?Sized> Zero for Cow<'_, T> {
    fn kind(&self) -> Kind {
        forward_kind(&**self)
    }

    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

/// A pointer to a type-erased value is itself dynamic; any other pointer is
/// a reference.
fn forward_kind<T: Zero + ?Sized>(pointee: &T) -> Kind {
    match pointee.kind() {
        Kind::Dynamic => Kind::Dynamic,
        _ => Kind::Reference,
    }
}

// A present type-erased value is never absent and never the zero value.
macro_rules! impl_zero_dyn {
    ($($ty:ty),*) => {
        $(
            impl Zero for $ty {
                fn kind(&self) -> Kind {
                    Kind::Dynamic
                }

                fn is_zero(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_zero_dyn!(
    dyn Walkable + '_,
    dyn Walkable + Send + '_,
    dyn Walkable + Send + Sync + '_
);

// ============================================================================
// CONTAINERS
// ============================================================================

impl<T> Zero for [T] {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Zero, const N: usize> Zero for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn is_zero(&self) -> bool {
        self.iter().all(is_zero)
    }
}

macro_rules! impl_zero_container {
    ($kind:ident => $($ty:ident<$($param:ident),+>),*) => {
        $(
            impl<$($param),+> Zero for $ty<$($param),+> {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                fn is_zero(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

impl_zero_container!(Sequence => Vec<T>, VecDeque<T>, BTreeSet<T>);
impl_zero_container!(Associative => BTreeMap<K, V>);

impl<T, S> Zero for HashSet<T, S> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Zero for HashMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Associative
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

// ============================================================================
// TUPLES
// ============================================================================

macro_rules! impl_zero_tuple {
    ($($name:ident)+) => {
        impl<$($name: Zero),+> Zero for ($($name,)+) {
            fn kind(&self) -> Kind {
                Kind::Record
            }

            #[allow(non_snake_case)]
            fn is_zero(&self) -> bool {
                let ($($name,)+) = self;
                true $(&& is_zero($name))+
            }
        }
    };
}

impl_zero_tuple!(A);
impl_zero_tuple!(A B);
impl_zero_tuple!(A B C);
impl_zero_tuple!(A B C D);
impl_zero_tuple!(A B C D E);
impl_zero_tuple!(A B C D E F);
impl_zero_tuple!(A B C D E F G);
impl_zero_tuple!(A B C D E F G H);

// ============================================================================
// JSON
// ============================================================================

#[cfg(feature = "json")]
impl Zero for serde_json::Value {
    fn kind(&self) -> Kind {
        use serde_json::Value;

        match self {
            Value::Null => Kind::Reference,
            Value::Array(_) => Kind::Sequence,
            Value::Object(_) => Kind::Associative,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Kind::Scalar,
        }
    }

    fn is_nil(&self) -> bool {
        self.is_null()
    }

    fn is_zero(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0_i64, true)]
    #[case(-1_i64, false)]
    #[case(i64::MAX, false)]
    fn test_integers(#[case] value: i64, #[case] zero: bool) {
        assert_eq!(is_zero(&value), zero);
        assert!(!is_nil(&value));
    }

    #[test]
    fn test_scalars() {
        assert!(is_zero(&0.0_f64));
        assert!(is_zero(&-0.0_f64));
        assert!(!is_zero(&f64::NAN));
        assert!(is_zero(&false));
        assert!(is_zero(""));
        assert!(!is_zero("a"));
        assert!(is_zero(&Duration::ZERO));
    }

    #[test]
    fn test_option_is_nil_only_when_none() {
        assert!(is_nil(&None::<i32>));
        assert!(is_zero(&None::<i32>));
        assert!(!is_nil(&Some(0)));
        assert!(!is_zero(&Some(0)));
        assert_eq!(Some(1).kind(), Kind::Reference);
    }

    #[test]
    fn test_pointers_are_transparent() {
        assert!(is_zero(&Box::new(0)));
        assert!(!is_zero(&Rc::new(5)));
        assert!(is_zero(&Arc::new(String::new())));
        assert!(is_nil(&Box::new(None::<u8>)));
        assert_eq!(Box::new(3).kind(), Kind::Reference);
    }

    #[test]
    fn test_dynamic_is_never_zero() {
        let boxed: Box<dyn Walkable> = Box::new(0_i32);
        assert_eq!(boxed.kind(), Kind::Dynamic);
        assert!(!is_zero(&boxed));
        assert!(!is_nil(&boxed));
    }

    #[test]
    fn test_containers() {
        assert!(is_zero(&Vec::<i32>::new()));
        assert!(!is_zero(&vec![0]));
        assert!(is_zero(&HashMap::<i32, i32>::new()));
        assert!(!is_nil(&Vec::<i32>::new()));
        assert!(is_zero(&[0, 0, 0]));
        assert!(!is_zero(&[0, 1, 0]));
        assert!(is_zero(&[0_u8; 0]));
        assert!(is_zero(&[1_u8, 2][..0]));
    }

    #[test]
    fn test_tuples() {
        assert!(is_zero(&(0, String::new(), None::<u8>)));
        assert!(!is_zero(&(0, "x")));
        assert_eq!((1, 2).kind(), Kind::Record);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_values() {
        use serde_json::json;

        assert!(is_nil(&json!(null)));
        assert!(is_zero(&json!(0)));
        assert!(is_zero(&json!({})));
        assert!(!is_zero(&json!([null])));
        assert!(!is_nil(&json!(false)));
    }
}
