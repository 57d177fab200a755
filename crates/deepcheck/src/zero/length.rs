use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Element count of a sized value.
///
/// Strings count characters, not bytes. Types without a meaningful length
/// do not implement this trait, so measuring them is a compile error.
pub trait Length {
    /// Returns the number of elements.
    fn length(&self) -> usize;
}

/// Returns the element count of `value`.
pub fn length_of<T: Length + ?Sized>(value: &T) -> usize {
    value.length()
}

impl Length for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

macro_rules! impl_length_via_len {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> Length for $ty<$($param),+> {
                fn length(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_length_via_len!(Vec<T>, VecDeque<T>, BTreeSet<T>, BTreeMap<K, V>, HashSet<T, S>, HashMap<K, V, S>);

macro_rules! impl_length_deref {
    ($($ptr:ident),*) => {
        $(
            impl<T: Length + ?Sized> Length for $ptr<T> {
                fn length(&self) -> usize {
                    (**self).length()
                }
            }
        )*
    };
}

impl_length_deref!(Box, Rc, Arc);

impl<T: Length + ?Sized> Length for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<T: Length + ToOwned + ?Sized> Length for Cow<'_, T> {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Strings, arrays and objects report their size. `null` measures `0`,
/// as does any scalar, since JSON has no static type to reject them with.
#[cfg(feature = "json")]
impl Length for serde_json::Value {
    fn length(&self) -> usize {
        use serde_json::Value;

        match self {
            Value::String(s) => s.length(),
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            Value::Null | Value::Bool(_) | Value::Number(_) => 0,
        }
    }
}
