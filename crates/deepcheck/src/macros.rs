//! Macros for creating and composing validators with minimal boilerplate.
//!
//! - [`validator!`]: a complete validator (struct + `Validate` impl + factory fn)
//! - [`all!`]: AND-chain validators of different types
//! - [`any!`]: OR-chain validators of different types
//! - [`join!`]: aggregate independent validation results

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub IsTrue for bool;
///     rule(input) { *input }
///     error(input) { ValidationError::new("is_true", "value must be true") }
///     fn is_true();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields, or a custom `new`):
/// ```rust,ignore
/// validator! {
///     pub StartsWith { prefix: Cow<'static, str> } for str;
///     rule(self, input) { input.starts_with(self.prefix.as_ref()) }
///     error(self, input) { ValidationError::new("starts_with", "missing prefix") }
///     new(prefix: impl Into<Cow<'static, str>>) { Self { prefix: prefix.into() } }
///     fn starts_with(prefix: impl Into<Cow<'static, str>>);
/// }
/// ```
///
/// **Generic validator** (bounds must be simple identifiers; import paths):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub Gt<T: PartialOrd + Debug> { bound: T } for T;
///     rule(self, input) { *input > self.bound }
///     error(self, input) { ValidationError::new("gt", "too small") }
///     fn gt(bound: T);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator (no fields), no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };

    // ── Generic struct + auto new + factory fn ───────────────────────────
    //
    // Supports a single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// ALL / ANY MACROS
// ============================================================================

/// Composes validators of different types with AND logic.
///
/// ```rust
/// use deepcheck::prelude::*;
///
/// let username = deepcheck::all![len::<str, _>(gte(3)), not(contains(" ")), starts_with("u_")];
/// assert!(username.validate("u_alice").is_ok());
/// assert!(username.validate("u_a b").is_err());
/// ```
#[macro_export]
macro_rules! all {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::all!($crate::combinators::And::new($first, $second) $(, $rest)*)
    };
}

/// Composes validators of different types with OR logic.
///
/// When every alternative fails, the last alternative's failure is reported.
///
/// ```rust
/// use deepcheck::prelude::*;
///
/// let outlier = deepcheck::any![lt(-100), gt(100), eq(0)];
/// assert!(outlier.validate(&500).is_ok());
/// assert_eq!(outlier.validate(&7).unwrap_err().code, "eq");
/// ```
#[macro_export]
macro_rules! any {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::any!($crate::combinators::Or::new($first, $second) $(, $rest)*)
    };
}

/// Aggregates independent validation results without dropping any failure.
///
/// Expands to [`join`](crate::join) over the given results.
///
/// ```rust
/// use deepcheck::prelude::*;
///
/// let result = deepcheck::join!(gt(0).validate(&-1), lt(10).validate(&20));
/// assert_eq!(result.unwrap_err().nested.len(), 2);
/// ```
#[macro_export]
macro_rules! join {
    ($($result:expr),* $(,)?) => {
        $crate::join([$($result),*])
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};
    use crate::validators::{contains, ends_with, eq, gt, lt};

    validator! {
        /// A test unit validator.
        TestNotEmpty for str;
        rule(input) { !input.is_empty() }
        error(input) { ValidationError::new("not_empty", "must not be empty") }
        fn test_not_empty();
    }

    #[test]
    fn test_unit_validator() {
        assert!(TestNotEmpty.validate("hello").is_ok());
        assert!(test_not_empty().validate("").is_err());
    }

    validator! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMaxLen { max: usize } for str;
        rule(self, input) { input.len() <= self.max }
        error(self, input) {
            ValidationError::new("max_len", format!("at most {} bytes", self.max))
        }
        fn test_max_len(max: usize);
    }

    #[test]
    fn test_struct_validator() {
        assert!(TestMaxLen::new(3).validate("abc").is_ok());
        assert!(test_max_len(3).validate("abcd").is_err());
    }

    #[test]
    fn test_all_macro_short_circuits_in_order() {
        let v = crate::all![gt(0), lt(10), eq(5)];
        assert!(v.validate(&5).is_ok());
        assert_eq!(v.validate(&-3).unwrap_err().code, "gt");
        assert_eq!(v.validate(&20).unwrap_err().code, "lt");
        assert_eq!(v.validate(&4).unwrap_err().code, "eq");
    }

    #[test]
    fn test_any_macro_reports_last() {
        let v = crate::any![contains("a"), contains("b"), ends_with("z")];
        assert!(v.validate("xbx").is_ok());
        assert_eq!(v.validate("xxx").unwrap_err().code, "ends_with");
    }

    #[test]
    fn test_join_macro() {
        assert!(crate::join!(Ok(()), Ok(())).is_ok());
        let err = crate::join!(Ok(()), gt(1).validate(&0)).unwrap_err();
        assert_eq!(err.code, "gt");
    }
}
