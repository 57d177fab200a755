//! Property-based tests for the combinators and aggregation.

use deepcheck::combinators::{self, not};
use deepcheck::foundation::{BoxedValidator, Validate, ValidateExt, ValidationError};
use deepcheck::join;
use deepcheck::validators::{Eq, eq, gt, lt, ne};
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn gt_idempotent(n in any::<i64>()) {
        let v = gt(0_i64);
        prop_assert_eq!(v.validate(&n), v.validate(&n));
    }

    #[test]
    fn len_idempotent(s in ".*") {
        let v = combinators::len::<str, _>(lt(5));
        prop_assert_eq!(v.validate(&*s), v.validate(&*s));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(n in -50_i32..50) {
        let a = gt(-10);
        let b = lt(10);

        let a_ok = a.validate(&n).is_ok();
        let b_ok = b.validate(&n).is_ok();
        prop_assert_eq!(a.and(b).validate(&n).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(n in -50_i32..50) {
        let a = lt(-10);
        let b = gt(10);

        let a_ok = a.validate(&n).is_ok();
        let b_ok = b.validate(&n).is_ok();
        prop_assert_eq!(a.or(b).validate(&n).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn all_reports_first_failure(n in any::<i32>()) {
        let validators: Vec<BoxedValidator<i32>> =
            vec![Box::new(gt(-100)), Box::new(lt(100)), Box::new(gt(0))];
        let expected = validators.iter().find_map(|v| v.validate(&n).err());

        prop_assert_eq!(combinators::all(validators).validate(&n).err(), expected);
    }

    #[test]
    fn any_reports_last_failure(n in 0_u8..20, targets in prop::collection::vec(0_u8..20, 1..6)) {
        let validators: Vec<Eq<u8>> = targets.iter().copied().map(eq).collect();
        let result = combinators::any(validators.clone()).validate(&n);

        if targets.contains(&n) {
            prop_assert!(result.is_ok());
        } else {
            let last = validators.last().map(|v| v.validate(&n));
            prop_assert_eq!(Some(result), last);
        }
    }

    #[test]
    fn not_inverts(n in any::<i16>()) {
        prop_assert_ne!(not(ne(0_i16)).validate(&n).is_ok(), ne(0_i16).validate(&n).is_ok());
    }

    #[test]
    fn double_negation_preserves_outcome(n in any::<i16>()) {
        let v = gt(0_i16);
        prop_assert_eq!(v.not().not().validate(&n).is_ok(), v.validate(&n).is_ok());
    }

    #[test]
    fn macros_match_functions(n in -200_i32..200) {
        let chained = deepcheck::all![gt(-100), lt(100), ne(0)];
        let listed = combinators::all(vec![gt(-100).boxed(), lt(100).boxed(), ne(0).boxed()]);
        prop_assert_eq!(chained.validate(&n), listed.validate(&n));

        let chained = deepcheck::any![lt(-100), gt(100), eq(0)];
        let listed = combinators::any(vec![lt(-100).boxed(), gt(100).boxed(), eq(0).boxed()]);
        prop_assert_eq!(chained.validate(&n), listed.validate(&n));
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

fn outcome(fail: bool, index: usize) -> Result<(), ValidationError> {
    if fail {
        Err(ValidationError::new("case", format!("case {index}")))
    } else {
        Ok(())
    }
}

proptest! {
    #[test]
    fn join_keeps_every_failure_in_order(flags in prop::collection::vec(any::<bool>(), 0..12)) {
        let failures: Vec<_> = flags
            .iter()
            .enumerate()
            .filter_map(|(i, &fail)| outcome(fail, i).err())
            .collect();
        let joined = join(flags.iter().enumerate().map(|(i, &fail)| outcome(fail, i)));

        match failures.len() {
            0 => {
                prop_assert!(joined.is_ok());
            }
            1 => {
                prop_assert_eq!(joined.err(), failures.first().cloned());
            }
            n => {
                let err = joined.unwrap_err();
                prop_assert_eq!(&*err.code, "joined");
                prop_assert_eq!(err.total_error_count(), n + 1);
                prop_assert_eq!(err.nested, failures);
            }
        }
    }
}
