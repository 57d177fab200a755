//! Non-lossy aggregation of independent results
//!
//! A single [`walk`](crate::walk()) stops at its first failure. When a type
//! checks several independent things, say one field directly plus a walk
//! of the rest, [`join`] reports every failure instead of the first.
//!
//! ```rust
//! use deepcheck::prelude::*;
//!
//! let err = join([gt(0).validate(&-1), Ok(()), lt(10).validate(&11)]).unwrap_err();
//! assert_eq!(err.code, "joined");
//! assert_eq!(err.nested.len(), 2);
//! ```

use crate::foundation::{ValidationError, ValidationErrors};

/// Code of the failure produced when more than one result failed.
pub const JOINED_CODE: &str = "joined";

/// Combines results, keeping every failure.
///
/// - every result `Ok`: `Ok(())`
/// - exactly one failure: that failure, unchanged
/// - several failures: a [`JOINED_CODE`] failure whose `nested` list holds
///   each one in input order
pub fn join<I>(results: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = Result<(), ValidationError>>,
{
    let errors: ValidationErrors = results.into_iter().filter_map(Result::err).collect();

    if errors.len() > 1 {
        return Err(ValidationError::new(
            JOINED_CODE,
            format!("{} validation failures", errors.len()),
        )
        .with_nested(errors.into_iter().collect()));
    }

    errors.into_iter().next().map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failure(code: &'static str) -> Result<(), ValidationError> {
        Err(ValidationError::new(code, format!("{code} failed")))
    }

    #[test]
    fn test_all_ok() {
        assert_eq!(join([Ok(()), Ok(())]), Ok(()));
        assert_eq!(join(std::iter::empty()), Ok(()));
    }

    #[test]
    fn test_single_failure_is_unchanged() {
        let err = join([Ok(()), failure("a"), Ok(())]).unwrap_err();
        assert_eq!(err, ValidationError::new("a", "a failed"));
    }

    #[test]
    fn test_several_failures_keep_order() {
        let err = join([failure("a"), Ok(()), failure("b"), failure("c")]).unwrap_err();
        assert_eq!(err.code, JOINED_CODE);
        assert_eq!(err.message, "3 validation failures");

        let codes: Vec<_> = err.nested.iter().map(|e| &*e.code).collect();
        assert_eq!(codes, ["a", "b", "c"]);
    }

    #[test]
    fn test_display_shows_every_message() {
        let rendered = join([failure("a"), failure("b")]).unwrap_err().to_string();
        assert!(rendered.contains("a failed"));
        assert!(rendered.contains("b failed"));
    }
}
