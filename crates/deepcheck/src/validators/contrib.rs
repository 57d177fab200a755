//! Pattern-based leaf validators
//!
//! Patterns are compiled once, on first use.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

static UUID4_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$")
        .expect("uuid4 pattern is valid")
});

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates the shape of an email address.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) {
        ValidationError::new("email", "invalid email address")
            .with_param("actual", input.to_owned())
    }
    fn email();
}

// ============================================================================
// UUID
// ============================================================================

crate::validator! {
    /// Validates the shape of a version 4 UUID (either case).
    pub Uuid4 for str;
    rule(input) { UUID4_REGEX.is_match(input) }
    error(input) {
        ValidationError::new("uuid4", "invalid version 4 UUID")
            .with_param("actual", input.to_owned())
    }
    fn uuid4();
}
