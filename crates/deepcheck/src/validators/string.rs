//! Substring, prefix, suffix and character validators
//!
//! All matching is exact and case-sensitive.

use std::borrow::Cow;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string starts with a prefix.
    pub StartsWith { prefix: Cow<'static, str> } for str;
    rule(self, input) { input.starts_with(self.prefix.as_ref()) }
    error(self, input) {
        ValidationError::new("starts_with", format!("must start with '{}'", self.prefix))
            .with_param("prefix", self.prefix.clone())
    }
    new(prefix: impl Into<Cow<'static, str>>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<Cow<'static, str>>);
}

crate::validator! {
    /// Validates that a string ends with a suffix.
    pub EndsWith { suffix: Cow<'static, str> } for str;
    rule(self, input) { input.ends_with(self.suffix.as_ref()) }
    error(self, input) {
        ValidationError::new("ends_with", format!("must end with '{}'", self.suffix))
            .with_param("suffix", self.suffix.clone())
    }
    new(suffix: impl Into<Cow<'static, str>>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<Cow<'static, str>>);
}

crate::validator! {
    /// Validates that a string contains a substring.
    ///
    /// # Examples
    ///
    /// ```
    /// use deepcheck::validators::contains;
    /// use deepcheck::foundation::Validate;
    ///
    /// let validator = contains("@");
    /// assert!(validator.validate("me@host").is_ok());
    /// assert!(validator.validate("me.host").is_err());
    /// ```
    pub Contains { needle: Cow<'static, str> } for str;
    rule(self, input) { input.contains(self.needle.as_ref()) }
    error(self, input) {
        ValidationError::new("contains", format!("must contain '{}'", self.needle))
            .with_param("needle", self.needle.clone())
    }
    new(needle: impl Into<Cow<'static, str>>) { Self { needle: needle.into() } }
    fn contains(needle: impl Into<Cow<'static, str>>);
}

crate::validator! {
    /// Validates that a string contains a character.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ContainsChar { ch: char } for str;
    rule(self, input) { input.contains(self.ch) }
    error(self, input) {
        ValidationError::new("contains_char", format!("must contain {:?}", self.ch))
            .with_param("char", self.ch.to_string())
    }
    fn contains_char(ch: char);
}
