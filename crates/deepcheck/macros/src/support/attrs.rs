use syn::{Attribute, Ident, Meta, Result, Token, punctuated::Punctuated};

use crate::support::diag;

/// Flags collected from every `#[walk(...)]` attribute on one item.
#[derive(Debug, Default)]
pub struct Flags {
    flags: Vec<Ident>,
}

impl Flags {
    /// Check if a flag is present.
    pub fn has(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    /// Reject any flag not in `allowed`.
    pub fn only(self, allowed: &[&str]) -> Result<Self> {
        if let Some(unknown) = self
            .flags
            .iter()
            .find(|f| !allowed.iter().any(|a| *f == a))
        {
            let expected = allowed
                .iter()
                .map(|a| format!("`{a}`"))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(diag::error_spanned(
                unknown,
                format!("unknown flag `{unknown}`, expected one of: {expected}"),
            ));
        }
        Ok(self)
    }
}

/// Parse all `#[name(flag, ...)]` attributes and merge their flags.
pub fn parse_flags(attrs: &[Attribute], name: &str) -> Result<Flags> {
    let mut result = Flags::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
        match &attr.meta {
            Meta::List(list) => {
                let flags = list.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
                result.flags.extend(flags);
            }
            other => {
                return Err(diag::error_spanned(
                    other,
                    format!("expected #[{name}(...)]"),
                ));
            }
        }
    }

    Ok(result)
}
