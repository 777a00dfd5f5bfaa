//! src/domain/email.rs
use crate::domain::PromptError;
use serde::Serialize;

/// An address shaped like `local@domain.tld`.
///
/// The input is stored exactly as typed: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<Self, PromptError> {
        if s.is_empty() {
            return Err(PromptError::EmptyInput);
        }

        if has_email_shape(&s) {
            Ok(Self(s))
        } else {
            Err(PromptError::InvalidFormat)
        }
    }
}

// Equivalent to /^[^\s@]+@[^\s@]+\.[^\s@]+$/
fn has_email_shape(s: &str) -> bool {
    let is_plain = |part: &str| {
        !part.is_empty() && !part.chars().any(|c| c == '@' || is_regex_space(c))
    };

    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };

    if !is_plain(local) || !is_plain(domain) {
        return false;
    }

    // The domain needs a dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// The `\s` class of ECMAScript regular expressions. It differs from
// `char::is_whitespace`: U+FEFF is in, U+0085 is out.
fn is_regex_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
