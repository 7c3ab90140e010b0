//! Locale codes keying translated values.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A validated locale code such as `en`, `fr`, `en-GB` or `pt_BR`.
///
/// The primary language subtag is 2–3 lowercase ASCII letters. It may be
/// followed by subtags of 2–8 ASCII alphanumerics separated by `-` or `_`.
/// The original spelling is preserved; codes are not case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleCode(String);

impl LocaleCode {
    /// Parses and validates a locale code.
    pub fn parse(s: &str) -> crate::Result<Self> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidLocale(s.to_string()))
        }
    }

    /// Returns true if `s` is a well-formed locale code.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        let mut subtags = s.split(['-', '_']);
        let Some(language) = subtags.next() else {
            return false;
        };
        if !(2..=3).contains(&language.len())
            || !language.bytes().all(|b| b.is_ascii_lowercase())
        {
            return false;
        }
        subtags.all(|tag| {
            (2..=8).contains(&tag.len()) && tag.bytes().all(|b| b.is_ascii_alphanumeric())
        })
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the primary language subtag (`en` for `en-GB`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or(&self.0)
    }
}

impl Default for LocaleCode {
    /// English (`en`), the locale a fresh catalog starts with.
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LocaleCode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&s) {
            Ok(Self(s))
        } else {
            Err(Error::InvalidLocale(s))
        }
    }
}

impl From<LocaleCode> for String {
    fn from(code: LocaleCode) -> Self {
        code.0
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
