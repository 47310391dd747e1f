use std::fmt;

use serde::{Deserialize, Deserializer};

use super::Error;

/// A validated class name.
///
/// Guarantees:
/// - Non-empty
/// - Starts with an ASCII letter or `_`
/// - Remaining characters are ASCII alphanumeric or `_`
///
/// Path separators and dots are rejected by construction, so a class name
/// can never escape its resolution directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(name: &str) -> Result<Self, Error> {
        let mut chars = name.chars();
        let valid_start = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid_start && valid_rest {
            Ok(Self(name.to_string()))
        } else {
            Err(Error::InvalidClassName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ClassName> for String {
    fn from(val: ClassName) -> Self {
        val.0
    }
}

impl<'de> Deserialize<'de> for ClassName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ClassName::new(&s).map_err(serde::de::Error::custom)
    }
}
