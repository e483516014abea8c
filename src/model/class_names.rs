//! Class-name list fetched once at startup.

use serde::{Deserialize, Serialize};

/// Ordered class names; index `i` names detection class `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassNameList(Vec<String>);

impl ClassNameList {
    /// Create a list from names in backend order.
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Iterate over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for ClassNameList {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl<'a> FromIterator<&'a str> for ClassNameList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}
