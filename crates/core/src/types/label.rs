use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a target in the host build graph (e.g. "//java/com/app:lib").
///
/// Labels are opaque to the analysis: they are only compared, ordered and
/// printed. Ordering is lexicographic, which gives every serialized label
/// list a deterministic order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(label: &str) -> Self {
        Label(label.to_string())
    }
}

impl From<String> for Label {
    fn from(label: String) -> Self {
        Label(label)
    }
}
