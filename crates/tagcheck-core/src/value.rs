//! Uniform shape for an evaluated `tags` attribute.
//!
//! Evaluators hand back whatever value model they use internally. Before resolution the
//! value is normalised into [`TagValue`]: object-shaped values become groupings, every
//! other value is an opaque leaf.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagValue {
    /// The resource declares no tags attribute.
    #[default]
    Absent,
    /// A non-grouping value. Only the name it is bound to matters.
    Leaf,
    /// Named entries, each a leaf or a nested grouping.
    Grouping(BTreeMap<String, TagValue>),
}

impl TagValue {
    pub fn grouping<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Self)>,
        K: Into<String>,
    {
        Self::Grouping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::Grouping(BTreeMap::new())
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Adapt the evaluated value of a whole tags attribute.
    ///
    /// A top-level `null` counts as no tags at all; nulls nested inside a grouping are
    /// ordinary leaves.
    #[must_use]
    pub fn from_hcl(value: &hcl::Value) -> Self {
        match value {
            hcl::Value::Null => Self::Absent,
            other => Self::classify_hcl(other),
        }
    }

    fn classify_hcl(value: &hcl::Value) -> Self {
        match value {
            hcl::Value::Object(entries) => Self::Grouping(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::classify_hcl(v)))
                    .collect(),
            ),
            _ => Self::Leaf,
        }
    }

    /// Same as [`TagValue::from_hcl`] for JSON documents.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Absent,
            other => Self::classify_json(other),
        }
    }

    fn classify_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(entries) => Self::Grouping(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::classify_json(v)))
                    .collect(),
            ),
            _ => Self::Leaf,
        }
    }
}

impl From<&hcl::Value> for TagValue {
    fn from(value: &hcl::Value) -> Self {
        Self::from_hcl(value)
    }
}

impl From<&serde_json::Value> for TagValue {
    fn from(value: &serde_json::Value) -> Self {
        Self::from_json(value)
    }
}
