//! Required-tag resolution over a [`TagValue`] tree.
//!
//! Satisfaction is a property of the whole tree: a leaf named `Owner` anywhere, at any
//! depth and in any branch, satisfies `Owner` for the resource. Resolution therefore
//! collects every leaf name once and takes the set difference against the required list.
//! Grouping keys (`common_tags` and the like) are containers and never satisfy anything.

use std::collections::HashSet;
use std::fmt;

use crate::config::RequiredTags;
use crate::value::TagValue;

/// Required tag names absent from a resource, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingTags(Vec<String>);

impl MissingTags {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Issue text naming every missing tag.
    pub fn message(&self) -> String {
        format!("The resource is missing the following tags: {self}.")
    }
}

impl fmt::Display for MissingTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

pub fn missing_tags(required: &RequiredTags, root: &TagValue) -> MissingTags {
    let present = leaf_names(root);
    MissingTags(
        required
            .iter()
            .filter(|name| !present.contains(name))
            .map(str::to_string)
            .collect(),
    )
}

/// Every name bound to a leaf anywhere below `root`.
fn leaf_names(root: &TagValue) -> HashSet<&str> {
    let mut present = HashSet::new();
    let mut pending = vec![root];

    while let Some(value) = pending.pop() {
        // A leaf or absent root has no named entries.
        let TagValue::Grouping(entries) = value else {
            continue;
        };
        for (name, entry) in entries {
            match entry {
                TagValue::Leaf => {
                    present.insert(name.as_str());
                }
                TagValue::Grouping(_) => pending.push(entry),
                TagValue::Absent => {}
            }
        }
    }

    present
}
