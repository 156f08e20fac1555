use std::collections::HashSet;

use serde::Deserialize;
use tracing::warn;

use crate::{Error, Result};

/// Tag names a resource must carry, in configured order and without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredTags(Vec<String>);

impl RequiredTags {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut tags = Vec::new();
        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(Error::Configuration(
                    "`tags` must not contain blank names".to_string(),
                ));
            }
            if seen.insert(name.clone()) {
                tags.push(name);
            } else {
                warn!(tag = %name, "duplicate required tag ignored");
            }
        }

        if tags.is_empty() {
            return Err(Error::Configuration(
                "`tags` must list at least one tag name".to_string(),
            ));
        }
        Ok(Self(tags))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Rule block as written in configuration, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuleBlock {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    tags: RequiredTags,
    exclude: Vec<String>,
}

impl RuleConfig {
    pub fn new<S: Into<String>>(
        tags: impl IntoIterator<Item = S>,
        exclude: Vec<String>,
    ) -> Result<Self> {
        Ok(Self {
            tags: RequiredTags::new(tags)?,
            exclude,
        })
    }

    pub const fn tags(&self) -> &RequiredTags {
        &self.tags
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    pub fn is_excluded(&self, resource_type: &str) -> bool {
        self.exclude.iter().any(|t| t == resource_type)
    }

    #[must_use]
    pub fn with_exclusions(mut self, types: impl IntoIterator<Item = String>) -> Self {
        for t in types {
            if !self.is_excluded(&t) {
                self.exclude.push(t);
            }
        }
        self
    }
}

impl TryFrom<RuleBlock> for RuleConfig {
    type Error = Error;

    fn try_from(block: RuleBlock) -> Result<Self> {
        let tags = block
            .tags
            .ok_or_else(|| Error::Configuration("`tags` is required".to_string()))?;
        Self::new(tags, block.exclude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_configured_order() {
        let tags = RequiredTags::new(["Foo", "Bar", "Baz"]).unwrap();
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["Foo", "Bar", "Baz"]);
    }

    #[test]
    fn collapses_duplicates_keeping_first() {
        let tags = RequiredTags::new(["Foo", "Bar", "Foo"]).unwrap();
        assert_eq!(tags.as_slice(), &["Foo".to_string(), "Bar".to_string()]);
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn empty_tags_rejected() {
        let err = RequiredTags::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn blank_tag_rejected() {
        assert!(RequiredTags::new(["Foo", "  "]).is_err());
    }

    #[test]
    fn block_without_tags_is_configuration_error() {
        let block = RuleBlock {
            enabled: true,
            ..RuleBlock::default()
        };
        let err = RuleConfig::try_from(block).unwrap_err();
        assert!(err.to_string().contains("`tags` is required"));
    }

    #[test]
    fn block_converts_with_default_exclude() {
        let block = RuleBlock {
            enabled: true,
            tags: Some(vec!["Owner".to_string()]),
            exclude: Vec::new(),
        };
        let config = RuleConfig::try_from(block).unwrap();
        assert_eq!(config.tags().len(), 1);
        assert!(config.exclude().is_empty());
        assert!(!config.is_excluded("azurerm_resource_group"));
    }

    #[test]
    fn block_decodes_from_hcl() {
        let block: RuleBlock = hcl::from_str(
            r#"
            enabled = true
            tags    = ["Foo", "Bar"]
            exclude = ["azurerm_resource_group"]
            "#,
        )
        .unwrap();
        assert!(block.enabled);
        assert_eq!(block.tags, Some(vec!["Foo".to_string(), "Bar".to_string()]));
        assert_eq!(block.exclude, vec!["azurerm_resource_group".to_string()]);
    }

    #[test]
    fn extra_exclusions_are_not_duplicated() {
        let config = RuleConfig::new(["Foo"], vec!["azurerm_subnet".to_string()])
            .unwrap()
            .with_exclusions(["azurerm_subnet".to_string(), "azurerm_dns_zone".to_string()]);
        assert_eq!(config.exclude().len(), 2);
        assert!(config.is_excluded("azurerm_dns_zone"));
    }
}
