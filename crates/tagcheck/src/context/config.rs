use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Deserialize;
use tagcheck_core::config::RuleBlock;
use tagcheck_core::{MissingTagsRule, RuleConfig};

/// The parts of `.tflint.hcl` this tool reads. Other blocks are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub rule: HashMap<String, RuleBlock>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(hcl::from_str(text)?)
    }

    pub fn missing_tags_rule(&self) -> Option<&RuleBlock> {
        self.rule.get(MissingTagsRule::NAME)
    }
}

/// Command-line adjustments layered over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub tags: Vec<String>,
    pub exclude: Vec<String>,
}

/// Effective rule configuration, or `None` when the rule is not enabled.
pub fn rule_config(
    file: Option<&ConfigFile>,
    overrides: &Overrides,
) -> Result<Option<RuleConfig>> {
    let block = file.and_then(ConfigFile::missing_tags_rule);

    let config = if overrides.tags.is_empty() {
        match block {
            Some(block) if block.enabled => RuleConfig::try_from(block.clone())?,
            _ => return Ok(None),
        }
    } else {
        let exclude = block.map(|b| b.exclude.clone()).unwrap_or_default();
        RuleConfig::new(overrides.tags.iter().cloned(), exclude)?
    };

    Ok(Some(config.with_exclusions(overrides.exclude.iter().cloned())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
        config {
          module = false
        }

        plugin "azurerm" {
          enabled = true
        }

        rule "terraform_naming_convention" {
          enabled = true
        }

        rule "azurerm_resource_missing_tags" {
          enabled = true
          tags    = ["Foo", "Bar"]
          exclude = ["azurerm_resource_group"]
        }
    "#;

    #[test]
    fn parses_rule_block_among_others() {
        let file = ConfigFile::parse(CONFIG).unwrap();
        let block = file.missing_tags_rule().unwrap();
        assert!(block.enabled);
        assert_eq!(block.exclude, vec!["azurerm_resource_group".to_string()]);
    }

    #[test]
    fn enabled_block_builds_config() {
        let file = ConfigFile::parse(CONFIG).unwrap();
        let config = rule_config(Some(&file), &Overrides::default())
            .unwrap()
            .unwrap();
        assert_eq!(config.tags().iter().collect::<Vec<_>>(), vec!["Foo", "Bar"]);
        assert!(config.is_excluded("azurerm_resource_group"));
    }

    #[test]
    fn disabled_block_is_skipped() {
        let file = ConfigFile::parse(
            r#"
            rule "azurerm_resource_missing_tags" {
              enabled = false
              tags    = ["Foo"]
            }
            "#,
        )
        .unwrap();
        assert!(rule_config(Some(&file), &Overrides::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn no_file_is_disabled() {
        assert!(rule_config(None, &Overrides::default()).unwrap().is_none());
    }

    #[test]
    fn enabled_without_tags_is_an_error() {
        let file = ConfigFile::parse(
            r#"
            rule "azurerm_resource_missing_tags" {
              enabled = true
            }
            "#,
        )
        .unwrap();
        let err = rule_config(Some(&file), &Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("`tags` is required"));
    }

    #[test]
    fn command_line_tags_replace_and_enable() {
        let overrides = Overrides {
            tags: vec!["Owner".to_string()],
            exclude: vec!["azurerm_dns_zone".to_string()],
        };
        let file = ConfigFile::parse(CONFIG).unwrap();
        let config = rule_config(Some(&file), &overrides).unwrap().unwrap();
        assert_eq!(config.tags().iter().collect::<Vec<_>>(), vec!["Owner"]);
        assert!(config.is_excluded("azurerm_resource_group"));
        assert!(config.is_excluded("azurerm_dns_zone"));

        let config = rule_config(None, &overrides).unwrap().unwrap();
        assert_eq!(config.exclude(), &["azurerm_dns_zone".to_string()]);
    }
}
