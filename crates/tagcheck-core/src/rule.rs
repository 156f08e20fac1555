//! The `azurerm_resource_missing_tags` rule and the host seam it runs against.

use tracing::debug;

use crate::config::RuleConfig;
use crate::issue::{Issue, Severity, SourceRange};
use crate::resolve::{missing_tags, MissingTags};
use crate::resources::TAGGABLE_RESOURCES;
use crate::value::TagValue;
use crate::Result;

pub const TAGS_ATTRIBUTE: &str = "tags";

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRef<E> {
    pub name: String,
    pub expr: E,
    pub range: SourceRange,
}

/// A `resource "<type>" "<name>"` block with the one attribute the rule asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceBlock<E> {
    pub resource_type: String,
    pub name: String,
    pub def_range: SourceRange,
    pub attribute: Option<AttributeRef<E>>,
}

impl<E> ResourceBlock<E> {
    pub fn address(&self) -> String {
        format!("{}.{}", self.resource_type, self.name)
    }
}

/// Access to the module being checked.
pub trait Runner {
    /// Unevaluated attribute expression as the host represents it.
    type Expr;

    /// Every resource of `resource_type`, in declaration order, with `attribute` attached
    /// when the block sets it.
    fn resources(
        &self,
        resource_type: &str,
        attribute: &str,
    ) -> Result<Vec<ResourceBlock<Self::Expr>>>;

    /// Fully evaluate an attribute of `resource` into a tag tree.
    fn evaluate(
        &self,
        resource: &ResourceBlock<Self::Expr>,
        attribute: &AttributeRef<Self::Expr>,
    ) -> Result<TagValue>;
}

#[derive(Debug, Clone)]
pub struct MissingTagsRule {
    config: RuleConfig,
    resource_types: &'static [&'static str],
}

impl MissingTagsRule {
    pub const NAME: &'static str = "azurerm_resource_missing_tags";

    #[must_use]
    pub const fn new(config: RuleConfig) -> Self {
        Self {
            config,
            resource_types: TAGGABLE_RESOURCES,
        }
    }

    #[must_use]
    pub fn with_resource_types(mut self, types: &'static [&'static str]) -> Self {
        self.resource_types = types;
        self
    }

    pub const fn name(&self) -> &'static str {
        Self::NAME
    }

    /// The rule only runs when configuration turns it on.
    pub const fn enabled_by_default(&self) -> bool {
        false
    }

    pub const fn severity(&self) -> Severity {
        Severity::Notice
    }

    pub const fn link(&self) -> &'static str {
        ""
    }

    /// One issue per resource missing at least one required tag.
    pub fn check<R: Runner>(&self, runner: &R) -> Result<Vec<Issue>> {
        let mut issues = Vec::new();

        for resource_type in self.resource_types {
            if self.config.is_excluded(resource_type) {
                debug!(resource_type, "skipping excluded resource type");
                continue;
            }

            for resource in runner.resources(resource_type, TAGS_ATTRIBUTE)? {
                let (tags, range) = match &resource.attribute {
                    Some(attribute) => (
                        runner.evaluate(&resource, attribute)?,
                        attribute.range.clone(),
                    ),
                    None => {
                        debug!("Walk `{}` resource", resource.address());
                        (TagValue::Absent, resource.def_range.clone())
                    }
                };

                let missing = missing_tags(self.config.tags(), &tags);
                if !missing.is_empty() {
                    issues.push(self.issue(&missing, range));
                }
            }
        }

        Ok(issues)
    }

    fn issue(&self, missing: &MissingTags, range: SourceRange) -> Issue {
        Issue {
            rule: self.name(),
            severity: self.severity(),
            message: missing.message(),
            range,
        }
    }
}
