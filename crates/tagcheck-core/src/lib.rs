pub mod config;
pub mod error;
pub mod issue;
pub mod resolve;
pub mod resources;
pub mod rule;
pub mod value;

pub use config::{RequiredTags, RuleConfig};
pub use error::{Error, Result};
pub use issue::{Issue, Severity, SourcePos, SourceRange};
pub use resolve::{missing_tags, MissingTags};
pub use resources::{is_taggable, TAGGABLE_RESOURCES};
pub use rule::{AttributeRef, MissingTagsRule, ResourceBlock, Runner, TAGS_ATTRIBUTE};
pub use value::TagValue;
