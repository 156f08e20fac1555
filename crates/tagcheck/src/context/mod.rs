pub mod config;
pub mod discovery;

pub use config::{rule_config, ConfigFile, Overrides};
pub use discovery::{discover_config, CONFIG_FILE};
