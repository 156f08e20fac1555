use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use console::style;
use tagcheck_core::MissingTagsRule;
use tracing::debug;

use crate::context::{discover_config, rule_config, ConfigFile, Overrides};
use crate::module::Module;
use crate::report::{self, Format};

/// Exit status when at least one resource is missing tags.
pub const ISSUES_FOUND: u8 = 2;

pub struct CheckArgs {
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub overrides: Overrides,
    pub format: Format,
}

pub fn run(cwd: &Path, args: CheckArgs) -> Result<ExitCode> {
    let dir = args.dir.map_or_else(|| cwd.to_path_buf(), |d| cwd.join(d));

    let config_path = args.config.map(|p| cwd.join(p)).or_else(|| discover_config(&dir));
    let file = config_path
        .as_deref()
        .map(|path| {
            debug!(config = %path.display(), "loading config");
            ConfigFile::load(path)
        })
        .transpose()?;

    let Some(config) = rule_config(file.as_ref(), &args.overrides)? else {
        eprintln!(
            "{} rule '{}' is not enabled; nothing to check",
            style("○").dim(),
            MissingTagsRule::NAME
        );
        return Ok(ExitCode::SUCCESS);
    };

    let module = Module::load(&dir)
        .with_context(|| format!("failed to load module {}", dir.display()))?;
    debug!(files = module.file_count(), "checking module");

    let issues = MissingTagsRule::new(config).check(&module)?;
    report::print(&issues, args.format)?;

    if issues.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(ISSUES_FOUND))
    }
}
