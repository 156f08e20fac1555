use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".tflint.hcl";

/// Nearest `.tflint.hcl` in `start` or any of its ancestors.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
