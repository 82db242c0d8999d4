use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::package::Package;
use wpload_constants::ROOT_PACKAGE_NAME;
use wpload_utils::get_root_manifest_path;

pub fn read_root_package(project_dir: &Path) -> anyhow::Result<Package> {
    let path = get_root_manifest_path(project_dir);
    let content =
        fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()))?;
    let mut parsed: Package = serde_json::from_str(&content)
        .with_context(|| format!("cannot parse {}", path.display()))?;

    if parsed.name.is_empty() {
        parsed.name = ROOT_PACKAGE_NAME.to_string();
    }

    Ok(parsed)
}

/// The `config.vendor-dir` setting of a root manifest, if any.
#[must_use]
pub fn vendor_dir_setting(root: &Package) -> Option<&str> {
    root.config
        .get("vendor-dir")
        .and_then(|dir| dir.as_str())
        .filter(|dir| !dir.is_empty())
}
