use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::package::Package;
use wpload_utils::{get_installed_repository_path, is_absolute_path, normalize_path, path_to_string};

#[derive(Deserialize)]
#[serde(untagged)]
enum InstalledFile {
    Current {
        packages: Vec<Package>,
        #[serde(rename = "dev-package-names", default)]
        dev_package_names: Option<Vec<String>>,
    },
    Legacy(Vec<Package>),
}

/// Packages currently installed in a vendor directory.
#[derive(Debug, Clone, Default)]
pub struct InstalledRepository {
    pub packages: Vec<Package>,
    pub dev_package_names: Option<Vec<String>>,
    /// `<vendor-dir>/composer`, the base of every `install-path`.
    composer_dir: String,
}

impl InstalledRepository {
    /// Load `<vendor-dir>/composer/installed.json`. A missing file means
    /// nothing is installed yet.
    pub fn load(vendor_dir: &Path) -> anyhow::Result<Self> {
        let path = get_installed_repository_path(vendor_dir);
        let mut repository = Self::from_packages(vendor_dir, Vec::new());

        if !path.exists() {
            return Ok(repository);
        }

        let content =
            fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()))?;
        let parsed: InstalledFile = serde_json::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;

        match parsed {
            InstalledFile::Current {
                packages,
                dev_package_names,
            } => {
                repository.packages = packages;
                repository.dev_package_names = dev_package_names;
            }
            InstalledFile::Legacy(packages) => repository.packages = packages,
        }

        Ok(repository)
    }

    #[must_use]
    pub fn from_packages(vendor_dir: &Path, packages: Vec<Package>) -> Self {
        let composer_dir: PathBuf = vendor_dir.join("composer");
        Self {
            packages,
            dev_package_names: None,
            composer_dir: path_to_string(&composer_dir),
        }
    }

    /// Installed packages with duplicate names removed, first one wins.
    #[must_use]
    pub fn canonical_packages(&self) -> Vec<&Package> {
        let mut seen = HashSet::new();
        self.packages
            .iter()
            .filter(|package| seen.insert(package.name.to_lowercase()))
            .collect()
    }

    /// Absolute install location of `package`, from its `install-path`.
    #[must_use]
    pub fn install_path_of(&self, package: &Package) -> Option<String> {
        let install_path = package.install_path.as_deref()?;
        if is_absolute_path(install_path) {
            Some(normalize_path(install_path))
        } else {
            Some(normalize_path(&format!("{}/{install_path}", self.composer_dir)))
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_load_current_format() {
        let dir = tempfile::tempdir().unwrap();
        let vendor = dir.path().join("vendor");
        fs::create_dir_all(vendor.join("composer")).unwrap();
        fs::write(
            vendor.join("composer/installed.json"),
            r#"{
                "packages": [
                    { "name": "acme/lib", "install-path": "../acme/lib" },
                    { "name": "acme/dev-tool", "install-path": "../acme/dev-tool" }
                ],
                "dev": true,
                "dev-package-names": ["acme/dev-tool"]
            }"#,
        )
        .unwrap();

        let repo = InstalledRepository::load(&vendor).unwrap();
        assert_eq!(repo.packages.len(), 2);
        assert_eq!(repo.dev_package_names, Some(vec!["acme/dev-tool".to_string()]));

        let expected = format!("{}/acme/lib", path_to_string(&vendor));
        assert_eq!(repo.install_path_of(&repo.packages[0]), Some(expected));
    }

    #[test]
    fn test_load_legacy_format() {
        let dir = tempfile::tempdir().unwrap();
        let vendor = dir.path().join("vendor");
        fs::create_dir_all(vendor.join("composer")).unwrap();
        fs::write(
            vendor.join("composer/installed.json"),
            r#"[{ "name": "acme/lib" }]"#,
        )
        .unwrap();

        let repo = InstalledRepository::load(&vendor).unwrap();
        assert_eq!(repo.packages.len(), 1);
        assert!(repo.dev_package_names.is_none());
        assert!(repo.install_path_of(&repo.packages[0]).is_none());
    }

    #[test]
    fn test_null_install_path_of_metapackage() {
        let dir = tempfile::tempdir().unwrap();
        let vendor = dir.path().join("vendor");
        fs::create_dir_all(vendor.join("composer")).unwrap();
        fs::write(
            vendor.join("composer/installed.json"),
            r#"{ "packages": [{ "name": "acme/meta", "type": "metapackage", "install-path": null }] }"#,
        )
        .unwrap();

        let repo = InstalledRepository::load(&vendor).unwrap();
        assert!(repo.packages[0].is_metapackage());
        assert!(repo.install_path_of(&repo.packages[0]).is_none());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = InstalledRepository::load(&dir.path().join("vendor")).unwrap();
        assert!(repo.packages.is_empty());
    }

    #[test]
    fn test_canonical_packages_dedupe() {
        let repo = InstalledRepository::from_packages(
            Path::new("/site/vendor"),
            vec![Package::new("acme/lib"), Package::new("Acme/Lib"), Package::new("acme/other")],
        );

        let names: Vec<&str> = repo
            .canonical_packages()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["acme/lib", "acme/other"]);
    }

    #[test]
    fn test_absolute_install_path() {
        let repo = InstalledRepository::from_packages(Path::new("/site/vendor"), Vec::new());
        let mut package = Package::new("acme/lib");
        package.install_path = Some("/opt/libs/acme/".to_string());

        assert_eq!(repo.install_path_of(&package), Some("/opt/libs/acme".to_string()));
    }
}
