use wpload_error::{AutoloadError, Result};
use wpload_project::{InstalledRepository, Package};

/// A package paired with where it is installed. The root package is
/// installed at the empty path, i.e. the working directory.
#[derive(Debug, Clone)]
pub struct InstallEntry<'a> {
    pub package: &'a Package,
    pub install_path: String,
    pub is_root: bool,
}

impl<'a> InstallEntry<'a> {
    #[must_use]
    pub const fn root(package: &'a Package) -> Self {
        Self {
            package,
            install_path: String::new(),
            is_root: true,
        }
    }

    #[must_use]
    pub const fn installed(package: &'a Package, install_path: String) -> Self {
        Self {
            package,
            install_path,
            is_root: false,
        }
    }
}

pub type PackageMap<'a> = Vec<InstallEntry<'a>>;

/// Knows where installed packages live on disk.
pub trait InstallationManager {
    fn install_path(&self, package: &Package) -> Option<String>;
}

impl InstallationManager for InstalledRepository {
    fn install_path(&self, package: &Package) -> Option<String> {
        self.install_path_of(package)
    }
}

pub struct PackageMapBuilder;

impl PackageMapBuilder {
    /// Root entry first, then every installed package in the given order.
    ///
    /// A package without an install path is left out when it is a
    /// metapackage or declares no rules; otherwise it is an error.
    pub fn build<'a>(
        manager: &impl InstallationManager,
        root: &'a Package,
        packages: &[&'a Package],
    ) -> Result<PackageMap<'a>> {
        let mut package_map = Vec::with_capacity(packages.len() + 1);
        package_map.push(InstallEntry::root(root));

        for package in packages {
            if package.name.eq_ignore_ascii_case(&root.name) {
                continue;
            }

            match manager.install_path(package) {
                Some(install_path) => package_map.push(InstallEntry::installed(package, install_path)),
                None if package.is_metapackage() || !package.declares_rules() => {}
                None => return Err(AutoloadError::MissingInstallPath(package.name.clone())),
            }
        }

        Ok(package_map)
    }
}
