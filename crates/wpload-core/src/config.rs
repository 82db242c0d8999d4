use std::path::{Path, PathBuf};

use wpload_constants::DEFAULT_VENDOR_DIR;
use wpload_project::{Package, vendor_dir_setting};
use wpload_utils::{is_absolute_path, path_to_string};

/// Everything a generation run needs to know about its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub working_dir: PathBuf,
    pub vendor_dir: PathBuf,
    pub dev_mode: bool,
    pub injected: bool,
    pub debug: bool,
}

impl GeneratorConfig {
    /// Resolve the vendor directory from an explicit override, the root
    /// manifest's `config.vendor-dir`, or the default, in that order.
    /// Relative values are taken from `working_dir`.
    #[must_use]
    pub fn resolve(working_dir: &Path, vendor_override: Option<&str>, root: &Package) -> Self {
        let vendor = vendor_override
            .filter(|dir| !dir.is_empty())
            .or_else(|| vendor_dir_setting(root))
            .unwrap_or(DEFAULT_VENDOR_DIR);

        let vendor_dir = if is_absolute_path(vendor) {
            PathBuf::from(vendor)
        } else {
            working_dir.join(vendor)
        };

        Self {
            working_dir: working_dir.to_path_buf(),
            vendor_dir,
            dev_mode: true,
            injected: false,
            debug: false,
        }
    }

    #[must_use]
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    #[must_use]
    pub fn with_injected(mut self, injected: bool) -> Self {
        self.injected = injected;
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn base_path(&self) -> String {
        path_to_string(&self.working_dir)
    }

    #[must_use]
    pub fn vendor_path(&self) -> String {
        path_to_string(&self.vendor_dir)
    }
}
