use crate::package_map::InstallEntry;
use crate::rule_set::RuleSet;
use wpload_project::{Package, RuleChannel};

/// Reads one declaration channel from every package of a package map and
/// anchors the declared paths on each package's install location.
pub struct RuleExtractor {
    channel: RuleChannel,
    dev_mode: bool,
    debug: bool,
}

impl RuleExtractor {
    #[must_use]
    pub const fn new(channel: RuleChannel, dev_mode: bool) -> Self {
        Self {
            channel,
            dev_mode,
            debug: false,
        }
    }

    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Rules of every entry, in package map order. Development rules are
    /// only read from the root package, and only in dev mode.
    #[must_use]
    pub fn extract(&self, package_map: &[InstallEntry<'_>], root: &Package) -> RuleSet {
        let mut rule_set = RuleSet::new();

        for entry in package_map {
            let include_dev = self.dev_mode && entry.is_root;
            let declared = entry.package.declared_rules(self.channel, include_dev);
            for err in &declared.malformed {
                wpload_logger::debug(
                    &format!(
                        "Ignoring malformed {} block of {}: {err}",
                        self.channel, entry.package.name
                    ),
                    self.debug,
                );
            }
            let Some(declared) = declared.rules else {
                continue;
            };

            let install_path = Self::effective_install_path(entry, root);
            for (namespace, paths) in declared.iter() {
                for path in paths {
                    rule_set.push(namespace, Self::relative_path(&install_path, path));
                }
            }
        }

        rule_set
    }

    /// Install path with target-dir relocation undone for dependencies.
    fn effective_install_path(entry: &InstallEntry<'_>, root: &Package) -> String {
        let mut install_path = entry.install_path.clone();
        if entry.is_root {
            return install_path;
        }

        if let Some(target_dir) = entry.package.target_dir() {
            if let Some(stripped) = install_path.strip_suffix(&format!("/{target_dir}")) {
                install_path = stripped.to_string();
            }
        }

        // TODO: drop once no installed package relies on a root target-dir
        if let Some(root_target_dir) = root.target_dir() {
            install_path = install_path.replace(root_target_dir, "");
        }

        install_path
    }

    /// `path` joined onto `install_path`. An empty declaration at the root
    /// becomes `.`.
    #[must_use]
    pub fn relative_path(install_path: &str, path: &str) -> String {
        if install_path.is_empty() {
            if path.is_empty() {
                ".".to_string()
            } else {
                path.to_string()
            }
        } else {
            format!("{install_path}/{path}")
        }
    }
}
