use crate::extractor::RuleExtractor;
use crate::package_map::{InstallEntry, PackageMap};
use crate::rule_set::RuleSet;
use wpload_project::{Package, RuleChannel};
use wpload_resolver::{is_production_package, priority_order, production_names};

/// Dependency-graph services the rule aggregation relies on.
pub trait AutoloadEngine {
    /// Keep only the entries a production install of `root` would contain.
    fn filter_package_map<'a>(&self, package_map: PackageMap<'a>, root: &Package)
    -> PackageMap<'a>;

    /// Order entries so dependencies come before their dependents.
    fn sort_package_map<'a>(&self, package_map: PackageMap<'a>) -> PackageMap<'a>;

    fn parse_rules(
        &self,
        package_map: &[InstallEntry<'_>],
        root: &Package,
        channel: RuleChannel,
        dev_mode: bool,
    ) -> RuleSet {
        RuleExtractor::new(channel, dev_mode).extract(package_map, root)
    }
}

/// Engine backed by the `require` graph of the installed packages.
#[derive(Debug, Default, Clone, Copy)]
pub struct DependencyEngine {
    debug: bool,
}

impl DependencyEngine {
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl AutoloadEngine for DependencyEngine {
    fn filter_package_map<'a>(
        &self,
        package_map: PackageMap<'a>,
        root: &Package,
    ) -> PackageMap<'a> {
        let packages: Vec<&Package> = package_map.iter().map(|entry| entry.package).collect();
        let reached = production_names(root, &packages);

        package_map
            .into_iter()
            .filter(|entry| {
                let keep = is_production_package(entry.package, &reached);
                if !keep {
                    wpload_logger::debug(
                        &format!("Excluding dev package {}", entry.package.name),
                        self.debug,
                    );
                }
                keep
            })
            .collect()
    }

    fn sort_package_map<'a>(&self, package_map: PackageMap<'a>) -> PackageMap<'a> {
        let packages: Vec<&Package> = package_map.iter().map(|entry| entry.package).collect();
        let order = priority_order(&packages);

        let mut slots: Vec<Option<InstallEntry<'a>>> = package_map.into_iter().map(Some).collect();
        order
            .into_iter()
            .filter_map(|index| slots.get_mut(index).and_then(Option::take))
            .collect()
    }

    fn parse_rules(
        &self,
        package_map: &[InstallEntry<'_>],
        root: &Package,
        channel: RuleChannel,
        dev_mode: bool,
    ) -> RuleSet {
        RuleExtractor::new(channel, dev_mode)
            .with_debug(self.debug)
            .extract(package_map, root)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    fn package(value: serde_json::Value) -> Package {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_sort_package_map() {
        let app = package(json!({ "name": "a/app", "require": { "z/core": "*" } }));
        let core = package(json!({ "name": "z/core" }));
        let map = vec![
            InstallEntry::installed(&app, "vendor/a/app".to_string()),
            InstallEntry::installed(&core, "vendor/z/core".to_string()),
        ];

        let sorted = DependencyEngine::default().sort_package_map(map);
        let paths: Vec<&str> = sorted.iter().map(|e| e.install_path.as_str()).collect();
        assert_eq!(paths, vec!["vendor/z/core", "vendor/a/app"]);
    }

    #[test]
    fn test_filter_package_map() {
        let root = package(json!({
            "require": { "acme/lib": "*" },
            "require-dev": { "acme/dev": "*" }
        }));
        let lib = package(json!({ "name": "acme/lib" }));
        let dev = package(json!({ "name": "acme/dev" }));
        let map = vec![
            InstallEntry::installed(&lib, "vendor/acme/lib".to_string()),
            InstallEntry::installed(&dev, "vendor/acme/dev".to_string()),
        ];

        let filtered = DependencyEngine::default().filter_package_map(map, &root);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().unwrap().package.name, "acme/lib");
    }
}
