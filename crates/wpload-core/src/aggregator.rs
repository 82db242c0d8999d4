use crate::engine::AutoloadEngine;
use crate::package_map::{InstallationManager, PackageMap, PackageMapBuilder};
use crate::rule_set::RuleSet;
use wpload_error::Result;
use wpload_project::{Package, RuleChannel};

/// Collects namespace rules across the whole dependency graph.
pub struct RuleAggregator<'e, E: AutoloadEngine> {
    engine: &'e E,
    dev_mode: bool,
    dev_package_names: Vec<String>,
    debug: bool,
}

impl<'e, E: AutoloadEngine> RuleAggregator<'e, E> {
    #[must_use]
    pub const fn new(engine: &'e E, dev_mode: bool) -> Self {
        Self {
            engine,
            dev_mode,
            dev_package_names: Vec::new(),
            debug: false,
        }
    }

    /// Names the installer already knows to be dev-only; they are dropped
    /// before the reachability filter runs.
    #[must_use]
    pub fn with_dev_package_names(mut self, names: &[String]) -> Self {
        self.dev_package_names = names.iter().map(|name| name.to_lowercase()).collect();
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Both channels merged: standard paths before extra paths for shared
    /// namespaces, duplicates removed, most specific namespace first.
    pub fn collect(
        &self,
        manager: &impl InstallationManager,
        root: &Package,
        packages: &[&Package],
    ) -> Result<RuleSet> {
        let package_map = PackageMapBuilder::build(manager, root, packages)?;

        let mut rules = self.build(package_map.clone(), root, RuleChannel::Standard);
        rules.merge(self.build(package_map, root, RuleChannel::Extra));
        rules.dedup_paths();
        rules.sort_namespaces_desc();

        wpload_logger::debug(
            &format!("Collected {} namespace rules", rules.len()),
            self.debug,
        );
        Ok(rules)
    }

    /// Rules of one channel. The root entry is processed last, after the
    /// remaining entries were filtered (outside dev mode) and sorted.
    #[must_use]
    pub fn build(
        &self,
        mut package_map: PackageMap<'_>,
        root: &Package,
        channel: RuleChannel,
    ) -> RuleSet {
        let root_entry = package_map
            .iter()
            .position(|entry| entry.is_root)
            .map(|position| package_map.remove(position));

        if !self.dev_mode {
            if !self.dev_package_names.is_empty() {
                package_map.retain(|entry| {
                    !self
                        .dev_package_names
                        .contains(&entry.package.name.to_lowercase())
                });
            }
            package_map = self.engine.filter_package_map(package_map, root);
        }

        let mut sorted = self.engine.sort_package_map(package_map);
        sorted.extend(root_entry);

        let mut rules = self
            .engine
            .parse_rules(&sorted, root, channel, self.dev_mode);
        rules.sort_namespaces_desc();
        rules
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::engine::DependencyEngine;
    use crate::package_map::InstallEntry;
    use serde_json::json;
    use std::collections::HashMap;

    struct FixedPaths(HashMap<String, String>);

    impl InstallationManager for FixedPaths {
        fn install_path(&self, package: &Package) -> Option<String> {
            self.0.get(&package.name).cloned()
        }
    }

    /// Keeps the given order and never filters, to observe the aggregator alone.
    struct PassThrough;

    impl AutoloadEngine for PassThrough {
        fn filter_package_map<'a>(&self, map: PackageMap<'a>, _: &Package) -> PackageMap<'a> {
            map
        }

        fn sort_package_map<'a>(&self, map: PackageMap<'a>) -> PackageMap<'a> {
            map
        }
    }

    fn package(value: serde_json::Value) -> Package {
        serde_json::from_value(value).unwrap()
    }

    fn paths(packages: &[&Package]) -> FixedPaths {
        FixedPaths(
            packages
                .iter()
                .map(|p| (p.name.clone(), format!("/site/vendor/{}", p.name)))
                .collect(),
        )
    }

    #[test]
    fn test_root_rules_come_last_within_namespace() {
        let root = package(json!({
            "name": "acme/site",
            "require": { "acme/lib": "*" },
            "autoload": { "wordpress": { "Shared\\": "src/" } }
        }));
        let lib = package(json!({
            "name": "acme/lib",
            "autoload": { "wordpress": { "Shared\\": "lib/" } }
        }));

        let engine = DependencyEngine::default();
        let rules = RuleAggregator::new(&engine, false)
            .collect(&paths(&[&lib]), &root, &[&lib])
            .unwrap();

        assert_eq!(
            rules.get("Shared\\").unwrap(),
            &["/site/vendor/acme/lib/lib/".to_string(), "src/".to_string()]
        );
    }

    #[test]
    fn test_specific_namespace_first() {
        let root = package(json!({
            "autoload": { "wordpress": { "App": "app/", "App\\Sub": "sub/" } }
        }));

        let rules = RuleAggregator::new(&PassThrough, true)
            .collect(&paths(&[]), &root, &[])
            .unwrap();

        assert_eq!(rules.namespaces().collect::<Vec<_>>(), vec!["App\\Sub", "App"]);
    }

    #[test]
    fn test_channel_merge_dedupes_standard_first() {
        let root = package(json!({
            "autoload": { "wordpress": { "App\\": ["src/", "shared/"] } },
            "extra": { "wordpress-autoloader": { "autoload": {
                "App\\": ["shared/", "extra/"],
                "Zed\\": "zed/"
            } } }
        }));

        let rules = RuleAggregator::new(&PassThrough, false)
            .collect(&paths(&[]), &root, &[])
            .unwrap();

        assert_eq!(
            rules.get("App\\").unwrap(),
            &["src/".to_string(), "shared/".to_string(), "extra/".to_string()]
        );
        assert_eq!(rules.namespaces().collect::<Vec<_>>(), vec!["Zed\\", "App\\"]);
    }

    #[test]
    fn test_dev_packages_excluded_outside_dev_mode() {
        let root = package(json!({
            "name": "acme/site",
            "require": { "acme/lib": "*" },
            "require-dev": { "acme/tools": "*" }
        }));
        let lib = package(json!({
            "name": "acme/lib",
            "autoload": { "wordpress": { "Lib\\": "src" } }
        }));
        let tools = package(json!({
            "name": "acme/tools",
            "autoload": { "wordpress": { "Tools\\": "src" } }
        }));
        let engine = DependencyEngine::default();
        let manager = paths(&[&lib, &tools]);

        let prod = RuleAggregator::new(&engine, false)
            .collect(&manager, &root, &[&lib, &tools])
            .unwrap();
        assert!(prod.get("Tools\\").is_none());
        assert!(prod.get("Lib\\").is_some());

        let dev = RuleAggregator::new(&engine, true)
            .collect(&manager, &root, &[&lib, &tools])
            .unwrap();
        assert!(dev.get("Tools\\").is_some());
    }

    #[test]
    fn test_known_dev_package_names_excluded() {
        let root = package(json!({ "require": { "acme/lib": "*" } }));
        let lib = package(json!({
            "name": "acme/lib",
            "autoload": { "wordpress": { "Lib\\": "src" } }
        }));

        let rules = RuleAggregator::new(&PassThrough, false)
            .with_dev_package_names(&["Acme/Lib".to_string()])
            .collect(&paths(&[&lib]), &root, &[&lib])
            .unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_build_without_root_entry() {
        let lib = package(json!({
            "name": "acme/lib",
            "autoload": { "wordpress": { "Lib\\": "src" } }
        }));
        let root = Package::new("acme/site");
        let map = vec![InstallEntry::installed(&lib, "vendor/acme/lib".to_string())];

        let rules = RuleAggregator::new(&PassThrough, true).build(map, &root, RuleChannel::Standard);
        assert_eq!(rules.get("Lib\\").unwrap(), &["vendor/acme/lib/src".to_string()]);
    }
}
