use std::collections::{HashMap, HashSet, VecDeque};

use wpload_project::Package;

/// Lowercased package names reachable from the root through `require`
/// links only, i.e. what a production install would contain.
#[must_use]
pub fn production_names(root: &Package, packages: &[&Package]) -> HashSet<String> {
    let mut by_name: HashMap<String, Vec<&Package>> = HashMap::new();
    for package in packages {
        for name in package.names() {
            by_name.entry(name).or_default().push(*package);
        }
    }

    let mut reached = HashSet::new();
    let mut queue: VecDeque<String> = root.require.keys().map(|n| n.to_lowercase()).collect();

    while let Some(name) = queue.pop_front() {
        if !reached.insert(name.clone()) {
            continue;
        }

        if let Some(providers) = by_name.get(&name) {
            for provider in providers {
                queue.extend(provider.require.keys().map(|n| n.to_lowercase()));
            }
        }
    }

    reached
}

#[must_use]
pub fn is_production_package(package: &Package, reached: &HashSet<String>) -> bool {
    package.names().iter().any(|name| reached.contains(name))
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
    fn test_transitive_production_packages() {
        let root = package(json!({
            "name": "acme/site",
            "require": { "php": ">=8.1", "acme/lib": "^1.0" },
            "require-dev": { "acme/test-kit": "^2.0" }
        }));
        let lib = package(json!({ "name": "acme/lib", "require": { "acme/util": "*" } }));
        let util = package(json!({ "name": "acme/util" }));
        let kit = package(json!({ "name": "acme/test-kit", "require": { "acme/mock": "*" } }));
        let mock = package(json!({ "name": "acme/mock" }));

        let packages = vec![&lib, &util, &kit, &mock];
        let reached = production_names(&root, &packages);

        assert!(is_production_package(&lib, &reached));
        assert!(is_production_package(&util, &reached));
        assert!(!is_production_package(&kit, &reached));
        assert!(!is_production_package(&mock, &reached));
    }

    #[test]
    fn test_shared_dependency_stays() {
        let root = package(json!({
            "require": { "acme/lib": "*" },
            "require-dev": { "acme/test-kit": "*" }
        }));
        let lib = package(json!({ "name": "acme/lib", "require": { "acme/util": "*" } }));
        let kit = package(json!({ "name": "acme/test-kit", "require": { "acme/util": "*" } }));
        let util = package(json!({ "name": "acme/util" }));

        let reached = production_names(&root, &[&lib, &kit, &util]);
        assert!(is_production_package(&util, &reached));
        assert!(!is_production_package(&kit, &reached));
    }

    #[test]
    fn test_replaced_names_and_cycles() {
        let root = package(json!({ "require": { "acme/legacy": "*" } }));
        let modern = package(json!({
            "name": "acme/modern",
            "replace": { "acme/legacy": "self.version" },
            "require": { "acme/peer": "*" }
        }));
        let peer = package(json!({ "name": "Acme/Peer", "require": { "acme/modern": "*" } }));

        let reached = production_names(&root, &[&modern, &peer]);
        assert!(is_production_package(&modern, &reached));
        assert!(is_production_package(&peer, &reached));
    }
}
