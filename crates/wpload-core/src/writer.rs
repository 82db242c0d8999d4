use std::fmt::Write;

use crate::rule_set::RuleSet;
use wpload_constants::{ARTIFACT_HEADER, BOOTSTRAP_REQUIRE, REGISTER_CALL};
use wpload_utils::{PathResolver, export_string};

/// Renders the PHP autoloader registering a rule set.
pub struct ArtifactWriter<'a> {
    base_path: &'a str,
    vendor_path: &'a str,
}

impl<'a> ArtifactWriter<'a> {
    #[must_use]
    pub const fn new(base_path: &'a str, vendor_path: &'a str) -> Self {
        Self {
            base_path,
            vendor_path,
        }
    }

    /// Namespaces with their PHP path expressions, each expression at most
    /// once per namespace. Namespaces without paths are left out.
    #[must_use]
    pub fn path_literals(&self, rules: &RuleSet) -> Vec<(String, Vec<String>)> {
        rules
            .iter()
            .filter_map(|(namespace, paths)| {
                let mut literals: Vec<String> = Vec::with_capacity(paths.len());
                for path in paths {
                    let literal =
                        PathResolver::to_code_literal(self.base_path, self.vendor_path, path);
                    if !literals.contains(&literal) {
                        literals.push(literal);
                    }
                }
                (!literals.is_empty()).then(|| (namespace.clone(), literals))
            })
            .collect()
    }

    /// The complete file. An injected file is included from an existing
    /// bootstrap, so it neither requires `autoload.php` nor returns.
    #[must_use]
    pub fn render(&self, rules: &RuleSet, being_injected: bool) -> String {
        let mut contents = format!("<?php\n{ARTIFACT_HEADER}");

        if !being_injected {
            let _ = writeln!(contents, "\n{BOOTSTRAP_REQUIRE}");
        }

        contents.push_str("\n\n$vendorDir = __DIR__;\n$baseDir = dirname($vendorDir);\n\n");
        let _ = writeln!(contents, "{REGISTER_CALL}(array(");

        for (namespace, literals) in self.path_literals(rules) {
            let _ = writeln!(
                contents,
                "    {} => array({}),",
                export_string(&namespace),
                literals.join(", ")
            );
        }

        contents.push_str("));\n");

        if !being_injected {
            contents.push_str("\nreturn $autoload;");
        }

        contents.push('\n');
        contents
    }
}
