use anyhow::Result;
use owo_colors::OwoColorize;

use super::{generate_options, project_dir};
use crate::commands::ProjectArgs;

pub struct ListHandler;

impl ListHandler {
    pub fn handle_list_rules(project: &ProjectArgs) -> Result<()> {
        let dir = project_dir(project)?;
        let rules = wpload_core::list_rules(&dir, &generate_options(project, false))?;

        if rules.is_empty() {
            wpload_logger::info("No WordPress autoload rules declared");
            return Ok(());
        }

        wpload_logger::info("Namespace rules:");
        for (namespace, paths) in rules {
            let label = if namespace.is_empty() {
                "(fallback)".to_string()
            } else {
                namespace
            };
            println!("  {}", label.bright_cyan());
            for path in paths {
                println!("    {}", path.bright_black());
            }
        }

        Ok(())
    }
}
