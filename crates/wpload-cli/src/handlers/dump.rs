use anyhow::Result;
use owo_colors::OwoColorize;

use super::{generate_options, project_dir};
use crate::commands::ProjectArgs;

pub struct DumpHandler;

impl DumpHandler {
    pub fn handle_dump(project: &ProjectArgs, injected: bool, stdout: bool) -> Result<()> {
        let dir = project_dir(project)?;
        let options = generate_options(project, injected);

        if stdout {
            print!("{}", wpload_core::render_autoloader(&dir, &options)?);
            return Ok(());
        }

        Self::print_dump_header(project.no_dev);
        wpload_logger::status("Generating WordPress autoload rules");

        let path = wpload_core::dump_autoloader(&dir, &options)?;
        wpload_logger::finish(&format!("Generated {}", path.display()));
        Ok(())
    }

    fn print_dump_header(no_dev: bool) {
        let mode = if no_dev { "(production)" } else { "(development)" };
        eprintln!(
            "{} {} {}",
            "wpload".bright_cyan().bold(),
            "dump".bright_white(),
            mode.bright_black()
        );
        eprintln!();
    }
}
