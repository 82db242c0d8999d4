pub mod dump;
pub mod help;
pub mod list;

pub use dump::DumpHandler;
pub use help::HelpHandler;
pub use list::ListHandler;

use std::path::PathBuf;

use crate::commands::ProjectArgs;
use wpload_core::GenerateOptions;

fn project_dir(args: &ProjectArgs) -> anyhow::Result<PathBuf> {
    if args.working_dir.is_absolute() {
        Ok(args.working_dir.clone())
    } else {
        Ok(std::env::current_dir()?.join(&args.working_dir))
    }
}

fn generate_options(args: &ProjectArgs, injected: bool) -> GenerateOptions {
    GenerateOptions {
        vendor_dir: args.vendor_dir.clone(),
        no_dev: args.no_dev,
        injected,
        debug: args.debug,
    }
}
