pub mod commands;
pub mod handlers;

use clap::Parser;

use commands::{Cli, Commands};
use handlers::{DumpHandler, HelpHandler, ListHandler};

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    wpload_logger::init_logger(false);

    match cli.command {
        Commands::Dump {
            project,
            injected,
            stdout,
        } => DumpHandler::handle_dump(&project, injected, stdout),
        Commands::List { project } => ListHandler::handle_list_rules(&project),
        Commands::Help { command } => HelpHandler::handle_help(command.as_deref()),
    }
}
