use anyhow::Result;
use clap::CommandFactory;
use owo_colors::OwoColorize;

use crate::commands::Cli;
use wpload_constants::{BIN_NAME, COMMANDS, DESCRIPTION, EXAMPLES, REPOSITORY_URL, VERSION};

pub struct HelpHandler;

impl HelpHandler {
    pub fn handle_help(command: Option<&str>) -> Result<()> {
        match command {
            Some(cmd) => Self::show_command_help(cmd),
            None => {
                Self::show_custom_help();
                Ok(())
            }
        }
    }

    fn show_command_help(command: &str) -> Result<()> {
        let mut cmd = Cli::command();

        if let Some(subcommand) = cmd.find_subcommand_mut(command) {
            subcommand.print_help()?;
        } else {
            println!(
                "{}: Unknown command '{}'",
                "Error".bright_red().bold(),
                command
            );
            println!();
            Self::show_custom_help();
        }

        println!();
        Ok(())
    }

    fn show_custom_help() {
        println!("{}", DESCRIPTION.bright_white().bold());
        println!(
            "{} {}",
            "Version:".bright_white().bold(),
            VERSION.bright_black().bold()
        );
        println!();

        println!("{}", "Usage:".bright_magenta().bold());
        println!(
            "  {} {} {}",
            BIN_NAME.bright_cyan().bold(),
            "<COMMAND>".bright_white(),
            "<OPTIONS>".bright_black().bold(),
        );
        println!();

        println!("{}", "Commands:".bright_magenta().bold());
        let entries: Vec<(String, String)> = COMMANDS
            .iter()
            .map(|(cmd, desc, aliases)| {
                let alias_str = if aliases.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", aliases.join(", "))
                };
                (format!("{cmd}{alias_str}"), (*desc).to_string())
            })
            .collect();
        Self::print_table(&entries);
        println!();

        println!("{}", "Examples:".bright_magenta().bold());
        let examples: Vec<(String, String)> = EXAMPLES
            .iter()
            .map(|(cmd, desc)| ((*cmd).to_string(), (*desc).to_string()))
            .collect();
        Self::print_table(&examples);

        println!();
        println!(
            "Visit {} for more information",
            REPOSITORY_URL.bright_cyan().underline()
        );
    }

    fn print_table(rows: &[(String, String)]) {
        let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
        for (left, desc) in rows {
            // Pad before coloring so escape codes don't skew the columns.
            println!(
                "  {}  # {}",
                format!("{left:width$}").bright_cyan(),
                desc.bright_black().bold()
            );
        }
    }
}
