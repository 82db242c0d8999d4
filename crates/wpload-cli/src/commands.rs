use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wpload_constants::VENDOR_DIR_ENV;

#[derive(Parser)]
#[command(name = "wpload")]
#[command(version)]
#[command(propagate_version = true)]
#[command(about = "Generates the WordPress class autoload map for installed packages", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the project lives and which rules to include.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project directory containing composer.json
    #[arg(short = 'd', long = "working-dir", default_value = ".")]
    pub working_dir: PathBuf,
    /// Vendor directory, relative to the working directory
    #[arg(long = "vendor-dir", env = VENDOR_DIR_ENV)]
    pub vendor_dir: Option<String>,
    /// Leave out autoload-dev rules and dev-only packages
    #[arg(long = "no-dev")]
    pub no_dev: bool,
    /// Enable debug mode for verbose output
    #[arg(long)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generates vendor/wordpress-autoload.php from installed packages
    #[command(aliases = ["dump-autoload", "d"])]
    Dump {
        #[command(flatten)]
        project: ProjectArgs,
        /// The file is included by another bootstrap: skip requiring autoload.php
        #[arg(long)]
        injected: bool,
        /// Print the generated file instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// Lists the namespace rules that would be registered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Shows help information for wpload or a specific command
    Help {
        /// The command to show help for (optional)
        #[arg()]
        command: Option<String>,
    },
}
