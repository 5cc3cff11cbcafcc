//! Bucket CLI
//!
//! Declares expectations about the contents of a bucket directory and checks
//! them against the filesystem.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod logging;

use std::io;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands, ExpectAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        if !e.already_reported() {
            eprintln!("{}: {}", "error".red().bold(), e);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose).expect("Failed to set tracing subscriber");
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Bucket CLI", "bucket".green().bold());
            println!();
            println!("Run {} for available commands.", "bucket --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Init { name } => commands::run_init(&cwd, &name),
        Commands::Create { name } => commands::run_create(&cwd, &name),
        Commands::Rename { old, new } => commands::run_rename(&cwd, &old, &new),
        Commands::Info => commands::run_info(&cwd),
        Commands::Expect {
            action,
            kind,
            name,
            absent,
        } => match (action, kind, name) {
            (Some(ExpectAction::Set { absent }), _, _) => commands::run_expect_set(&cwd, absent),
            (None, Some(kind), Some(name)) => commands::run_expect(&cwd, &kind, &name, absent),
            // clap enforces kind and name when no subcommand is given
            (None, _, _) => Err(error::CliError::user(
                "expect requires a resource kind and name",
            )),
        },
        Commands::Check { json } => commands::run_check(&cwd, json),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "bucket", &mut io::stdout());
            Ok(())
        }
    }
}
