//! specbook library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod render;
pub mod store;
pub mod ui;
pub mod utils;
pub mod vault;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::User { .. } => cli::commands::user::handle(&cli.command, cfg),
        Commands::New { .. } => cli::commands::new::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Spec { .. } => cli::commands::spec::handle(&cli.command, cfg),
        Commands::Template { .. } => cli::commands::template::handle(&cli.command, cfg),
        Commands::Master { .. } => cli::commands::master::handle(&cli.command, cfg),
        Commands::Pdf { .. } => cli::commands::pdf::handle(&cli.command, cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once, then apply command-line overrides.
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(user) = &cli.user {
        cfg.operator_email = user.clone();
    }
    if let Some(out) = &cli.out {
        cfg.output_dir = out.clone();
    }
    if let Some(template) = &cli.template {
        cfg.template_file = template.clone();
    }

    dispatch(&cli, &cfg)
}
