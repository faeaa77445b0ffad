//! Harbor Migration CLI Tool
//!
//! Command-line interface for scaffolding and listing migrations in Harbor applications.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use harbor::migration::MigrationCreator;
use harbor::{HarborConfig, MigrationConfig};
use harbor_migrate::commands::{self, MakeOptions};
use harbor_migrate::logging;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "harbor-migrate")]
#[command(about = "Migration scaffolding tool for Harbor ORM")]
#[command(version = "0.1.0")]
struct Cli {
    /// Migrations directory path (overrides `migrations.path` from config)
    #[arg(long, global = true)]
    path: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new migration file
    Make {
        /// Migration name (e.g., "create_users_table")
        name: String,

        /// Table the migration creates or modifies
        #[arg(long)]
        table: Option<String>,

        /// Use the create-table stub (requires --table)
        #[arg(long)]
        create: bool,
    },

    /// List migration files, oldest first
    List,
}

fn main() {
    let cli = Cli::parse();

    // .env may set RUST_LOG, so load it before the logger
    dotenv::dotenv().ok();
    logging::builder(cli.quiet, cli.verbose).init();

    let config = match HarborConfig::load() {
        Ok(config) => config.migrations,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            MigrationConfig::default()
        }
    };

    let quiet = cli.quiet;
    match run(cli, config) {
        Ok(()) => {
            if !quiet {
                println!("{}", "✅ Success".green());
            }
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{} {:#}", "❌ Error:".red(), e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli, config: MigrationConfig) -> Result<()> {
    let path = cli.path.unwrap_or_else(|| config.path.clone());

    match cli.command {
        Commands::Make {
            name,
            table,
            create,
        } => {
            let creator = MigrationCreator::from_config(&config);
            let options = MakeOptions {
                name,
                table,
                create,
                path,
            };
            let created = commands::make(&creator, &options)?;
            if !cli.quiet {
                println!("{} {}", "Created Migration:".green(), created.display());
            }
        }
        Commands::List => {
            let migrations = commands::list(&path, &config.extension)?;
            if migrations.is_empty() {
                println!("No migrations found in {}", path.display());
            }
            for migration in &migrations {
                println!("  {} {}", migration.timestamp.dimmed(), migration.name);
            }
        }
    }

    Ok(())
}
