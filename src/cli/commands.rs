use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::config::{AppConfig, PageSet};

#[derive(Parser)]
#[command(name = "nexus", about = concat!("nexus v", env!("CARGO_PKG_VERSION"), " - projects, boards and team seats in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ./nexus.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the login screen
    #[arg(long, global = true)]
    pub no_auth: bool,

    /// Only route Home and Projects
    #[arg(long, global = true)]
    pub minimal: bool,

    /// Starting seat limit
    #[arg(long, global = true, value_name = "N")]
    pub seats: Option<usize>,

    /// Page to open on, as a route fragment (e.g. "#/task-boards")
    #[arg(long, value_name = "FRAGMENT")]
    pub route: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the route table for the effective configuration
    Routes(RoutesArgs),
}

#[derive(Args)]
pub struct RoutesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the file config
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if self.no_auth {
            config.features.auth = false;
        }
        if self.minimal {
            config.features.pages = PageSet::Minimal;
        }
        if let Some(seats) = self.seats {
            config.workspace.seat_limit = seats;
        }
    }
}
