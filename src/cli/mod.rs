//! CLI definitions for repodoc.
//!
//! Commands:
//! - clone: clone a remote repository, then map it
//! - map, generate-docs, analyze: artifacts for a local directory
//! - diagram: render a ccg.json

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::RepoDocError;

#[derive(Parser)]
#[command(name = "repodoc")]
#[command(about = "repodoc - Repository documentation helper", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    /// Output root (overrides `output.root`)
    #[arg(long, global = true)]
    pub output_root: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clone a repository into <output>/<name>/repo and map it
    Clone {
        /// Repository URL
        #[arg(long)]
        url: Option<String>,
    },

    /// Write <output>/<name>/file_tree.json for a local directory
    Map {
        /// Repository root
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Write <output>/<name>/docs.md for a local directory
    GenerateDocs {
        /// Repository root
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Write <output>/<name>/ccg.json for a local directory
    Analyze {
        /// Repository root
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Render a ccg.json as a containment diagram
    Diagram {
        /// Path to ccg.json
        #[arg(long)]
        ccg: Option<PathBuf>,

        /// Image path to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (png, svg, pdf, dot, ...)
        #[arg(short, long)]
        format: Option<String>,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Clone { .. } => "clone",
            Commands::Map { .. } => "map",
            Commands::GenerateDocs { .. } => "generate-docs",
            Commands::Analyze { .. } => "analyze",
            Commands::Diagram { .. } => "diagram",
        }
    }
}

/// Unwrap a required argument or report it missing.
pub fn require<T>(value: Option<T>, arg: &'static str) -> Result<T, RepoDocError> {
    value.ok_or(RepoDocError::MissingArgument(arg))
}

/// Print help for one subcommand.
pub fn print_command_help(name: &str) {
    let mut command = Cli::command();
    if let Some(sub) = command.find_subcommand_mut(name) {
        let _ = sub.print_help();
    } else {
        let _ = command.print_help();
    }
}

/// Log filter for a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
