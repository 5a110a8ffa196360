//! repodoc CLI - documentation artifacts for a repository.

use anyhow::Result;
use clap::Parser;
use repodoc::cli::{log_level, print_command_help, require, Cli, Commands};
use repodoc::{RepoDoc, RepoDocConfig, RepoDocError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level(cli.verbose)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let command_name = cli.command.name();

    if let Err(e) = run(cli) {
        let missing = e
            .downcast_ref::<RepoDocError>()
            .filter(|err| matches!(err, RepoDocError::MissingArgument(_)));
        if let Some(missing) = missing {
            println!("{}", missing);
            print_command_help(command_name);
            return;
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = RepoDocConfig::load(&cli.config)?;
    if let Some(root) = cli.output_root {
        config.output.root = root;
    }
    let docs = RepoDoc::new(config);

    match cli.command {
        Commands::Clone { url } => {
            let url = require(url, "url")?;
            let report = docs.clone_repository(&url)?;
            println!("✓ Cloned into {}", report.repo_dir.display());
            println!("✓ Wrote {}", report.file_tree.display());
            if let Some(readme) = report.readme {
                println!("✓ Wrote {}", readme.display());
            }
        }

        Commands::Map { path } => {
            let path = require(path, "path")?;
            let written = docs.map(&path)?;
            println!("✓ Wrote {}", written.display());
        }

        Commands::GenerateDocs { path } => {
            let path = require(path, "path")?;
            let written = docs.generate_docs(&path)?;
            println!("✓ Wrote {}", written.display());
        }

        Commands::Analyze { path } => {
            let path = require(path, "path")?;
            let written = docs.analyze(&path)?;
            println!("✓ Wrote {}", written.display());
        }

        Commands::Diagram {
            ccg,
            output,
            format,
        } => {
            let ccg = require(ccg, "ccg")?;
            let output = require(output, "output")?;
            docs.diagram(&ccg, &output, format.as_deref())?;
            println!("✓ Rendered {}", output.display());
        }
    }

    Ok(())
}
