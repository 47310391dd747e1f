use std::io;

use clap::{Parser, Subcommand};
use firekit::Error;

#[derive(Parser)]
#[command(name = "firekit")]
#[command(version)]
#[command(
    about = "Class resolution and kernel plumbing for legacy PHP MVC applications",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold firekit.toml and the application skeleton
    Init,
    /// Resolve a class name to its candidate file
    Resolve {
        /// Class name to resolve
        name: String,
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Probe every registered and preload class for a backing file
    Check {
        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Eagerly load the configured preload classes
    Preload,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), Error> = match cli.command {
        Commands::Init => firekit::init(),
        Commands::Resolve { name, json } => run_resolve(&name, json),
        Commands::Check { json } => run_check(json),
        Commands::Preload => run_preload(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_resolve(name: &str, json: bool) -> Result<(), Error> {
    let outcome = firekit::resolve(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome).map_err(io::Error::other)?);
        return Ok(());
    }

    match &outcome.located {
        Some(path) => println!("{} -> {} ({})", outcome.name, path, outcome.kind),
        None => {
            println!("{} -> {} ({}, no backing file)", outcome.name, outcome.candidate, outcome.kind)
        }
    }
    Ok(())
}

fn run_check(json: bool) -> Result<(), Error> {
    let outcome = firekit::check()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome).map_err(io::Error::other)?);
    } else {
        println!("Checked {} registered classes", outcome.checked);
        for name in &outcome.missing_registered {
            println!("  missing framework class: {}", name);
        }
        for name in &outcome.missing_preload {
            println!("  missing preload class: {}", name);
        }
        if let Some(err) = &outcome.routes_error {
            println!("  routes table: {}", err);
        }
    }

    if !outcome.is_healthy() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_preload() -> Result<(), Error> {
    let report = firekit::preload()?;
    println!(
        "✅ Loaded {} classes ({} unresolved)",
        report.set.len(),
        report.unresolved.len()
    );
    Ok(())
}
