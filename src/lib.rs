//! firekit: kernel toolkit for legacy PHP MVC applications.
//!
//! Resolves symbolic class names to files through an immutable registry
//! with a `<Name>.php` convention fallback, probes and loads candidates
//! over configured search roots, and carries the surrounding framework
//! plumbing: request data container, routing contract, file logger, and
//! workspace scaffolding.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use adapters::FileLogger;
use app::{AppContext, commands};

pub use app::commands::check::CheckOutcome;
pub use app::commands::resolve::ResolveOutcome;
pub use domain::{ClassName, Error, NameResolver, Resolution};
pub use services::PreloadReport;

/// Initialize a firekit workspace in the current directory.
pub fn init() -> Result<(), Error> {
    let cwd = std::env::current_dir()?;
    commands::init::execute(&cwd)?;
    println!("✅ Initialized firekit workspace");
    Ok(())
}

/// Resolve a class name against the workspace in the current directory.
pub fn resolve(name: &str) -> Result<ResolveOutcome, Error> {
    let ctx = AppContext::current()?;
    commands::resolve::execute(&ctx, name)
}

/// Probe every registered and preload class for a backing file.
pub fn check() -> Result<CheckOutcome, Error> {
    let ctx = AppContext::current()?;
    commands::check::execute(&ctx)
}

/// Eagerly load the configured preload classes, logging each outcome.
pub fn preload() -> Result<PreloadReport, Error> {
    let ctx = AppContext::current()?;

    let log_path = ctx.config().log_file(ctx.root());
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut logger = FileLogger::open(&log_path)?;

    commands::preload::execute(&ctx, &mut logger)
}
