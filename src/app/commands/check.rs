use std::fs;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::paths::routes_file;
use crate::domain::{Error, RoutesConfig};
use crate::ports::ClassSource;

/// Outcome of a workspace check sweep.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckOutcome {
    /// Count of registry entries probed.
    pub checked: usize,
    /// Registered classes with no backing file.
    pub missing_registered: Vec<String>,
    /// Preload entries with no backing file.
    pub missing_preload: Vec<String>,
    /// Problem with the routes table, if it failed to load or parse.
    pub routes_error: Option<String>,
}

impl CheckOutcome {
    pub fn is_healthy(&self) -> bool {
        self.missing_registered.is_empty()
            && self.missing_preload.is_empty()
            && self.routes_error.is_none()
    }
}

/// Execute the check command.
///
/// Probes every registry entry and every preload entry for a backing file
/// and validates the routes table. Absence is reported, never raised; the
/// caller decides the exit status.
pub fn execute<S: ClassSource>(ctx: &AppContext<S>) -> Result<CheckOutcome, Error> {
    let mut outcome = CheckOutcome::default();
    let source = ctx.loader().source();

    for (name, _) in ctx.resolver().registry().iter() {
        outcome.checked += 1;
        let resolution = ctx.resolver().resolve(name);
        if !ctx.resolver().exists(source, &resolution) {
            outcome.missing_registered.push(name.to_string());
        }
    }

    for name in &ctx.config().preload.classes {
        let resolution = ctx.resolver().resolve(name);
        if !ctx.resolver().exists(source, &resolution) {
            outcome.missing_preload.push(name.to_string());
        }
    }

    let routes_path = routes_file(&ctx.config().app_root(ctx.root()));
    match fs::read_to_string(&routes_path) {
        Ok(text) => {
            if let Err(err) = RoutesConfig::from_toml(&text) {
                outcome.routes_error = Some(err.to_string());
            }
        }
        Err(_) => {
            outcome.routes_error =
                Some(format!("routes file not found at {}", routes_path.display()));
        }
    }

    Ok(outcome)
}
