use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{ClassName, Error};
use crate::ports::ClassSource;

/// Machine-readable resolution report for one class name.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveOutcome {
    pub name: String,
    /// "registered" for a table hit, "convention" for the fallback.
    pub kind: &'static str,
    /// Candidate path produced by resolution.
    pub candidate: String,
    /// Concrete file the candidate maps to, if any root carries it.
    pub located: Option<String>,
}

/// Execute the resolve command.
pub fn execute<S: ClassSource>(ctx: &AppContext<S>, name: &str) -> Result<ResolveOutcome, Error> {
    let name = ClassName::new(name)?;
    let resolution = ctx.resolver().resolve(&name);
    let located = ctx.loader().source().locate(resolution.path());

    Ok(ResolveOutcome {
        name: name.to_string(),
        kind: if resolution.is_registered() { "registered" } else { "convention" },
        candidate: resolution.path().display().to_string(),
        located: located.map(|path| path.display().to_string()),
    })
}
