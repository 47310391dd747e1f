use crate::app::AppContext;
use crate::domain::Error;
use crate::ports::{ClassSource, Logger};
use crate::services::PreloadReport;

/// Execute the preload command.
///
/// Eagerly resolves and loads the configured preload classes. Unresolved
/// names are logged and reported, not raised; dependent code fails at its
/// first `require` of the missing name.
pub fn execute<S: ClassSource, L: Logger>(
    ctx: &AppContext<S>,
    logger: &mut L,
) -> Result<PreloadReport, Error> {
    let report = ctx.loader().preload(&ctx.config().preload.classes)?;

    for name in report.set.names() {
        logger.log_now(&format!("Loaded class '{}'", name))?;
    }
    for (name, candidate) in &report.unresolved {
        logger.log_now(&format!(
            "Unresolved class '{}'; no file for candidate '{}'",
            name,
            candidate.display()
        ))?;
    }

    Ok(report)
}
