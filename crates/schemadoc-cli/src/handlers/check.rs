//! Check command handler

use crate::cli::CheckArgs;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use schemadoc_core::{loader, render_markdown};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Handle the check command
#[instrument(skip(args, output), fields(count = args.schemas.len()))]
pub fn handle_check(args: CheckArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("check_command");
    info!("Checking {} schema file(s)", args.schemas.len());

    output.section("Schema Check")?;

    let total = args.schemas.len();
    let mut failures = 0;
    let mut first_failure = None;

    for path in &args.schemas {
        match check_one(path) {
            Ok(()) => {
                output.success(&format!("✓ {}", path.display()))?;
            }
            Err(e) => {
                warn!(schema = %path.display(), error = %e, "Schema check failed");
                output.error(&format!("✗ {}: {}", path.display(), e))?;
                failures += 1;
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
    }

    // The exit code reflects the first failure encountered
    if let Some(error) = first_failure {
        output.error(&format!("{failures} of {total} schema(s) failed the check"))?;
        return Err(error);
    }

    output.info(&format!("All {total} schema(s) render cleanly"))?;
    Ok(())
}

/// Load and render a single schema, discarding the output
fn check_one(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let document = loader::load_schema_file(path)?;
    render_markdown(&document)?;

    Ok(())
}
