//! Inject command handler

use crate::cli::InjectArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use schemadoc_core::{inject, loader, RenderOptions, Renderer};
use tracing::{debug, info, instrument};

/// Handle the inject command
#[instrument(
    skip(args, config, output),
    fields(schema = %args.schema.display(), target = %args.target.display())
)]
pub fn handle_inject(
    args: InjectArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::new("inject_command");
    info!("Injecting schema documentation");

    if !args.schema.exists() {
        return Err(Error::FileNotFound {
            path: args.schema.clone(),
        });
    }
    if !args.target.exists() {
        return Err(Error::FileNotFound {
            path: args.target.clone(),
        });
    }

    let document = loader::load_schema_file(&args.schema)?;

    let options = render_options(&args, config);
    debug!(options = ?options, token = %args.token, "Resolved inject options");

    let lines = Renderer::with_options(options).render_lines(&document)?;
    inject::write_lines_between_markers(&args.target, &lines, &args.token)?;

    output.success(&format!(
        "✓ Updated {} between '{}' markers",
        args.target.display(),
        args.token
    ))?;

    Ok(())
}

/// Combine command-line flags with configuration defaults
fn render_options(args: &InjectArgs, config: &Config) -> RenderOptions {
    RenderOptions {
        title: args.title.clone().or_else(|| config.render.title.clone()),
        omit_header: args.omit_header || config.render.omit_header,
        examples_as_yaml: args.examples_as_yaml || config.render.examples_as_yaml,
    }
}
