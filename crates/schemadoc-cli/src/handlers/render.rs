//! Render command handler

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use schemadoc_core::{loader, RenderOptions, Renderer};
use std::fs;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Handle the render command
#[instrument(skip(args, config, output), fields(schema = %args.schema.display()))]
pub fn handle_render(
    args: RenderArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::new("render_command");
    info!("Rendering schema documentation");

    if !args.schema.exists() {
        return Err(Error::FileNotFound {
            path: args.schema.clone(),
        });
    }

    let document = loader::load_schema_file(&args.schema)?;

    let options = render_options(&args, config);
    debug!(options = ?options, "Resolved render options");

    let markdown = Renderer::with_options(options).render(&document)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &markdown)?;
            output.success(&format!("✓ Documentation written to {}", path.display()))?;
        }
        None => {
            std::io::stdout().write_all(markdown.as_bytes())?;
        }
    }

    Ok(())
}

/// Combine command-line flags with configuration defaults
fn render_options(args: &RenderArgs, config: &Config) -> RenderOptions {
    RenderOptions {
        title: args.title.clone().or_else(|| config.render.title.clone()),
        omit_header: args.omit_header || config.render.omit_header,
        examples_as_yaml: args.examples_as_yaml || config.render.examples_as_yaml,
    }
}
