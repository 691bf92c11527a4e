//! Schemadoc CLI - Generate Markdown documentation from JSON Schemas
//!
//! This is the main entry point for the schemadoc CLI application, providing
//! commands for rendering schemas to Markdown, re-rendering documentation
//! between markers in existing files, and checking that schemas render
//! cleanly.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{LoggingConfig, timing::Timer};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli), fields(command = ?cli.command))]
fn run(cli: Cli) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    // Load configuration
    let config = {
        let _config_timer = Timer::new("config_loading");
        tracing::info!("Loading configuration");
        Config::load_with_file(cli.config.as_deref())?
    };

    // The config file may disable colors as well
    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    // Create output writer
    let mut output = OutputWriter::new(
        use_color,
        cli.quiet,
        cli.verbosity_level().max(config.output.verbosity),
    );

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Render(args) => handlers::handle_render(args, &config, &mut output),
        Commands::Inject(args) => handlers::handle_inject(args, &config, &mut output),
        Commands::Check(args) => handlers::handle_check(args, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    // Create logging configuration from CLI args and environment
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    // Initialize the logging system
    logging::init_logging(logging_config)
}
