//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Schemadoc CLI - JSON Schema to Markdown documentation
///
/// A command-line tool for rendering JSON Schemas as readable Markdown,
/// keeping documentation files up to date, and checking that schemas
/// render cleanly.
#[derive(Parser, Debug)]
#[command(
    name = "schemadoc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SCHEMADOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a schema file to Markdown
    Render(RenderArgs),

    /// Re-render a schema between marker comments in an existing Markdown file
    Inject(InjectArgs),

    /// Check that schema files load and render without errors
    Check(CheckArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to the schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override the document title
    #[arg(long)]
    pub title: Option<String>,

    /// Skip the title and description header
    #[arg(long)]
    pub omit_header: bool,

    /// Render example blocks as YAML instead of JSON
    #[arg(long)]
    pub examples_as_yaml: bool,
}

/// Arguments for the inject command
#[derive(Parser, Debug)]
pub struct InjectArgs {
    /// Path to the schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Markdown file containing the marker comments to replace between
    #[arg(long = "into", value_name = "FILE")]
    pub target: PathBuf,

    /// Marker token identifying the region to replace
    #[arg(long, default_value = "schema")]
    pub token: String,

    /// Override the document title
    #[arg(long)]
    pub title: Option<String>,

    /// Skip the title and description header
    #[arg(long)]
    pub omit_header: bool,

    /// Render example blocks as YAML instead of JSON
    #[arg(long)]
    pub examples_as_yaml: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Schema files to check (JSON or YAML)
    #[arg(value_name = "SCHEMAS", required = true)]
    pub schemas: Vec<PathBuf>,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    ///
    /// Status messages and diagnostics go to stderr, so terminal detection
    /// happens there rather than on stdout.
    pub fn use_color(&self) -> bool {
        !self.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stderr().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
