//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

pub mod check;
pub mod completions;
pub mod inject;
pub mod render;

pub use check::handle_check;
pub use completions::handle_completions;
pub use inject::handle_inject;
pub use render::handle_render;
