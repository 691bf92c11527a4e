//! Output formatting and writing utilities
//!
//! This module provides utilities for writing status messages with
//! optional color support. All status output goes to stderr by default
//! so that stdout stays reserved for rendered Markdown.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

/// Output writer that handles status messages and colors
pub struct OutputWriter {
    use_color: bool,
    quiet: bool,
    #[allow(dead_code)]
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stderr
    pub fn new(use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            use_color,
            quiet,
            verbose,
            writer: Box::new(io::stderr()),
        }
    }

    /// Create an output writer with a custom writer
    #[allow(dead_code)]
    pub fn with_writer(use_color: bool, quiet: bool, verbose: u8, writer: Box<dyn Write>) -> Self {
        Self {
            use_color,
            quiet,
            verbose,
            writer,
        }
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A writer that can be inspected after the OutputWriter is done with it
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_plain_prefixes_without_color() {
        let buffer = SharedBuffer::default();
        let mut output = OutputWriter::with_writer(false, false, 0, Box::new(buffer.clone()));

        output.info("loading").unwrap();
        output.warning("careful").unwrap();
        output.error("broken").unwrap();
        output.success("done").unwrap();

        let written = buffer.contents();
        assert!(written.contains("INFO: loading"));
        assert!(written.contains("WARNING: careful"));
        assert!(written.contains("ERROR: broken"));
        assert!(written.contains("done"));
    }

    #[test]
    fn test_quiet_suppresses_non_essential_output() {
        let buffer = SharedBuffer::default();
        let mut output = OutputWriter::with_writer(false, true, 0, Box::new(buffer.clone()));

        output.info("loading").unwrap();
        output.success("done").unwrap();
        output.section("Results").unwrap();
        output.error("broken").unwrap();

        let written = buffer.contents();
        assert!(!written.contains("loading"));
        assert!(!written.contains("done"));
        assert!(!written.contains("Results"));
        assert!(written.contains("ERROR: broken"));
    }

    #[test]
    fn test_section_is_preceded_by_blank_line() {
        let buffer = SharedBuffer::default();
        let mut output = OutputWriter::with_writer(false, false, 0, Box::new(buffer.clone()));

        output.section("Schema Check").unwrap();

        assert_eq!(buffer.contents(), "\n=== Schema Check ===\n");
    }
}
