/// Console output: progress lines, colored failure lines, errors, logging.
use std::io::Write;
use std::path::Path;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::convert::{Reporter, WriteFailure};
use crate::export::ConvertError;

/// Reporter that prints to stdout. Failures are rendered in red.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn loading(&mut self, path: &Path) {
        println!("{}", path.display());
    }

    fn converting(&mut self, title: &str) {
        println!("{title}");
    }

    fn failed(&mut self, failure: &WriteFailure) {
        println!("{}", failure.to_string().red());
    }
}

/// Write a fatal error to stderr.
pub fn write_error(err: &ConvertError) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
