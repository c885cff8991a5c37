/// CLI layer: argument parsing, console output, and logging setup.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{ConsoleReporter, init_logging, write_error};
