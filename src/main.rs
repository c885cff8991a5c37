//! qt2md — convert a Qiita::Team backup JSON export into Markdown files.

use clap::Parser;

use qt2md::cli::{Cli, ConsoleReporter, init_logging, write_error};
use qt2md::commands;

fn main() {
    let cli = Cli::parse();
    init_logging();

    let mut reporter = ConsoleReporter;
    match commands::dispatch(&cli, &mut reporter) {
        Ok(()) => {}
        Err(err) => {
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
