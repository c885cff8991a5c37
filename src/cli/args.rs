/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

/// qt2md — convert from Qiita::Team backup json to markdowns.
#[derive(Debug, Parser)]
#[command(
    name = "qt2md",
    about = "Convert a Qiita::Team backup JSON into Markdown files",
    long_about = "Load your Qiita::Team backup JSON; one Markdown file per article \
                  is created in the current directory.",
    version
)]
pub struct Cli {
    /// Qiita::Team export JSON path, e.g. ~/Downloads/export.json
    #[arg(
        short = 'f',
        long,
        value_name = "PATH",
        default_value = "export.json"
    )]
    pub file: PathBuf,
}
