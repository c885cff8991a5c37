/// Command dispatch: runs the conversion for the parsed CLI arguments.
pub mod convert;

use std::path::Path;

use crate::cli::Cli;
use crate::convert::Reporter;
use crate::export::ConvertError;

/// Run the conversion described by `cli`, writing into the current directory.
///
/// # Errors
///
/// Returns `ConvertError` when the export file cannot be read.
pub fn dispatch(cli: &Cli, reporter: &mut dyn Reporter) -> Result<(), ConvertError> {
    convert::run(&cli.file, Path::new("."), reporter).map(|_| ())
}
