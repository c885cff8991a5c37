/// Export layer: reading the backup file and the errors it can raise.
pub mod errors;
pub mod load;

pub use errors::ConvertError;
pub use load::{load, parse};
