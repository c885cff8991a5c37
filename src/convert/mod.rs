/// Conversion layer: rendering articles, writing files, reporting failures.
pub mod markdown;
pub mod report;
pub mod write;

pub use markdown::{file_name, render};
pub use report::{Reporter, report};
pub use write::{Conversion, WriteFailure, convert};
