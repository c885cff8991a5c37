#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! qt2md — turn a Qiita::Team backup export into one Markdown file per article.
//!
//! The pipeline is three sequential stages: [`export::load`] reads and
//! deserializes the export, [`convert::convert`] writes one `<title>.md` per
//! article, and [`convert::report`] hands every failed write to a
//! [`convert::Reporter`].

pub mod cli;
pub mod commands;
pub mod convert;
pub mod export;
pub mod types;
