//! # Ferrous Dig
//!
//! Process shell around the lookup core: argument parsing, configuration,
//! logging, wiring and report rendering.

pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod di;
pub mod output;

pub use app::{run, Report};
pub use cli::Cli;
