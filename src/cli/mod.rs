//! Command-line interface: argument parsing and configuration

pub mod args;
pub mod config;

pub use args::{Args, Commands};
pub use config::Config;
