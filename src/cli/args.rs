//! Command-line argument parsing for intakeflow
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// intakeflow - structured intake interviews for forensic nursing
#[derive(Parser, Debug)]
#[command(name = "intakeflow")]
#[command(version)]
#[command(about = "Trauma-informed structured interview engine", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress banner and status output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand (defaults to starting an interview)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interview session (the default)
    Start {
        /// Export the finished record to this JSON file
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Generate reference text (medication summary or aftercare guidance)
    Reference {
        /// Medication name or aftercare topic
        subject: String,

        /// Generate aftercare guidance instead of a medication summary
        #[arg(long)]
        aftercare: bool,
    },

    /// List models available on the configured Ollama endpoint
    Models,

    /// Display the current configuration
    Config,
}

/// Verbosity level for log filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Tracing filter directive for this verbosity
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::VeryVerbose => "trace",
        }
    }
}
