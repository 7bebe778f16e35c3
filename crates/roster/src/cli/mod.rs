//! Command-line interface for roster.
//!
//! This module provides the CLI structure for the `roster` binary. Handlers
//! live in the binary itself.

mod browse;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use browse::{BrowseInput, BROWSE_HELP};
pub use commands::{
    AddCommand, ConfigCommand, EditCommand, GenderArg, GenderFilterArg, ListCommand, LoginCommand,
    OutputFormat, StatusArg, StatusCommand,
};

/// roster - Keep a local employee roster
///
/// Add, edit, filter and print employee records stored in a local database.
/// Every command except `login`, `status`, `regions` and `config` needs an
/// open session.
#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open a session
    Login(LoginCommand),

    /// Close the session
    Logout,

    /// Show session and database status
    Status(StatusCommand),

    /// Add an employee
    Add(AddCommand),

    /// Edit an employee
    Edit(EditCommand),

    /// Delete an employee
    Delete {
        /// Employee id
        id: i64,
    },

    /// List employees, optionally filtered
    List(ListCommand),

    /// Filter the roster interactively
    Browse,

    /// Show gender and status breakdowns
    Charts,

    /// Print an employee's details sheet
    Print {
        /// Employee id
        id: i64,
    },

    /// List the states and union territories accepted for `--state`
    Regions,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Command {
    /// Whether the command needs an open session.
    #[must_use]
    pub fn requires_session(&self) -> bool {
        !matches!(
            self,
            Self::Login(_) | Self::Logout | Self::Status(_) | Self::Regions | Self::Config(_)
        )
    }
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
