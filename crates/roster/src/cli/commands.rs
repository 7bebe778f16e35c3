//! CLI command definitions.
//!
//! This module defines the arguments of every `roster` subcommand.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::model::Gender;
use crate::present::TableFormat;
use crate::view::{GenderFilter, StatusFilter};

/// Login command arguments.
#[derive(Debug, Args)]
pub struct LoginCommand {
    /// Email address
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Password
    #[arg(short, long, default_value = "")]
    pub password: String,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Full name
    #[arg(short, long)]
    pub name: String,

    /// Gender
    #[arg(short, long, value_enum)]
    pub gender: GenderArg,

    /// Date of birth (YYYY-MM-DD)
    #[arg(short, long)]
    pub dob: NaiveDate,

    /// State or union territory (see `roster regions`)
    #[arg(short, long)]
    pub state: String,

    /// Record the employee as inactive
    #[arg(long)]
    pub inactive: bool,

    /// Profile photo
    #[arg(short, long, value_name = "FILE")]
    pub image: Option<PathBuf>,
}

/// Edit command arguments. Omitted fields keep their current value.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Employee id
    pub id: i64,

    /// Full name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Gender
    #[arg(short, long, value_enum)]
    pub gender: Option<GenderArg>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(short, long)]
    pub dob: Option<NaiveDate>,

    /// State or union territory
    #[arg(short, long)]
    pub state: Option<String>,

    /// Active flag
    #[arg(long, value_name = "BOOL")]
    pub active: Option<bool>,

    /// Replace the profile photo
    #[arg(short, long, value_name = "FILE", conflicts_with = "clear_image")]
    pub image: Option<PathBuf>,

    /// Remove the profile photo
    #[arg(long)]
    pub clear_image: bool,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Case-insensitive substring of the full name
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Gender filter
    #[arg(short, long, value_enum, default_value = "all")]
    pub gender: GenderFilterArg,

    /// Status filter
    #[arg(long, value_enum, default_value = "all")]
    pub status: StatusArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Gender argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    /// Male
    Male,
    /// Female
    Female,
    /// Other
    Other,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
            GenderArg::Other => Self::Other,
        }
    }
}

/// Gender filter argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderFilterArg {
    /// Every gender
    All,
    /// Male only
    Male,
    /// Female only
    Female,
    /// Other only
    Other,
}

impl From<GenderFilterArg> for GenderFilter {
    fn from(arg: GenderFilterArg) -> Self {
        match arg {
            GenderFilterArg::All => Self::All,
            GenderFilterArg::Male => Self::Only(Gender::Male),
            GenderFilterArg::Female => Self::Only(Gender::Female),
            GenderFilterArg::Other => Self::Only(Gender::Other),
        }
    }
}

/// Status filter argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Active and inactive
    All,
    /// Active only
    Active,
    /// Inactive only
    Inactive,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => Self::All,
            StatusArg::Active => Self::Active,
            StatusArg::Inactive => Self::Inactive,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormat> for TableFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
        }
    }
}
