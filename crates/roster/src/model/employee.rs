//! The employee record.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender recorded on an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Any other gender.
    Other,
}

impl Gender {
    /// All genders, in the order pickers and charts list them.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// The persisted and displayed label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown gender '{s}' (expected Male, Female or Other)"))
    }
}

/// A single employee record.
///
/// Serialized with camelCase keys; `image` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Identifier, unique within the roster.
    pub id: i64,

    /// Display name.
    pub full_name: String,

    /// Recorded gender.
    pub gender: Gender,

    /// Date of birth, stored as `YYYY-MM-DD`.
    pub dob: NaiveDate,

    /// Region name; the type allows null but the form always fills it.
    pub state: Option<String>,

    /// Whether the employee is currently active.
    #[serde(default = "default_active")]
    pub active: bool,

    /// Inline `data:` URL of the employee's photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Human-readable status label.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// The region, or an empty string when unset.
    #[must_use]
    pub fn state_or_empty(&self) -> &str {
        self.state.as_deref().unwrap_or("")
    }

    /// Date of birth in `dd/mm/yyyy` form.
    #[must_use]
    pub fn dob_display(&self) -> String {
        self.dob.format("%d/%m/%Y").to_string()
    }
}
