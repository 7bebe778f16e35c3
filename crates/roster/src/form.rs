//! The add form and edit dialog.
//!
//! Both are the same draft, [`EmployeeForm`]: the add form starts from
//! [`EmployeeForm::default`], the edit dialog from
//! [`EmployeeForm::from_employee`]. Submission is gated rather than
//! validated after the fact: while a required field is missing the submit
//! action is simply unavailable and `submit_*` returns `None`.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{region, Employee, Gender};

/// Draft state behind the add form and the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    /// Id of the record being edited; `None` for a new record.
    pub id: Option<i64>,
    /// Full name as typed.
    pub full_name: String,
    /// Selected gender; `None` until one is picked.
    pub gender: Option<Gender>,
    /// Selected date of birth.
    pub dob: Option<NaiveDate>,
    /// Selected region.
    pub state: Option<String>,
    /// Active toggle.
    pub active: bool,
    /// Data URL of the selected photo.
    pub image: Option<String>,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            id: None,
            full_name: String::new(),
            gender: None,
            dob: None,
            state: None,
            active: true,
            image: None,
        }
    }
}

impl EmployeeForm {
    /// Seed the edit dialog from an existing record.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id),
            full_name: employee.full_name.clone(),
            gender: Some(employee.gender),
            dob: Some(employee.dob),
            state: employee.state.clone(),
            active: employee.active,
            image: employee.image.clone(),
        }
    }

    /// Explain why the submit action is unavailable, or `None` if it is
    /// available.
    #[must_use]
    pub fn blocker(&self, today: NaiveDate) -> Option<&'static str> {
        if self.full_name.trim().is_empty() {
            return Some("full name is required");
        }
        if self.gender.is_none() {
            return Some("gender is required");
        }
        match self.dob {
            None => return Some("date of birth is required"),
            Some(dob) if dob > today => return Some("date of birth cannot be in the future"),
            Some(_) => {}
        }
        match self.state.as_deref() {
            None | Some("") => Some("state is required"),
            Some(state) if !region::is_known_region(state) => Some("state is not a known region"),
            Some(_) => None,
        }
    }

    /// Whether the submit action is available.
    #[must_use]
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        self.blocker(today).is_none()
    }

    /// Build a new record with the given id, if the form can be submitted.
    #[must_use]
    pub fn submit_new(&self, id: i64, today: NaiveDate) -> Option<Employee> {
        self.build(id, today)
    }

    /// Build the edited record, keeping the original id, if the form can be
    /// submitted. Returns `None` for a form that was not seeded from a record.
    #[must_use]
    pub fn submit_edit(&self, today: NaiveDate) -> Option<Employee> {
        self.build(self.id?, today)
    }

    /// Drop the selected photo so the saved record has none.
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Return the form to its empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn build(&self, id: i64, today: NaiveDate) -> Option<Employee> {
        if let Some(reason) = self.blocker(today) {
            debug!(reason, "Submit unavailable");
            return None;
        }
        Some(Employee {
            id,
            full_name: self.full_name.clone(),
            gender: self.gender?,
            dob: self.dob?,
            state: self.state.clone(),
            active: self.active,
            image: self.image.clone().filter(|url| !url.is_empty()),
        })
    }
}

/// Read an image file and encode it as a `data:` URL.
///
/// The file type is sniffed from its contents; anything that is not an
/// image is refused. No size limit is applied.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not an image.
pub fn load_image(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    image_data_url(&bytes).ok_or_else(|| {
        let detected = infer::get(&bytes).map_or("unknown", |kind| kind.mime_type());
        Error::unsupported_image(path, format!("detected type is {detected}"))
    })
}

/// Encode image bytes as a `data:` URL, or `None` if they are not an image.
#[must_use]
pub fn image_data_url(bytes: &[u8]) -> Option<String> {
    let kind = infer::get(bytes)?;
    if kind.matcher_type() != infer::MatcherType::Image {
        return None;
    }
    Some(format!(
        "data:{};base64,{}",
        kind.mime_type(),
        STANDARD.encode(bytes)
    ))
}
