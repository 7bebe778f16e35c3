//! Employee table rendering.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::Result;
use crate::model::Employee;

/// Column headings, in display order.
pub const HEADERS: [&str; 6] = ["ID", "Name", "Gender", "State", "Date of Birth", "Status"];

/// Shown in place of rows when the view is empty.
pub const EMPTY_MESSAGE: &str = "No employees found";

/// How a list of employees is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// One line per employee.
    #[default]
    Plain,
    /// Aligned columns with a header.
    Table,
    /// JSON array of persisted records.
    Json,
}

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Record id.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Gender label.
    pub gender: String,
    /// Region.
    pub state: String,
    /// Date of birth, `dd/mm/yyyy`.
    pub dob: String,
    /// `Active` or `Inactive`.
    pub status: String,
}

impl Row {
    /// Build the display row for `employee`.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.full_name.clone(),
            gender: employee.gender.to_string(),
            state: employee.state_or_empty().to_string(),
            dob: employee.dob_display(),
            status: employee.status_label().to_string(),
        }
    }

    fn cells(&self) -> [&str; 6] {
        [
            &self.id,
            &self.name,
            &self.gender,
            &self.state,
            &self.dob,
            &self.status,
        ]
    }
}

/// Render `employees` in the requested format.
///
/// # Errors
///
/// Returns an error only if JSON encoding fails.
pub fn render(employees: &[&Employee], format: TableFormat) -> Result<String> {
    if format == TableFormat::Json {
        return Ok(serde_json::to_string_pretty(employees)?);
    }
    if employees.is_empty() {
        return Ok(format!("{EMPTY_MESSAGE}\n"));
    }

    let rows: Vec<Row> = employees.iter().map(|e| Row::from_employee(e)).collect();
    Ok(match format {
        TableFormat::Table => render_columns(&rows),
        _ => render_plain(&rows),
    })
}

fn render_plain(rows: &[Row]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{}  {} ({}, {}) born {} [{}]",
            row.id, row.name, row.gender, row.state, row.dob, row.status
        );
    }
    out
}

fn render_columns(rows: &[Row]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_line(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule_cells: Vec<&str> = rule.iter().map(String::as_str).collect();
    write_line(&mut out, &rule_cells, &widths);
    for row in rows {
        write_line(&mut out, &row.cells(), &widths);
    }
    out
}

fn write_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
