//! Aggregate summaries shown above the table.
//!
//! Both breakdowns are computed over the whole roster, not the filtered
//! view.

use std::fmt::Write as _;

use serde::Serialize;

use crate::model::{Employee, Gender};

/// Width of a full bar in characters.
const BAR_WIDTH: usize = 30;

/// One slice of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    /// Slice label.
    pub name: &'static str,
    /// Number of employees in the slice.
    pub value: usize,
}

/// A titled set of slices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    /// Chart title.
    pub title: &'static str,
    /// Slices, in display order.
    pub slices: Vec<Slice>,
}

impl Breakdown {
    /// Sum of all slice values.
    #[must_use]
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Render as horizontal text bars with counts and percentages.
    #[must_use]
    pub fn render(&self) -> String {
        let total = self.total();
        let label_width = self
            .slices
            .iter()
            .map(|s| s.name.len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        for slice in &self.slices {
            let (bar, percent) = if total == 0 {
                (0, 0)
            } else {
                (
                    slice.value * BAR_WIDTH / total,
                    (slice.value * 100 + total / 2) / total,
                )
            };
            let _ = writeln!(
                out,
                "  {:<label_width$}  {:<bar_width$}  {:>3} ({:>3}%)",
                slice.name,
                "#".repeat(bar),
                slice.value,
                percent,
                bar_width = BAR_WIDTH,
            );
        }
        out
    }
}

/// Employees per gender: Male, Female, Other.
#[must_use]
pub fn gender_breakdown(employees: &[Employee]) -> Breakdown {
    Breakdown {
        title: "Employees by Gender",
        slices: Gender::ALL
            .into_iter()
            .map(|gender| Slice {
                name: gender.as_str(),
                value: employees.iter().filter(|e| e.gender == gender).count(),
            })
            .collect(),
    }
}

/// Employees per status: Active, Inactive.
#[must_use]
pub fn status_breakdown(employees: &[Employee]) -> Breakdown {
    let active = employees.iter().filter(|e| e.active).count();
    Breakdown {
        title: "Employee Status",
        slices: vec![
            Slice {
                name: "Active",
                value: active,
            },
            Slice {
                name: "Inactive",
                value: employees.len() - active,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn employee(gender: Gender, active: bool) -> Employee {
        Employee {
            id: 0,
            full_name: "X".to_string(),
            gender,
            dob: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            state: Some("Goa".to_string()),
            active,
            image: None,
        }
    }

    #[test]
    fn test_gender_breakdown_counts() {
        let all = vec![
            employee(Gender::Male, true),
            employee(Gender::Female, true),
            employee(Gender::Female, false),
        ];

        let chart = gender_breakdown(&all);
        let values: Vec<_> = chart.slices.iter().map(|s| (s.name, s.value)).collect();
        assert_eq!(values, [("Male", 1), ("Female", 2), ("Other", 0)]);
        assert_eq!(chart.total(), 3);
    }

    #[test]
    fn test_status_breakdown_counts() {
        let all = vec![
            employee(Gender::Male, true),
            employee(Gender::Other, false),
            employee(Gender::Other, false),
        ];

        let chart = status_breakdown(&all);
        assert_eq!(chart.slices[0].value, 1);
        assert_eq!(chart.slices[1].value, 2);
    }

    #[test]
    fn test_render_empty_roster() {
        let out = status_breakdown(&[]).render();
        assert!(out.starts_with("Employee Status\n"));
        assert!(out.contains("Active"));
        assert!(out.contains("(  0%)"));
    }

    #[test]
    fn test_render_bars_scale() {
        let all = vec![employee(Gender::Male, true), employee(Gender::Male, false)];
        let out = gender_breakdown(&all).render();
        let male_line = out.lines().find(|l| l.trim_start().starts_with("Male")).unwrap();
        assert!(male_line.contains(&"#".repeat(BAR_WIDTH)));
        assert!(male_line.contains("(100%)"));
    }
}
