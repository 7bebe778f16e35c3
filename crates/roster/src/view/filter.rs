//! Pure filtering of the roster into the displayed subset.

use std::str::FromStr;

use crate::model::{Employee, Gender};

/// Gender selector; `All` disables the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    /// Every gender.
    #[default]
    All,
    /// Only the given gender.
    Only(Gender),
}

/// Status selector; `All` disables the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Active and inactive alike.
    #[default]
    All,
    /// Only `active == true`.
    Active,
    /// Only `active == false`.
    Inactive,
}

impl GenderFilter {
    /// Whether `gender` passes this filter.
    #[must_use]
    pub fn matches(self, gender: Gender) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == gender,
        }
    }
}

impl StatusFilter {
    /// Whether an employee with the given flag passes this filter.
    #[must_use]
    pub fn matches(self, active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => active,
            Self::Inactive => !active,
        }
    }
}

impl std::fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(gender) => write!(f, "{gender}"),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        })
    }
}

impl FromStr for GenderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!(
                "unknown status '{s}' (expected All, Active or Inactive)"
            )),
        }
    }
}

/// The three filter inputs applied together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewCriteria {
    /// Substring matched against the full name, ignoring case.
    pub search: String,
    /// Gender selector.
    pub gender: GenderFilter,
    /// Status selector.
    pub status: StatusFilter,
}

impl ViewCriteria {
    /// Whether `employee` passes all three predicates.
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_lowered(employee, &self.search.to_lowercase())
    }

    fn matches_lowered(&self, employee: &Employee, lowered_needle: &str) -> bool {
        (lowered_needle.is_empty() || employee.full_name.to_lowercase().contains(lowered_needle))
            && self.gender.matches(employee.gender)
            && self.status.matches(employee.active)
    }
}

/// Filter `all` by `criteria`, keeping collection order.
#[must_use]
pub fn view<'a>(all: &'a [Employee], criteria: &ViewCriteria) -> Vec<&'a Employee> {
    let needle = criteria.search.to_lowercase();
    all.iter()
        .filter(|e| criteria.matches_lowered(e, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn employee(id: i64, name: &str, gender: Gender, active: bool) -> Employee {
        Employee {
            id,
            full_name: name.to_string(),
            gender,
            dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            state: Some("Kerala".to_string()),
            active,
            image: None,
        }
    }

    fn criteria(search: &str, gender: GenderFilter, status: StatusFilter) -> ViewCriteria {
        ViewCriteria {
            search: search.to_string(),
            gender,
            status,
        }
    }

    fn ids(employees: &[&Employee]) -> Vec<i64> {
        employees.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let all: Vec<_> = (0..9)
            .map(|i| employee(i, &format!("E{i}"), Gender::ALL[(i % 3) as usize], i % 2 == 0))
            .collect();

        let result = view(&all, &ViewCriteria::default());
        assert_eq!(result.len(), all.len());
        assert_eq!(ids(&result), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let all = vec![employee(1, "Asha Rao", Gender::Female, true)];

        for search in ["asha", "ASHA", "Asha", "sha r", "RAO"] {
            let result = view(&all, &criteria(search, GenderFilter::All, StatusFilter::All));
            assert_eq!(ids(&result), [1], "search {search:?}");
        }

        let result = view(&all, &criteria("zzz", GenderFilter::All, StatusFilter::All));
        assert!(result.is_empty());
    }

    #[test]
    fn test_status_inactive() {
        let all = vec![
            employee(1, "On", Gender::Male, true),
            employee(2, "Off", Gender::Male, false),
        ];

        let result = view(&all, &criteria("", GenderFilter::All, StatusFilter::Inactive));
        assert_eq!(ids(&result), [2]);

        let result = view(&all, &criteria("", GenderFilter::All, StatusFilter::Active));
        assert_eq!(ids(&result), [1]);
    }

    #[test]
    fn test_gender_filter() {
        let all = vec![
            employee(1, "A", Gender::Male, true),
            employee(2, "B", Gender::Female, true),
            employee(3, "C", Gender::Other, true),
            employee(4, "D", Gender::Female, false),
        ];

        let result = view(
            &all,
            &criteria("", GenderFilter::Only(Gender::Female), StatusFilter::All),
        );
        assert_eq!(ids(&result), [2, 4]);
    }

    #[test]
    fn test_predicates_are_anded() {
        let all = vec![
            employee(1, "Priya Nair", Gender::Female, true),
            employee(2, "Priya Menon", Gender::Female, false),
            employee(3, "Priyank Shah", Gender::Male, true),
        ];

        let result = view(
            &all,
            &criteria("priya", GenderFilter::Only(Gender::Female), StatusFilter::Active),
        );
        assert_eq!(ids(&result), [1]);
        assert!(criteria("priya", GenderFilter::All, StatusFilter::Active).matches(&all[2]));
        assert!(!criteria("priya", GenderFilter::All, StatusFilter::Inactive).matches(&all[2]));
    }

    #[test]
    fn test_view_agrees_with_matches() {
        let all = vec![
            employee(1, "Asha Rao", Gender::Female, true),
            employee(2, "ASHOK Iyer", Gender::Male, false),
            employee(3, "Bo", Gender::Other, true),
        ];

        for c in [
            criteria("ASH", GenderFilter::All, StatusFilter::All),
            criteria("ash", GenderFilter::Only(Gender::Male), StatusFilter::Inactive),
            criteria("", GenderFilter::All, StatusFilter::Active),
            criteria("zzz", GenderFilter::All, StatusFilter::All),
        ] {
            let expected: Vec<i64> = all.iter().filter(|e| c.matches(e)).map(|e| e.id).collect();
            assert_eq!(ids(&view(&all, &c)), expected);
        }
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!("all".parse::<GenderFilter>(), Ok(GenderFilter::All));
        assert_eq!(
            "female".parse::<GenderFilter>(),
            Ok(GenderFilter::Only(Gender::Female))
        );
        assert!("robot".parse::<GenderFilter>().is_err());

        assert_eq!("Inactive".parse::<StatusFilter>(), Ok(StatusFilter::Inactive));
        assert_eq!("ALL".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert!("retired".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(GenderFilter::All.to_string(), "All");
        assert_eq!(GenderFilter::Only(Gender::Other).to_string(), "Other");
        assert_eq!(StatusFilter::Inactive.to_string(), "Inactive");
    }
}
