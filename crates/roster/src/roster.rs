//! The employee collection store.
//!
//! [`Roster`] owns the ordered list of employees for the session. It borrows
//! the key-value store it persists to, so every consumer receives the same
//! explicitly injected backend instead of reaching for shared globals.
//!
//! Every mutator follows the same two steps: apply the change in memory,
//! then [`Roster::flush`]. The flush is synchronous and always writes the
//! whole collection.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::model::Employee;
use crate::storage::{JsonStore, KeyValueStore};

/// Key under which the collection is persisted.
pub const EMPLOYEES_KEY: &str = "employees";

/// Ordered, persisted collection of employees.
#[derive(Debug)]
pub struct Roster<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
    employees: Vec<Employee>,
}

impl<'s, S: KeyValueStore + ?Sized> Roster<'s, S> {
    /// Create an empty roster bound to `store`. Call [`Roster::hydrate`]
    /// to load persisted records.
    #[must_use]
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            employees: Vec::new(),
        }
    }

    /// Create a roster and hydrate it from `store` in one step.
    #[must_use]
    pub fn load(store: &'s S) -> Self {
        let mut roster = Self::new(store);
        roster.hydrate();
        roster
    }

    /// Replace in-memory state with the persisted collection.
    ///
    /// An absent key starts an empty roster. A value that cannot be read or
    /// decoded also starts empty; the failure is logged, not returned.
    pub fn hydrate(&mut self) {
        self.employees = match self.store.get::<Vec<Employee>>(EMPLOYEES_KEY) {
            Ok(Some(employees)) => {
                debug!(count = employees.len(), "Hydrated roster");
                employees
            }
            Ok(None) => {
                debug!("No persisted roster, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!("Discarding unreadable roster data: {e}");
                Vec::new()
            }
        };
    }

    /// Write the full collection to the store, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be encoded or written.
    pub fn flush(&self) -> Result<()> {
        self.store.set(EMPLOYEES_KEY, &self.employees)?;
        debug!(count = self.employees.len(), "Flushed roster");
        Ok(())
    }

    /// Append `employee` to the end of the collection and flush.
    ///
    /// No validation or de-duplication happens here; that belongs to the
    /// form that built the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub fn add(&mut self, employee: Employee) -> Result<()> {
        info!(id = employee.id, "Adding employee");
        self.employees.push(employee);
        self.flush()
    }

    /// Replace the first record whose id matches `employee.id`, then flush.
    ///
    /// Returns `false` when no record matched; the collection is unchanged
    /// in that case but is still flushed.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub fn update(&mut self, employee: Employee) -> Result<bool> {
        let id = employee.id;
        let matched = match self.employees.iter_mut().find(|e| e.id == id) {
            Some(slot) => {
                *slot = employee;
                true
            }
            None => false,
        };
        if matched {
            info!(id, "Updated employee");
        } else {
            debug!(id, "Update ignored, no such employee");
        }
        self.flush()?;
        Ok(matched)
    }

    /// Remove every record with the given id, then flush.
    ///
    /// Returns how many records were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the flush fails.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let before = self.employees.len();
        self.employees.retain(|e| e.id != id);
        let removed = before - self.employees.len();
        if removed > 0 {
            info!(id, "Deleted employee");
        } else {
            debug!(id, "Delete ignored, no such employee");
        }
        self.flush()?;
        Ok(removed)
    }

    /// Allocate an id for a new record.
    ///
    /// Ids come from the wall clock in milliseconds, bumped past the largest
    /// existing id when the clock has not moved on.
    #[must_use]
    pub fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.employees.iter().map(|e| e.id).max() {
            Some(max) if max >= now => max + 1,
            _ => now,
        }
    }

    /// All records in collection order.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the roster holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::form::EmployeeForm;
    use crate::model::Gender;
    use crate::storage::{MemoryStore, SqliteStore};

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

    fn persisted(store: &MemoryStore) -> Vec<Employee> {
        store.get(EMPLOYEES_KEY).unwrap().unwrap()
    }

    #[test]
    fn test_hydrate_absent_key_starts_empty() {
        let store = MemoryStore::new();
        let roster = Roster::load(&store);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_hydrate_malformed_starts_empty() {
        crate::logging::init_test_logging();
        let store = MemoryStore::new();
        store.set_raw(EMPLOYEES_KEY, "[{\"id\": oops").unwrap();

        let roster = Roster::load(&store);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_hydrate_wrong_shape_starts_empty() {
        let store = MemoryStore::new();
        store.set_raw(EMPLOYEES_KEY, r#"{"not":"a list"}"#).unwrap();

        let roster = Roster::load(&store);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_add_appends_and_flushes() {
        let store = MemoryStore::new();
        let mut roster = Roster::load(&store);
        let mut seen = HashSet::new();

        for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
            let id = roster.next_id();
            assert!(seen.insert(id), "id {id} reused");
            roster.add(employee(id, name, Gender::Other, true)).unwrap();
            assert_eq!(roster.len(), i + 1);
            assert_eq!(persisted(&store).len(), i + 1);
        }

        let names: Vec<_> = roster.employees().iter().map(|e| e.full_name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_next_id_bumps_past_future_ids() {
        let store = MemoryStore::new();
        let mut roster = Roster::new(&store);
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        roster.add(employee(far_future, "A", Gender::Male, true)).unwrap();

        assert_eq!(roster.next_id(), far_future + 1);
    }

    #[test]
    fn test_update_replaces_matching_record() {
        let store = MemoryStore::new();
        let mut roster = Roster::new(&store);
        roster.add(employee(1, "A", Gender::Male, true)).unwrap();
        roster.add(employee(2, "B", Gender::Female, true)).unwrap();

        let mut changed = employee(2, "Bea", Gender::Other, false);
        changed.state = Some("Goa".to_string());
        assert!(roster.update(changed.clone()).unwrap());

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(2), Some(&changed));
        assert_eq!(roster.employees()[1], changed);
        assert_eq!(persisted(&store)[1], changed);
    }

    #[test]
    fn test_update_unmatched_is_noop() {
        let store = MemoryStore::new();
        let mut roster = Roster::new(&store);
        roster.add(employee(1, "A", Gender::Male, true)).unwrap();
        let before = roster.employees().to_vec();

        assert!(!roster.update(employee(99, "Z", Gender::Male, true)).unwrap());
        assert_eq!(roster.employees(), before.as_slice());
        assert_eq!(persisted(&store), before);
    }

    #[test]
    fn test_update_can_clear_image() {
        let store = MemoryStore::new();
        let mut roster = Roster::new(&store);
        let mut with_image = employee(1, "A", Gender::Male, true);
        with_image.image = Some("data:image/png;base64,AAAA".to_string());
        roster.add(with_image).unwrap();

        roster.update(employee(1, "A", Gender::Male, true)).unwrap();
        assert!(roster.get(1).unwrap().image.is_none());
        let raw = store.get_raw(EMPLOYEES_KEY).unwrap().unwrap();
        assert!(!raw.contains("image"));
    }

    #[test]
    fn test_delete_removes_only_matching() {
        let store = MemoryStore::new();
        let mut roster = Roster::new(&store);
        for id in 1..=4 {
            roster.add(employee(id, &format!("E{id}"), Gender::Male, true)).unwrap();
        }

        assert_eq!(roster.delete(2).unwrap(), 1);
        let ids: Vec<_> = roster.employees().iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 3, 4]);
        assert_eq!(persisted(&store).len(), 3);
    }

    #[test]
    fn test_delete_removes_all_duplicates() {
        let store = MemoryStore::new();
        let mut roster = Roster::new(&store);
        roster.add(employee(7, "A", Gender::Male, true)).unwrap();
        roster.add(employee(8, "B", Gender::Male, true)).unwrap();
        roster.add(employee(7, "C", Gender::Male, true)).unwrap();

        assert_eq!(roster.delete(7).unwrap(), 2);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.employees()[0].full_name, "B");
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let store = MemoryStore::new();
        let mut roster = Roster::new(&store);
        roster.add(employee(1, "A", Gender::Male, true)).unwrap();

        assert_eq!(roster.delete(42).unwrap(), 0);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_flush_then_hydrate_roundtrip() {
        let store = MemoryStore::new();
        let mut roster = Roster::new(&store);
        let mut pictured = employee(3, "C", Gender::Other, false);
        pictured.image = Some("data:image/jpeg;base64,/9j/".to_string());
        roster.add(employee(1, "A", Gender::Male, true)).unwrap();
        roster.add(employee(2, "B", Gender::Female, true)).unwrap();
        roster.add(pictured).unwrap();

        let reloaded = Roster::load(&store);
        assert_eq!(reloaded.employees(), roster.employees());
    }

    #[test]
    fn test_roundtrip_through_sqlite() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut roster = Roster::new(&store);
        roster.add(employee(1, "A", Gender::Male, true)).unwrap();
        roster.add(employee(2, "B", Gender::Female, false)).unwrap();

        let reloaded = Roster::load(&store);
        assert_eq!(reloaded.employees(), roster.employees());
    }

    #[test]
    fn test_future_dob_blocked_by_form_but_not_store() {
        let today = Utc::now().date_naive();
        let tomorrow = today + Duration::days(1);

        let form = EmployeeForm {
            full_name: "Future Kid".to_string(),
            gender: Some(Gender::Female),
            dob: Some(tomorrow),
            state: Some("Kerala".to_string()),
            ..EmployeeForm::default()
        };
        assert!(!form.can_submit(today));
        assert!(form.submit_new(1, today).is_none());

        let store = MemoryStore::new();
        let mut roster = Roster::new(&store);
        let mut direct = employee(1, "Future Kid", Gender::Female, true);
        direct.dob = tomorrow;
        roster.add(direct).unwrap();
        assert_eq!(roster.len(), 1);
    }
}
