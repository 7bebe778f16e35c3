//! Filter bar state: what the operator typed versus what the view applies.

use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use super::debounce::Debouncer;
use super::filter::{GenderFilter, StatusFilter, ViewCriteria};

/// Filter controls plus the loading indicator.
///
/// The search box is debounced: [`FilterState::input`] changes on every
/// edit, while the search applied by [`FilterState::criteria`] only moves
/// once the input has been quiet for the configured delay. Gender and
/// status apply immediately.
#[derive(Debug)]
pub struct FilterState {
    input: String,
    debouncer: Debouncer<String>,
    settled: watch::Receiver<String>,
    gender: GenderFilter,
    status: StatusFilter,
    loading: bool,
}

impl FilterState {
    /// Create an empty filter bar with the given search delay.
    #[must_use]
    pub fn new(search_delay: Duration) -> Self {
        let (debouncer, settled) = Debouncer::new(search_delay, String::new());
        Self {
            input: String::new(),
            debouncer,
            settled,
            gender: GenderFilter::All,
            status: StatusFilter::All,
            loading: false,
        }
    }

    /// Record a search edit and restart the quiet period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.loading = true;
        self.debouncer.schedule(self.input.clone());
    }

    /// Change the gender selector; applies immediately.
    pub fn set_gender(&mut self, gender: GenderFilter) {
        self.gender = gender;
        // No quiet period, so the indicator clears as soon as it is raised.
        self.loading = false;
    }

    /// Change the status selector; applies immediately.
    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.loading = false;
    }

    /// Apply a settled search if one arrived. Returns `true` when the
    /// applied search moved.
    pub fn sync(&mut self) -> bool {
        if !self.settled.has_changed().unwrap_or(false) {
            return false;
        }
        let search = self.settled.borrow_and_update().clone();
        debug!(search = %search, "Search settled");
        self.loading = false;
        true
    }

    /// Wait for the next settled search and apply it.
    pub async fn settled(&mut self) {
        if self.settled.changed().await.is_ok() {
            self.settled.borrow_and_update();
            self.loading = false;
        }
    }

    /// Skip the rest of the quiet period and apply the current input.
    pub fn apply_now(&mut self) {
        if self.debouncer.flush() {
            self.sync();
        }
    }

    /// Apply a search that is still waiting out its quiet period, for when
    /// input ends. Returns `true` if the applied criteria may have moved.
    pub fn finish(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        self.debouncer.flush();
        self.sync();
        self.loading = false;
        true
    }

    /// A receiver that observes settled searches, for select loops.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.settled.clone()
    }

    /// The criteria the view should use right now.
    #[must_use]
    pub fn criteria(&self) -> ViewCriteria {
        ViewCriteria {
            search: self.settled.borrow().clone(),
            gender: self.gender,
            status: self.status,
        }
    }

    /// The search text as typed.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current gender selector.
    #[must_use]
    pub fn gender(&self) -> GenderFilter {
        self.gender
    }

    /// Current status selector.
    #[must_use]
    pub fn status(&self) -> StatusFilter {
        self.status
    }

    /// Whether the loading indicator is showing.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
