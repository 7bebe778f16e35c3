//! The derived view: which employees the table shows.
//!
//! [`view`] is a pure function of the roster and a [`ViewCriteria`].
//! [`FilterState`] feeds it, debouncing the search box through a
//! [`Debouncer`] so the view is recomputed once per pause in typing rather
//! than on every keystroke.

mod debounce;
mod filter;
mod state;

pub use debounce::Debouncer;
pub use filter::{view, GenderFilter, StatusFilter, ViewCriteria};
pub use state::FilterState;
