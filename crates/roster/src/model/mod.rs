//! Domain model for roster.
//!
//! The [`Employee`] record is the only entity; [`region`] holds the fixed
//! list of names the state picker offers.

mod employee;
pub mod region;

pub use employee::{Employee, Gender};
pub use region::REGIONS;
