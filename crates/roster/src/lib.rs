//! `roster` - A local-first employee roster manager
//!
//! This library provides the record model, key-value persistence, the derived
//! filtered view with its debounced search, the session gate and the
//! presentation helpers behind the `roster` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod model;
pub mod present;
pub mod roster;
pub mod session;
pub mod storage;
pub mod view;

pub use config::Config;
pub use error::{Error, Result};
pub use form::EmployeeForm;
pub use logging::init_logging;
pub use model::{Employee, Gender};
pub use roster::Roster;
pub use session::SessionGate;
pub use storage::{JsonStore, KeyValueStore, MemoryStore, SqliteStore, StoreStats};
pub use view::{FilterState, ViewCriteria};
