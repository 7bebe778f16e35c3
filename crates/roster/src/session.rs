//! Session gate for dashboard commands.
//!
//! Two keys in the key-value store, `authUser` and `token`, mark a session as
//! open. Logging in only checks that an email and a password were supplied;
//! there is no credential store behind it. This gates navigation, it is not
//! a security boundary.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::storage::{JsonStore, KeyValueStore};

/// Key holding the logged-in user.
pub const AUTH_USER_KEY: &str = "authUser";

/// Key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Message shown when either login field is blank.
pub const MISSING_CREDENTIALS: &str = "Email and password are required";

/// Views the gate chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The login view.
    Login,
    /// The dashboard.
    Dashboard,
}

/// The user recorded at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Email entered on the login form.
    pub email: String,
}

/// Login/logout flags over an injected store.
#[derive(Debug)]
pub struct SessionGate<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: KeyValueStore + ?Sized> SessionGate<'s, S> {
    /// Create a gate reading and writing `store`.
    #[must_use]
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Open a session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LoginRejected`] if either field is blank, or a
    /// storage error if the flags cannot be written.
    pub fn login(&self, email: &str, password: &str) -> Result<AuthUser> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(Error::login_rejected(MISSING_CREDENTIALS));
        }

        let user = AuthUser {
            email: email.to_string(),
        };
        let token = issue_token(email);
        self.store.set(AUTH_USER_KEY, &user)?;
        self.store.set(TOKEN_KEY, &token)?;

        info!(email, "Logged in");
        Ok(user)
    }

    /// Close the session by removing both flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(AUTH_USER_KEY)?;
        self.store.remove(TOKEN_KEY)?;
        info!("Logged out");
        Ok(())
    }

    /// Whether both flags are present and truthy.
    ///
    /// Unreadable flags count as absent.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.flag_is_set(AUTH_USER_KEY) && self.flag_is_set(TOKEN_KEY)
    }

    /// The logged-in user, if the stored value has the expected shape.
    #[must_use]
    pub fn current_user(&self) -> Option<AuthUser> {
        if !self.is_authenticated() {
            return None;
        }
        self.store.get(AUTH_USER_KEY).ok().flatten()
    }

    /// Resolve where a request for `requested` actually lands.
    #[must_use]
    pub fn route(&self, requested: Route) -> Route {
        match requested {
            Route::Dashboard if self.is_authenticated() => Route::Dashboard,
            Route::Dashboard => {
                debug!("Redirecting to login");
                Route::Login
            }
            Route::Login => Route::Login,
        }
    }

    /// Require an open session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoggedIn`] when the gate is closed.
    pub fn require(&self) -> Result<()> {
        match self.route(Route::Dashboard) {
            Route::Dashboard => Ok(()),
            Route::Login => Err(Error::NotLoggedIn),
        }
    }

    fn flag_is_set(&self, key: &str) -> bool {
        match self.store.get_raw(key) {
            Ok(Some(raw)) => is_truthy(&raw),
            _ => false,
        }
    }
}

/// Whether a stored value counts as set.
///
/// JSON `null`, `false`, `0` and `""` are falsy; text that is not JSON
/// counts as set when non-empty.
fn is_truthy(raw: &str) -> bool {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Null) => false,
        Ok(Value::Bool(b)) => b,
        Ok(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Ok(Value::String(s)) => !s.is_empty(),
        Ok(Value::Array(_) | Value::Object(_)) => true,
        Err(_) => !raw.is_empty(),
    }
}

fn issue_token(email: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(email.as_bytes());
    hasher.update(&Utc::now().timestamp_nanos_opt().unwrap_or_default().to_le_bytes());
    hasher.finalize().to_hex().to_string()
}
