//! Session lifecycle.
//!
//! One explicit struct with a clear lifecycle replaces free-floating
//! "current user" and "auth token" globals: a [`Session`] is created on
//! login success and dropped on logout or login failure. The engine and
//! catalog never see any of this.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopsmart_core::{DomainError, DomainResult};

use crate::directory::{Role, UserDirectory};

/// Opaque bearer token handed out on login.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(Uuid);

impl AuthToken {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AuthToken {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for AuthToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    username: String,
    role: Role,
    token: AuthToken,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn token(&self) -> AuthToken {
        self.token
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// Owns the directory and at most one current session.
#[derive(Debug, Clone)]
pub struct SessionManager {
    directory: UserDirectory,
    current: Option<Session>,
}

impl SessionManager {
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            directory,
            current: None,
        }
    }

    /// Manager backed by the demo account directory.
    pub fn seeded() -> Self {
        Self::new(UserDirectory::seeded())
    }

    /// Authenticate and start a session, replacing any existing one.
    ///
    /// Any prior session is cleared before the attempt, so a failed login
    /// never leaves a stale identity behind.
    pub fn login(&mut self, username: &str, password: &str) -> DomainResult<&Session> {
        self.current = None;

        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::validation(
                "both username and password are required",
            ));
        }

        let Some(account) = self.directory.verify(username, password) else {
            tracing::warn!(user = username, "login rejected");
            return Err(DomainError::Unauthorized);
        };

        let session = Session {
            username: account.username().to_string(),
            role: account.role(),
            token: AuthToken::new(),
            started_at: Utc::now(),
        };
        tracing::info!(user = session.username.as_str(), "login succeeded");
        Ok(self.current.insert(session))
    }

    /// End the current session, if any.
    pub fn logout(&mut self) -> Option<Session> {
        let session = self.current.take();
        if let Some(ref s) = session {
            tracing::info!(user = s.username(), "logged out");
        }
        session
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|s| s.role() == Role::Admin)
    }

    /// The header line the storefront shows next to the login button.
    pub fn status_line(&self) -> String {
        match &self.current {
            Some(session) => format!("Welcome, {}", session.username()),
            None => "Not logged in".to_string(),
        }
    }

    /// Register a new account through the directory.
    pub fn register(&mut self, username: &str, password: &str, email: &str) -> DomainResult<()> {
        self.directory.register(username, password, email)?;
        tracing::info!(user = username, "account registered");
        Ok(())
    }

    /// Reset a password through the directory.
    pub fn reset_password(&mut self, username: &str, new_password: &str) -> DomainResult<()> {
        self.directory.reset_password(username, new_password)?;
        tracing::info!(user = username, "password reset");
        Ok(())
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }
}
