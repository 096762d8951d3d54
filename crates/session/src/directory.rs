//! In-memory mock user directory.
//!
//! This is a teaching stand-in for a real account store: credentials are
//! held as given and password reset does not verify ownership. Hardening it
//! is explicitly out of scope.

use serde::{Deserialize, Serialize};

use shopsmart_core::{DomainError, DomainResult};

/// Account role.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    username: String,
    password: String,
    email: String,
    role: Role,
}

impl UserAccount {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// The directory of known accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDirectory {
    accounts: Vec<UserAccount>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-populated with the demo accounts.
    pub fn seeded() -> Self {
        let mut directory = Self::new();
        for (username, password, email, role) in [
            ("admin", "admin123", "admin@example.com", Role::Admin),
            ("user1", "password123", "user1@example.com", Role::User),
        ] {
            // Seed rows are static and valid; register cannot fail here.
            let _ = directory.register_with_role(username, password, email, role);
        }
        directory
    }

    /// Register a new account with the default `user` role.
    ///
    /// No password-policy enforcement, by design. Duplicates conflict.
    pub fn register(&mut self, username: &str, password: &str, email: &str) -> DomainResult<()> {
        self.register_with_role(username, password, email, Role::User)
    }

    fn register_with_role(
        &mut self,
        username: &str,
        password: &str,
        email: &str,
        role: Role,
    ) -> DomainResult<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DomainError::validation("username cannot be empty"));
        }
        if password.is_empty() {
            return Err(DomainError::validation("password cannot be empty"));
        }
        if email.trim().is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }
        if self.get(username).is_some() {
            return Err(DomainError::conflict("username already exists"));
        }

        self.accounts.push(UserAccount {
            username: username.to_string(),
            password: password.to_string(),
            email: email.trim().to_string(),
            role,
        });
        Ok(())
    }

    pub fn get(&self, username: &str) -> Option<&UserAccount> {
        self.accounts.iter().find(|a| a.username == username)
    }

    /// Check credentials; `None` on unknown user or wrong password.
    pub fn verify(&self, username: &str, password: &str) -> Option<&UserAccount> {
        if username.is_empty() || password.is_empty() {
            return None;
        }
        self.accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
    }

    /// Overwrite a user's password. There is no ownership check here; the
    /// surrounding flow is a deliberately weak demo flow.
    pub fn reset_password(&mut self, username: &str, new_password: &str) -> DomainResult<()> {
        if new_password.is_empty() {
            return Err(DomainError::validation("password cannot be empty"));
        }
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.username == username)
            .ok_or(DomainError::NotFound)?;
        account.password = new_password.to_string();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
