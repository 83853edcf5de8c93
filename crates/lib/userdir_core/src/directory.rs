//! In-memory user directory.
//!
//! Users are kept in insertion order with hash indexes by id, name and email.
//! The directory is append-only: there is no update or delete.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::user::{DEFAULT_ROLE, User, email_for};

/// Directory shared between request handlers.
///
/// `create` must run under the write lock so the name check and the append
/// happen atomically.
pub type SharedDirectory = Arc<RwLock<Directory>>;

/// Directory errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("User with name {0} already exists")]
    DuplicateName(String),
}

/// Ordered user store with indexed lookups.
#[derive(Debug, Default)]
pub struct Directory {
    users: Vec<User>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    by_email: HashMap<String, usize>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding the three seed users.
    pub fn seeded() -> Self {
        let mut directory = Self::new();
        for (name, age, is_married, role) in [
            ("Alice", 30, false, "admin"),
            ("Bob", 25, true, DEFAULT_ROLE),
            ("Charlie", 35, true, DEFAULT_ROLE),
        ] {
            directory.push(User {
                id: directory.next_id(),
                name: name.to_string(),
                age,
                is_married,
                email: email_for(name),
                role: role.to_string(),
            });
        }
        directory
    }

    /// Wrap the directory for sharing across requests.
    pub fn into_shared(self) -> SharedDirectory {
        Arc::new(RwLock::new(self))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All users in insertion order.
    pub fn list_all(&self) -> &[User] {
        &self.users
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.by_id.get(id).map(|&i| &self.users[i])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        self.by_name.get(name).map(|&i| &self.users[i])
    }

    /// Look up a user by email. When several users share an email the
    /// earliest inserted one wins.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.by_email.get(email).map(|&i| &self.users[i])
    }

    /// Append a new user with a sequential id, derived email and the default
    /// role. Fails without touching the store when the name is taken.
    pub fn create(&mut self, name: &str, age: i32, is_married: bool) -> Result<User, DirectoryError> {
        if self.find_by_name(name).is_some() {
            return Err(DirectoryError::DuplicateName(name.to_string()));
        }
        let user = User {
            id: self.next_id(),
            name: name.to_string(),
            age,
            is_married,
            email: email_for(name),
            role: DEFAULT_ROLE.to_string(),
        };
        self.push(user.clone());
        info!(user_id = %user.id, name = %user.name, "created user");
        Ok(user)
    }

    fn next_id(&self) -> String {
        (self.users.len() + 1).to_string()
    }

    fn push(&mut self, user: User) {
        let index = self.users.len();
        self.by_id.insert(user.id.clone(), index);
        self.by_name.insert(user.name.clone(), index);
        self.by_email.entry(user.email.clone()).or_insert(index);
        self.users.push(user);
    }
}
