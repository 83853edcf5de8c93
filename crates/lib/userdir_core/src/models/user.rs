//! User record.

use serde::{Deserialize, Serialize};

/// Role given to every user created through the directory.
pub const DEFAULT_ROLE: &str = "user";

/// Domain used when deriving a user's email from their name.
pub const EMAIL_DOMAIN: &str = "example.com";

/// Directory user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub is_married: bool,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

/// Derive the email address for a user name: `lowercase(name)@example.com`.
pub fn email_for(name: &str) -> String {
    format!("{}@{EMAIL_DOMAIN}", name.to_lowercase())
}
