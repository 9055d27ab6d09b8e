//! User domain model and request payloads

use serde::{Deserialize, Serialize};

/// A persisted user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique numeric identifier
    pub id: i64,
    /// Display name
    pub name: String,
}

impl User {
    /// Synthetic user created by the bulk loader for a given identifier
    pub fn synthetic(id: i64) -> Self {
        Self {
            id,
            name: format!("user{}", id),
        }
    }
}

/// Payload for creating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Explicit identifier; assigned by the database when absent
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name
    pub name: String,
}

/// Payload for updating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name
    pub name: String,
}

/// Longest accepted user name, matching the `users.name` column
pub const MAX_NAME_LENGTH: usize = 255;

/// Validate a user name from a create or update payload
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!("name cannot exceed {} characters", MAX_NAME_LENGTH));
    }
    Ok(())
}
