//! User Profile Data Structures
//!
//! Profiles come from the user service and are read-only to the
//! messaging client.

use serde::{Deserialize, Serialize};

/// A user as returned by the user service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Stable user id
    pub id: String,
    /// Name shown in the roster and chat header
    pub display_name: String,
    /// Optional avatar URL
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar_url: None,
        }
    }

    /// Get avatar initial (first letter of the display name)
    pub fn avatar_initial(&self) -> char {
        self.display_name
            .chars()
            .next()
            .unwrap_or('?')
            .to_ascii_uppercase()
    }
}

/// Response shape of `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    pub users: Vec<UserProfile>,
}
