use crate::error::{PitchForgeError, Result};
use crate::types::Role;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// An account in the mock directory. Ids and emails are used verbatim as
/// opaque identifiers by the rest of the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

/// In-memory identity provider. Authentication is a fixed mock password
/// check; there is no session or token handling here.
#[derive(Debug)]
pub struct Directory {
    users: Vec<User>,
    password: String,
}

impl Directory {
    pub fn new(users: Vec<User>, password: impl Into<String>) -> Self {
        Self {
            users,
            password: password.into(),
        }
    }

    /// Directory seeded with one account per role.
    pub fn with_seed_users() -> Self {
        let users = vec![
            User {
                id: "user-1".to_string(),
                email: "customer@example.com".to_string(),
                name: "Casey Customer".to_string(),
                role: Role::Customer,
            },
            User {
                id: "user-2".to_string(),
                email: "manager@example.com".to_string(),
                name: "Morgan Manager".to_string(),
                role: Role::TeamManager,
            },
            User {
                id: "user-3".to_string(),
                email: "member@example.com".to_string(),
                name: "Mika Member".to_string(),
                role: Role::TeamMember,
            },
        ];
        Self::new(users, "password")
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<&User> {
        let user = self
            .users
            .iter()
            .find(|u| u.email == email)
            .ok_or_else(|| PitchForgeError::UserNotFound(email.to_string()))?;
        if password != self.password {
            return Err(PitchForgeError::InvalidCredentials(email.to_string()));
        }
        Ok(user)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn list_by_role(&self, role: Role) -> Vec<&User> {
        self.users.iter().filter(|u| u.role == role).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
