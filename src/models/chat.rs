use chrono::Utc;
use serde::{ Serialize, Deserialize };
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Bot => write!(f, "bot"),
        }
    }
}

/// One conversation entry. Fields are private so a turn cannot change after
/// it has been created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Turn {
    role: Role,
    text: String,
    created_at: i64,
}

impl Turn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            created_at: Utc::now().timestamp(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Role::Bot, text)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Unix seconds. Informational only; ordering is insertion order.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }
}
