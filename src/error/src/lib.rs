//! Arena error handling
//!
//! Every failure the combat engine, the persistence layer or the services can
//! produce, plus the uniform response wrapper that carries them to callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of record a lookup failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Character,
    Skill,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Character => write!(f, "Character"),
            RecordKind::Skill => write!(f, "Skill"),
        }
    }
}

/// Errors raised while managing characters or resolving combat
#[derive(Debug, Error)]
pub enum ArenaError {
    /// A referenced identifier does not resolve to a record
    #[error("{kind} Not Found!")]
    NotFound { kind: RecordKind, id: u32 },

    /// The requested action is not possible for this combatant or roster
    #[error("{0}")]
    InvalidAction(String),

    /// Persistence failure
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

impl ArenaError {
    pub fn not_found(kind: RecordKind, id: u32) -> Self {
        ArenaError::NotFound { kind, id }
    }

    pub fn invalid_action(message: impl Into<String>) -> Self {
        ArenaError::InvalidAction(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ArenaError::Internal(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ArenaError::NotFound { .. })
    }

    pub fn is_invalid_action(&self) -> bool {
        matches!(self, ArenaError::InvalidAction(_))
    }
}

pub type Result<T, E = ArenaError> = std::result::Result<T, E>;

/// Turn an error into the message shown to the caller
pub fn handle_error(error: &ArenaError) -> String {
    match error {
        // anyhow chains read better with their causes inline
        ArenaError::Storage(e) => format!("Storage error: {:#}", e),
        _ => error.to_string(),
    }
}

/// Success flag plus message wrapper returned by every service operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    pub data: Option<T>,
    pub success: bool,
    pub message: String,
}

impl<T> ServiceResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            success: true,
            message: String::new(),
        }
    }

    /// Successful response that still carries a notice for the caller
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            success: false,
            message: message.into(),
        }
    }

    pub fn into_result(self) -> std::result::Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.message),
        }
    }
}
