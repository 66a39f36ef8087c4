//! RPG arena backend: character management and turn-based fights over a
//! pluggable character store.

pub mod character_service;
pub mod config;
pub mod dto;
pub mod fight_service;
pub mod logging;

pub use character_service::CharacterService;
pub use config::ArenaConfig;
pub use fight_service::FightService;

use error::{Result, ServiceResponse, handle_error};
use tracing::warn;

/// Convert an operation's outcome into the uniform response, logging failures
pub(crate) fn respond<T>(operation: &str, result: Result<T>) -> ServiceResponse<T> {
    match result {
        Ok(data) => ServiceResponse::ok(data),
        Err(err) => {
            let message = handle_error(&err);
            warn!(operation, error = %message, "operation failed");
            ServiceResponse::failure(message)
        }
    }
}
