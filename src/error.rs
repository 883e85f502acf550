//! Error types shared by every pattern module.

use std::io;
use thiserror::Error;

/// Everything that can go wrong while exercising a pattern.
///
/// Most operations are total. The failures are a context that was never
/// given its collaborator, a user id from the wrong chat, an unknown catalog
/// section, or a broken output sink.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("{context} has not been initialized")]
    NotInitialized { context: &'static str },

    #[error("user is not registered in this chat")]
    UnknownUser,

    #[error("unknown demo section '{0}'")]
    UnknownSection(String),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn not_initialized(context: &'static str) -> Self {
        Self::NotInitialized { context }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
