// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for pitch conversion and scale construction.

use thiserror::Error;

use crate::music::notation::NotationSystem;

/// Errors that can occur while parsing, formatting or building pitches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("unknown spelling '{spelling}' in {system} notation")]
    UnknownSpelling {
        spelling: String,
        system: NotationSystem,
    },
    #[error("{system} notation is not implemented")]
    UnsupportedSystem { system: NotationSystem },
    #[error("unknown scale pattern '{name}'")]
    UnknownScalePattern { name: String },
    #[error("invalid numeric pitch {value}")]
    InvalidNumber { value: String },
    #[error("pitch {value} is outside the representable range")]
    OutOfRange { value: i64 },
    #[error("invalid interval pattern '{name}': {message}")]
    InvalidIntervals { name: String, message: String },
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, TheoryError>;
