// ABOUTME: Application error types for the prescription calculator
// ABOUTME: Thiserror-derived AppError enum with constructor helpers and AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Application error types.
//!
//! The calculation pipeline is total over its clinical domain, so the only
//! runtime failure class is degenerate or out-of-range input rejected at the
//! pipeline boundary before any formula runs. There is no retry concept and
//! no fatal error class.

use thiserror::Error;

/// Result type alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

/// Application errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Input fails a boundary precondition (non-positive, non-finite, or unparseable)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numeric input outside the range the collecting interface supports
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),
}

impl AppError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a value-out-of-range error
    #[must_use]
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::ValueOutOfRange(message.into())
    }
}
