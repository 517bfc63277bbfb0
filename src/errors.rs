//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`SquashError`] covers every configuration failure:
//! - Non-positive or mis-ordered court dimensions
//! - Floor markings that do not fit inside the court
//! - Invalid ball / camera settings
//! - JSON decoding of [`CourtSettings`](crate::settings::CourtSettings)
//!
//! Runtime animation never fails once its inputs are valid, so only the
//! construction paths return [`Result<T>`].
//!
//! ```rust,ignore
//! use squash_court::errors::Result;
//! use squash_court::CourtDimensions;
//!
//! fn check() -> Result<()> {
//!     CourtDimensions::regulation().validate()
//! }
//! ```

use thiserror::Error;

/// The main error type for court construction and configuration.
#[derive(Error, Debug)]
pub enum SquashError {
    // ========================================================================
    // Court Dimension Errors
    // ========================================================================
    /// A length that must be strictly positive is zero, negative or NaN.
    #[error("Court dimension `{field}` must be positive (got {value})")]
    NonPositiveDimension {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    /// Front-wall marking heights are not strictly increasing.
    #[error(
        "Front-wall markings out of order: tin {tin} < service line {service_line} < out line {out_line} <= height {height} must hold"
    )]
    MarkingHeightOrder {
        tin: f32,
        service_line: f32,
        out_line: f32,
        height: f32,
    },

    /// A floor or wall marking extends past the court boundary.
    #[error("Court marking `{field}` ({value}) does not fit within {limit}")]
    MarkingOutOfCourt {
        field: &'static str,
        value: f32,
        limit: f32,
    },

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// A non-dimension setting is out of its valid range.
    #[error("Invalid setting `{field}`: {reason}")]
    InvalidSetting {
        field: &'static str,
        reason: String,
    },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, SquashError>`.
pub type Result<T> = std::result::Result<T, SquashError>;
