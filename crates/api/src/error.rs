// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use std::path::PathBuf;
use thiserror::Error;
use turnos_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// Rejected validations are not errors; they are returned as
/// `valid: false` responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvertedDateRange { start, end } => ApiError::InvalidInput {
            field: String::from("endDate"),
            message: format!("End date {end} is before start date {start}"),
        },
        DomainError::InvalidRole(value) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown role '{value}'"),
        },
        DomainError::InvalidWorkday(value) => ApiError::InvalidInput {
            field: String::from("workday"),
            message: format!("Unknown workday '{value}'"),
        },
        DomainError::InvalidRequestType(value) => ApiError::InvalidInput {
            field: String::from("type"),
            message: format!("Unknown request type '{value}'"),
        },
        DomainError::InvalidRequestStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown request status '{value}'"),
        },
        DomainError::InvalidStatusTransition {
            request_id,
            from,
            to,
        } => ApiError::DomainRuleViolation {
            rule: String::from("status_transition"),
            message: format!("Request '{request_id}' cannot move from {from} to {to}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
    }
}

/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("Failed to read dataset {}: {source}", .path.display())]
    Io {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The dataset is not valid JSON for the expected shape.
    #[error("Malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record was well-formed JSON but failed conversion.
    #[error("Invalid dataset record: {0}")]
    Invalid(#[from] ApiError),
}
