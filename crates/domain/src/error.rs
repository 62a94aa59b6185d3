// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::RequestStatus;

/// Errors that can occur while building or transitioning domain values.
///
/// Rule failures on candidate requests are not errors; they are reported
/// through [`crate::RuleViolation`] and [`crate::ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date range ends before it starts.
    InvertedDateRange {
        /// The range start.
        start: time::Date,
        /// The range end.
        end: time::Date,
    },
    /// Role label is not recognised.
    InvalidRole(String),
    /// Workday label is not recognised.
    InvalidWorkday(String),
    /// Request type label is not recognised.
    InvalidRequestType(String),
    /// Request status label is not recognised.
    InvalidRequestStatus(String),
    /// A review tried to move a request into a status it cannot reach.
    InvalidStatusTransition {
        /// The request identifier.
        request_id: String,
        /// The current status.
        from: RequestStatus,
        /// The requested status.
        to: RequestStatus,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedDateRange { start, end } => {
                write!(f, "Date range ends on {end}, before it starts on {start}")
            }
            Self::InvalidRole(value) => {
                write!(f, "Invalid role: '{value}'. Must be 'worker' or 'hr'")
            }
            Self::InvalidWorkday(value) => write!(
                f,
                "Invalid workday: '{value}'. Must be 'Completa', 'Parcial' or 'Reducida'"
            ),
            Self::InvalidRequestType(value) => write!(f, "Invalid request type: '{value}'"),
            Self::InvalidRequestStatus(value) => write!(f, "Invalid request status: '{value}'"),
            Self::InvalidStatusTransition {
                request_id,
                from,
                to,
            } => {
                write!(
                    f,
                    "Request '{request_id}' cannot move from {from} to {to}"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
