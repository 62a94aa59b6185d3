// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary layer between JSON callers and the leave engine.
//!
//! Callers exchange camelCase DTOs with ISO 8601 date strings. This crate
//! converts them into domain types, keeps the in-memory [`Dataset`], and
//! exposes the validation, suggestion, balance, review and assistant
//! operations.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod dataset;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use turnos_assistant::AssistantReport;

pub use dataset::Dataset;
pub use error::{ApiError, DatasetError, translate_domain_error};
pub use handlers::{
    compute_balance, review_request, run_assistant, suggest_alternatives, validate_personal_day,
    validate_shift_change, validate_vacation,
};
pub use request_response::{
    BalanceRecord, BalanceResponse, DatasetRecord, DateRangeRecord, RequestRecord,
    ReviewRequestRequest, ReviewResponse, SuggestAlternativesRequest, SuggestionsResponse,
    UserRecord, ValidatePersonalDayRequest, ValidateShiftChangeRequest, ValidateVacationRequest,
    ValidationResponse, parse_date, parse_date_range,
};
