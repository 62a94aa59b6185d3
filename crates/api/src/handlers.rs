// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API operations over a [`Dataset`].
//!
//! Each operation parses its DTO, resolves the users it names, and calls
//! into the domain or assistant crate. Rejected validations are returned
//! as `valid: false` responses, never as errors.

use crate::dataset::Dataset;
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    BalanceResponse, DateRangeRecord, RequestRecord, ReviewRequestRequest, ReviewResponse,
    SuggestAlternativesRequest, SuggestionsResponse, ValidatePersonalDayRequest,
    ValidateShiftChangeRequest, ValidateVacationRequest, ValidationResponse, parse_date,
    parse_date_range,
};
use time::{Date, OffsetDateTime};
use tracing::{debug, info};
use turnos_assistant::{AssistantReport, analyze_as_of};
use turnos_domain::{
    Balance, DateRange, RemainingBalance, Request, RequestStatus, User, ValidationResult,
    calculate_available_days, calculate_remaining_balance, suggest_alternative_dates_as_of,
    validate_personal_day_request, validate_shift_change_request, validate_vacation_request,
};

/// Validates a vacation request against the dataset.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for malformed or inverted dates and
/// `ApiError::ResourceNotFound` for an unknown user.
pub fn validate_vacation(
    dataset: &Dataset,
    request: &ValidateVacationRequest,
) -> Result<ValidationResponse, ApiError> {
    let (start, end): (Date, Date) = parse_date_range(&request.start_date, &request.end_date)?;
    let user: &User = dataset.find_user(&request.user_id)?;

    let result: ValidationResult = validate_vacation_request(start, end, user, dataset.requests());
    debug!(
        user_id = %user.id,
        %start,
        %end,
        valid = result.valid,
        "Validated vacation request"
    );
    Ok(result.into())
}

/// Validates a personal day against the dataset.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a malformed date and
/// `ApiError::ResourceNotFound` for an unknown user.
pub fn validate_personal_day(
    dataset: &Dataset,
    request: &ValidatePersonalDayRequest,
) -> Result<ValidationResponse, ApiError> {
    let date: Date = parse_date("date", &request.date)?;
    let user: &User = dataset.find_user(&request.user_id)?;

    let result: ValidationResult =
        validate_personal_day_request(date, user, dataset.requests(), dataset.users());
    debug!(
        user_id = %user.id,
        %date,
        valid = result.valid,
        "Validated personal day request"
    );
    Ok(result.into())
}

/// Validates a shift change against the dataset.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for malformed dates and
/// `ApiError::ResourceNotFound` if either user is unknown.
pub fn validate_shift_change(
    dataset: &Dataset,
    request: &ValidateShiftChangeRequest,
) -> Result<ValidationResponse, ApiError> {
    let start: Date = parse_date("startDate", &request.start_date)?;
    let return_date: Date = parse_date("returnDate", &request.return_date)?;
    let user: &User = dataset.find_user(&request.user_id)?;
    let replacement: &User = dataset.find_user(&request.replacement_user_id)?;

    let result: ValidationResult =
        validate_shift_change_request(start, return_date, user, replacement, dataset.requests());
    debug!(
        user_id = %user.id,
        replacement_user_id = %replacement.id,
        %start,
        %return_date,
        valid = result.valid,
        "Validated shift change request"
    );
    Ok(result.into())
}

/// Suggests alternative vacation ranges as seen on `today`.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for malformed or inverted dates and
/// `ApiError::ResourceNotFound` for an unknown user.
pub fn suggest_alternatives(
    dataset: &Dataset,
    request: &SuggestAlternativesRequest,
    today: Date,
) -> Result<SuggestionsResponse, ApiError> {
    let (start, end): (Date, Date) = parse_date_range(&request.start_date, &request.end_date)?;
    let user: &User = dataset.find_user(&request.user_id)?;

    let ranges: Vec<DateRange> =
        suggest_alternative_dates_as_of(start, end, user, dataset.requests(), today);
    debug!(user_id = %user.id, suggestions = ranges.len(), "Suggested alternative dates");

    Ok(SuggestionsResponse {
        user_id: user.id.clone(),
        suggestions: ranges
            .iter()
            .map(|range| DateRangeRecord {
                start_date: range.start().to_string(),
                end_date: range.end().to_string(),
            })
            .collect(),
    })
}

/// Runs the assistant over the whole dataset as seen on `today`.
#[must_use]
pub fn run_assistant(dataset: &Dataset, today: Date) -> AssistantReport {
    analyze_as_of(
        dataset.requests(),
        dataset.users(),
        dataset.balances(),
        today,
    )
}

/// Computes a user's entitlement and remaining days for `year`.
///
/// The stored balance supplies the identity fields and leave days; a user
/// without a stored balance for `year` starts from an empty one.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown user.
pub fn compute_balance(
    dataset: &Dataset,
    user_id: &str,
    year: i32,
) -> Result<BalanceResponse, ApiError> {
    let user: &User = dataset.find_user(user_id)?;
    let stored: Balance = dataset.balance_for(user_id, year).cloned().unwrap_or_else(|| {
        Balance::new(
            format!("{user_id}-{year}"),
            user_id.to_string(),
            0,
            0,
            0,
            year,
        )
    });

    let entitlement: Balance = calculate_available_days(user, &stored);
    let remaining: RemainingBalance = calculate_remaining_balance(&entitlement, dataset.requests());
    Ok(BalanceResponse::new(&entitlement, &remaining))
}

/// Applies an HR review decision to a request.
///
/// With a `status`, the request moves to that status and the observations
/// are replaced when given. Without one, only the observations change,
/// which final requests still allow.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown request,
/// `ApiError::InvalidInput` for an unknown status, and
/// `ApiError::DomainRuleViolation` for an illegal transition.
pub fn review_request(
    dataset: &mut Dataset,
    request_id: &str,
    review: &ReviewRequestRequest,
    now: OffsetDateTime,
) -> Result<ReviewResponse, ApiError> {
    let status: Option<RequestStatus> = review
        .status
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(translate_domain_error)?;
    let request: &mut Request = dataset.find_request_mut(request_id)?;

    let message: String = match status {
        Some(status) => {
            let from: RequestStatus = request.status;
            request
                .review(status, review.observations.clone(), now)
                .map_err(translate_domain_error)?;
            info!(request_id, %from, to = %status, "Request reviewed");
            format!("Request '{request_id}' moved from {from} to {status}")
        }
        None => {
            request.update_observations(review.observations.clone(), now);
            info!(request_id, "Request observations updated");
            format!("Observations of request '{request_id}' updated")
        }
    };

    Ok(ReviewResponse {
        request: RequestRecord::from_domain(request)?,
        message,
    })
}
