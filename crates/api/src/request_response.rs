// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! DTOs use camelCase JSON and carry dates as ISO 8601 `YYYY-MM-DD`
//! strings. Timestamps are RFC 3339. Conversion into domain types is
//! explicit and reports the offending field on failure.

use crate::error::{ApiError, translate_domain_error};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime, Time};
use turnos_domain::{
    Balance, RemainingBalance, Request, RequestStatus, RequestType, Role, User, ValidationResult,
    Workday,
};

const DATE_FORMAT: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Parses an ISO 8601 calendar date.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming `field` if `value` is not a
/// `YYYY-MM-DD` date.
pub fn parse_date(field: &str, value: &str) -> Result<Date, ApiError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("Failed to parse date '{value}': {e}"),
    })
}

/// Parses a pair of dates and checks that the range is not inverted.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if either date is malformed or if
/// `end` is before `start`.
pub fn parse_date_range(start: &str, end: &str) -> Result<(Date, Date), ApiError> {
    let start_date: Date = parse_date("startDate", start)?;
    let end_date: Date = parse_date("endDate", end)?;
    if end_date < start_date {
        return Err(ApiError::InvalidInput {
            field: String::from("endDate"),
            message: format!("End date {end_date} is before start date {start_date}"),
        });
    }
    Ok((start_date, end_date))
}

fn parse_timestamp(field: &str, value: &str) -> Result<OffsetDateTime, ApiError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("Failed to parse timestamp '{value}': {e}"),
    })
}

fn format_timestamp(value: OffsetDateTime) -> Result<String, ApiError> {
    value.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format timestamp: {e}"),
    })
}

/// A user as exchanged over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    /// `worker` or `hr`.
    pub role: String,
    pub shift: String,
    pub work_group: String,
    /// `Completa`, `Parcial` or `Reducida`.
    pub workday: String,
    pub department: String,
    #[serde(default)]
    pub seniority: u32,
}

impl UserRecord {
    /// Converts this record into a domain `User`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for an unknown role or workday.
    pub fn to_domain(&self) -> Result<User, ApiError> {
        let role: Role = self.role.parse().map_err(translate_domain_error)?;
        let workday: Workday = self.workday.parse().map_err(translate_domain_error)?;

        Ok(User::new(
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            role,
            self.shift.as_str().into(),
            self.work_group.as_str().into(),
            workday,
            self.department.clone(),
            self.seniority,
        ))
    }
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            shift: user.shift.to_string(),
            work_group: user.work_group.to_string(),
            workday: user.workday.as_str().to_string(),
            department: user.department.clone(),
            seniority: user.seniority,
        }
    }
}

/// A request as exchanged over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    pub id: String,
    pub user_id: String,
    /// `vacation`, `personalDay`, `leave` or `shiftChange`.
    #[serde(rename = "type")]
    pub request_type: String,
    pub start_date: String,
    pub end_date: String,
    /// Defaults to `pending`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub attachment_url: Option<String>,
    #[serde(default)]
    pub replacement_user_id: Option<String>,
    /// Defaults to midnight UTC of the start date.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Defaults to `created_at`.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RequestRecord {
    /// Converts this record into a domain `Request`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for malformed dates or timestamps,
    /// an inverted date range, a personal day spanning several dates, or
    /// an unknown type or status.
    pub fn to_domain(&self) -> Result<Request, ApiError> {
        let request_type: RequestType = self.request_type.parse().map_err(translate_domain_error)?;
        let status: RequestStatus = match &self.status {
            Some(status) => status.parse().map_err(translate_domain_error)?,
            None => RequestStatus::default(),
        };
        let (start_date, end_date): (Date, Date) =
            parse_date_range(&self.start_date, &self.end_date)?;
        if request_type == RequestType::PersonalDay && end_date != start_date {
            return Err(ApiError::InvalidInput {
                field: String::from("endDate"),
                message: format!(
                    "A personal day covers a single date, got {start_date} to {end_date}"
                ),
            });
        }
        let created_at: OffsetDateTime = match &self.created_at {
            Some(value) => parse_timestamp("createdAt", value)?,
            None => start_date.with_time(Time::MIDNIGHT).assume_utc(),
        };
        let updated_at: OffsetDateTime = match &self.updated_at {
            Some(value) => parse_timestamp("updatedAt", value)?,
            None => created_at,
        };

        let mut request: Request = Request::new(
            self.id.clone(),
            self.user_id.clone(),
            request_type,
            start_date,
            end_date,
            created_at,
        )
        .with_status(status);
        request.reason.clone_from(&self.reason);
        request.observations.clone_from(&self.observations);
        request.attachment_url.clone_from(&self.attachment_url);
        request
            .replacement_user_id
            .clone_from(&self.replacement_user_id);
        request.updated_at = updated_at;
        Ok(request)
    }

    /// Builds a record from a domain `Request`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if a timestamp cannot be formatted.
    pub fn from_domain(request: &Request) -> Result<Self, ApiError> {
        Ok(Self {
            id: request.id.clone(),
            user_id: request.user_id.clone(),
            request_type: request.request_type.as_str().to_string(),
            start_date: request.start_date.to_string(),
            end_date: request.end_date.to_string(),
            status: Some(request.status.as_str().to_string()),
            reason: request.reason.clone(),
            observations: request.observations.clone(),
            attachment_url: request.attachment_url.clone(),
            replacement_user_id: request.replacement_user_id.clone(),
            created_at: Some(format_timestamp(request.created_at)?),
            updated_at: Some(format_timestamp(request.updated_at)?),
        })
    }
}

/// A yearly balance as exchanged over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    pub id: String,
    pub user_id: String,
    pub vacation_days: u32,
    pub personal_days: u32,
    #[serde(default)]
    pub leave_days: u32,
    pub year: i32,
}

impl From<&BalanceRecord> for Balance {
    fn from(record: &BalanceRecord) -> Self {
        Self::new(
            record.id.clone(),
            record.user_id.clone(),
            record.vacation_days,
            record.personal_days,
            record.leave_days,
            record.year,
        )
    }
}

impl From<&Balance> for BalanceRecord {
    fn from(balance: &Balance) -> Self {
        Self {
            id: balance.id.clone(),
            user_id: balance.user_id.clone(),
            vacation_days: balance.vacation_days,
            personal_days: balance.personal_days,
            leave_days: balance.leave_days,
            year: balance.year,
        }
    }
}

/// The full dataset file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub requests: Vec<RequestRecord>,
    #[serde(default)]
    pub balances: Vec<BalanceRecord>,
}

/// API request to validate a vacation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateVacationRequest {
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
}

/// API request to validate a personal day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePersonalDayRequest {
    pub user_id: String,
    pub date: String,
}

/// API request to validate a shift change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateShiftChangeRequest {
    pub user_id: String,
    pub replacement_user_id: String,
    pub start_date: String,
    pub return_date: String,
}

/// API request for alternative vacation dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestAlternativesRequest {
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
}

/// API request carrying an HR review decision.
///
/// Without a `status` only the observations are replaced, which is allowed
/// in every status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequestRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
}

/// Outcome of a validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the request may be submitted.
    pub valid: bool,
    /// Acceptance message, or the reason for rejection.
    pub message: String,
}

impl From<ValidationResult> for ValidationResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            valid: result.valid,
            message: result.message,
        }
    }
}

/// An inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeRecord {
    pub start_date: String,
    pub end_date: String,
}

/// API response listing alternative vacation ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    pub user_id: String,
    /// At most three ranges, each accepted by vacation validation.
    pub suggestions: Vec<DateRangeRecord>,
}

/// API response for a user's balance in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub user_id: String,
    pub year: i32,
    /// Vacation days granted by seniority.
    pub vacation_days: u32,
    /// Personal days granted by seniority.
    pub personal_days: u32,
    /// Leave days as stored; never recalculated.
    pub leave_days: u32,
    pub vacation_used: u32,
    pub vacation_remaining: i64,
    pub personal_used: u32,
    pub personal_remaining: i64,
    pub is_exhausted: bool,
    pub is_overdrawn: bool,
}

impl BalanceResponse {
    /// Combines an entitlement with its consumption.
    #[must_use]
    pub fn new(entitlement: &Balance, remaining: &RemainingBalance) -> Self {
        Self {
            user_id: entitlement.user_id.clone(),
            year: entitlement.year,
            vacation_days: entitlement.vacation_days,
            personal_days: entitlement.personal_days,
            leave_days: entitlement.leave_days,
            vacation_used: remaining.vacation_used,
            vacation_remaining: remaining.vacation_remaining,
            personal_used: remaining.personal_used,
            personal_remaining: remaining.personal_remaining,
            is_exhausted: remaining.is_exhausted,
            is_overdrawn: remaining.is_overdrawn,
        }
    }
}

/// API response for a review decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// The request after the review.
    pub request: RequestRecord,
    /// A success message.
    pub message: String,
}
