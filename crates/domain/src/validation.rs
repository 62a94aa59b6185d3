// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request validation.
//!
//! Each request type has a `check_*` function returning the first violated
//! rule and a `validate_*` twin returning a display-ready
//! [`ValidationResult`]. Rules are evaluated in a fixed order and the first
//! failure wins.

use crate::rest_day::is_rest_day;
use crate::types::{Request, RequestType, User, WorkGroup};
use crate::work_group::check_work_group_range;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::{Date, Weekday};

/// Share of a department that may be absent on the same day, in percent.
pub const DEPARTMENT_ABSENCE_CAP_PERCENT: u32 = 10;

/// A rule that rejected a candidate request.
///
/// The `Display` output is the message shown to the requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleViolation {
    /// The range ends before it starts.
    InvertedRange {
        /// Requested start.
        start: Date,
        /// Requested end.
        end: Date,
    },
    /// The request starts on a mandatory weekly rest day.
    StartsOnRestDay {
        /// Requested start.
        date: Date,
        /// Its weekday.
        weekday: Weekday,
    },
    /// The range is not a natural quincena.
    NotQuincena {
        /// The group whose rule was applied.
        work_group: WorkGroup,
    },
    /// The range is neither a natural week nor a 4-day block.
    NotWeekOrFourDayBlock {
        /// The group whose rule was applied.
        work_group: WorkGroup,
        /// Requested duration in days.
        duration: i64,
    },
    /// The duration is not one of the group's allowed lengths.
    DurationNotAllowed {
        /// The group whose rule was applied.
        work_group: WorkGroup,
        /// Requested duration in days.
        duration: i64,
        /// The allowed durations.
        allowed: Vec<i64>,
    },
    /// The range overlaps an active request of the same user.
    OverlapsExistingRequest {
        /// The conflicting request.
        request_id: String,
        /// Its start.
        start: Date,
        /// Its end.
        end: Date,
    },
    /// The user already has an active request on that day.
    DuplicateDay {
        /// The day.
        date: Date,
    },
    /// Too many colleagues of the department are already off that day.
    DepartmentCapacityReached {
        /// The department.
        department: String,
        /// Rounded share of the department already absent.
        percentage: u32,
        /// The cap.
        cap: u32,
    },
    /// The return date is not after the start date.
    ReturnNotAfterStart {
        /// Shift change start.
        start: Date,
        /// Requested return.
        return_date: Date,
    },
    /// The requester already has an active request on that day.
    RequesterUnavailable {
        /// The day.
        date: Date,
    },
    /// The replacement already has an active request on that day.
    ReplacementUnavailable {
        /// The replacement's name.
        replacement: String,
        /// The day.
        date: Date,
    },
    /// Requester and replacement belong to different departments.
    DepartmentMismatch {
        /// Requester's department.
        requester: String,
        /// Replacement's department.
        replacement: String,
    },
    /// Requester and replacement work different shifts.
    ShiftMismatch {
        /// Requester's shift.
        requester: String,
        /// Replacement's shift.
        replacement: String,
    },
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedRange { start, end } => {
                write!(f, "The end date {end} is before the start date {start}")
            }
            Self::StartsOnRestDay { date, weekday } => write!(
                f,
                "Vacation cannot start on a weekly rest day ({date} is a {weekday})"
            ),
            Self::NotQuincena { work_group } => write!(
                f,
                "{work_group} vacation must cover a natural quincena: days 1 to 15, or day 16 to the last day of the month"
            ),
            Self::NotWeekOrFourDayBlock {
                work_group,
                duration,
            } => write!(
                f,
                "{work_group} vacation must be a natural week (Monday to Sunday) or a block of 4 consecutive days, got {duration} days"
            ),
            Self::DurationNotAllowed {
                work_group,
                duration,
                allowed,
            } => {
                let allowed: Vec<String> = allowed.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "{work_group} vacation must last exactly {} days, got {duration} days",
                    allowed.join(", ")
                )
            }
            Self::OverlapsExistingRequest {
                request_id,
                start,
                end,
            } => write!(
                f,
                "The dates overlap existing request {request_id} ({start} to {end})"
            ),
            Self::DuplicateDay { date } => {
                write!(f, "You already have a request on {date}")
            }
            Self::DepartmentCapacityReached {
                department,
                percentage,
                cap,
            } => write!(
                f,
                "{percentage}% of {department} is already absent on that day (maximum {cap}%)"
            ),
            Self::ReturnNotAfterStart { start, return_date } => write!(
                f,
                "The return date {return_date} must be after the start date {start}"
            ),
            Self::RequesterUnavailable { date } => {
                write!(f, "You already have a request on {date}")
            }
            Self::ReplacementUnavailable { replacement, date } => {
                write!(f, "{replacement} already has a request on {date}")
            }
            Self::DepartmentMismatch {
                requester,
                replacement,
            } => write!(
                f,
                "The replacement must belong to your department ({requester}), not {replacement}"
            ),
            Self::ShiftMismatch {
                requester,
                replacement,
            } => write!(
                f,
                "The replacement must work your shift ({requester}), not {replacement}"
            ),
        }
    }
}

/// Outcome of validating a candidate request, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the request passed every rule.
    pub valid: bool,
    /// Confirmation or the violated rule's message.
    pub message: String,
}

impl ValidationResult {
    /// A passing result with the given confirmation message.
    #[must_use]
    pub fn accepted(message: &str) -> Self {
        Self {
            valid: true,
            message: message.to_string(),
        }
    }

    /// A failing result carrying the violation's message.
    #[must_use]
    pub fn rejected(violation: &RuleViolation) -> Self {
        Self {
            valid: false,
            message: violation.to_string(),
        }
    }

    fn from_check(result: Result<(), RuleViolation>, accepted: &str) -> Self {
        match result {
            Ok(()) => Self::accepted(accepted),
            Err(violation) => Self::rejected(&violation),
        }
    }
}

/// Checks a vacation request.
///
/// Rules, in order:
/// 1. The range must not be inverted
/// 2. The first day must not be a weekly rest day for the user
/// 3. The range must satisfy the user's work-group rule
/// 4. The range must not overlap an active request of the same user
///
/// # Arguments
///
/// * `start` - First day (inclusive)
/// * `end` - Last day (inclusive)
/// * `user` - The requester
/// * `existing_requests` - Requests to check for overlap; other users' are ignored
///
/// # Errors
///
/// Returns the first violated rule.
pub fn check_vacation_request(
    start: Date,
    end: Date,
    user: &User,
    existing_requests: &[Request],
) -> Result<(), RuleViolation> {
    if end < start {
        return Err(RuleViolation::InvertedRange { start, end });
    }

    if is_rest_day(start, user) {
        return Err(RuleViolation::StartsOnRestDay {
            date: start,
            weekday: start.weekday(),
        });
    }

    check_work_group_range(start, end, &user.work_group)?;

    if let Some(conflict) = existing_requests
        .iter()
        .filter(|r| r.user_id == user.id && r.is_active())
        .find(|r| r.overlaps(start, end))
    {
        return Err(RuleViolation::OverlapsExistingRequest {
            request_id: conflict.id.clone(),
            start: conflict.start_date,
            end: conflict.end_date,
        });
    }

    Ok(())
}

/// Validates a vacation request. See [`check_vacation_request`].
#[must_use]
pub fn validate_vacation_request(
    start: Date,
    end: Date,
    user: &User,
    existing_requests: &[Request],
) -> ValidationResult {
    ValidationResult::from_check(
        check_vacation_request(start, end, user, existing_requests),
        "Vacation request is valid",
    )
}

/// Checks a personal day request.
///
/// Rules, in order:
/// 1. The user must not already have an active request starting that day
/// 2. Fewer than 10% of the user's department may already be off that day,
///    counting unique users with an active vacation or personal day
///    request starting that day
///
/// # Arguments
///
/// * `date` - The requested day
/// * `user` - The requester
/// * `all_requests` - Every request in the system
/// * `all_users` - Every user in the system, used for department headcount
///
/// # Errors
///
/// Returns the first violated rule.
pub fn check_personal_day_request(
    date: Date,
    user: &User,
    all_requests: &[Request],
    all_users: &[User],
) -> Result<(), RuleViolation> {
    if has_active_request_on(&user.id, date, all_requests) {
        return Err(RuleViolation::DuplicateDay { date });
    }

    let department_members: HashSet<&str> = all_users
        .iter()
        .filter(|u| u.department == user.department)
        .map(|u| u.id.as_str())
        .collect();

    let absent: HashSet<&str> = all_requests
        .iter()
        .filter(|r| r.is_active())
        .filter(|r| {
            matches!(
                r.request_type,
                RequestType::PersonalDay | RequestType::Vacation
            )
        })
        .filter(|r| r.starts_on(date))
        .map(|r| r.user_id.as_str())
        .filter(|id| department_members.contains(id))
        .collect();

    // absent / headcount >= cap%, in integers so the boundary is exact
    let headcount: usize = department_members.len();
    let cap: usize = DEPARTMENT_ABSENCE_CAP_PERCENT as usize;
    if headcount > 0 && absent.len() * 100 >= cap * headcount {
        return Err(RuleViolation::DepartmentCapacityReached {
            department: user.department.clone(),
            percentage: rounded_percentage(absent.len(), headcount),
            cap: DEPARTMENT_ABSENCE_CAP_PERCENT,
        });
    }

    Ok(())
}

/// Validates a personal day request. See [`check_personal_day_request`].
#[must_use]
pub fn validate_personal_day_request(
    date: Date,
    user: &User,
    all_requests: &[Request],
    all_users: &[User],
) -> ValidationResult {
    ValidationResult::from_check(
        check_personal_day_request(date, user, all_requests, all_users),
        "Personal day request is valid",
    )
}

/// Checks a shift change request.
///
/// Rules, in order:
/// 1. `return_date` must be after `start`
/// 2. The requester must be free on `start`
/// 3. Requester and replacement must both be free on `return_date`
/// 4. The replacement must be free on `start`
/// 5. Both must belong to the same department
/// 6. Both must work the same shift
///
/// "Free on a day" means no active request starting that day.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn check_shift_change_request(
    start: Date,
    return_date: Date,
    user: &User,
    replacement: &User,
    existing_requests: &[Request],
) -> Result<(), RuleViolation> {
    if return_date <= start {
        return Err(RuleViolation::ReturnNotAfterStart { start, return_date });
    }

    if has_active_request_on(&user.id, start, existing_requests) {
        return Err(RuleViolation::RequesterUnavailable { date: start });
    }

    if has_active_request_on(&user.id, return_date, existing_requests) {
        return Err(RuleViolation::RequesterUnavailable { date: return_date });
    }

    if has_active_request_on(&replacement.id, return_date, existing_requests) {
        return Err(RuleViolation::ReplacementUnavailable {
            replacement: replacement.name.clone(),
            date: return_date,
        });
    }

    if has_active_request_on(&replacement.id, start, existing_requests) {
        return Err(RuleViolation::ReplacementUnavailable {
            replacement: replacement.name.clone(),
            date: start,
        });
    }

    if replacement.department != user.department {
        return Err(RuleViolation::DepartmentMismatch {
            requester: user.department.clone(),
            replacement: replacement.department.clone(),
        });
    }

    if replacement.shift != user.shift {
        return Err(RuleViolation::ShiftMismatch {
            requester: user.shift.to_string(),
            replacement: replacement.shift.to_string(),
        });
    }

    Ok(())
}

/// Validates a shift change request. See [`check_shift_change_request`].
#[must_use]
pub fn validate_shift_change_request(
    start: Date,
    return_date: Date,
    user: &User,
    replacement: &User,
    existing_requests: &[Request],
) -> ValidationResult {
    ValidationResult::from_check(
        check_shift_change_request(start, return_date, user, replacement, existing_requests),
        "Shift change request is valid",
    )
}

fn has_active_request_on(user_id: &str, date: Date, requests: &[Request]) -> bool {
    requests
        .iter()
        .any(|r| r.user_id == user_id && r.is_active() && r.starts_on(date))
}

/// Share of `headcount` that `absent` represents, rounded half up.
fn rounded_percentage(absent: usize, headcount: usize) -> u32 {
    let rounded: usize = (absent * 200 + headcount) / (headcount * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
