// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod balance;
mod date_range;
mod error;
mod rest_day;
mod suggestions;
mod types;
mod validation;
mod work_group;

#[cfg(test)]
mod tests;

pub use balance::{
    BASE_PERSONAL_DAYS, BASE_VACATION_DAYS, RemainingBalance, VACATION_SENIORITY_STEP,
    calculate_available_days, calculate_remaining_balance,
};
pub use date_range::{DateRange, Days, inclusive_days, last_day_of_month};
pub use error::DomainError;
pub use rest_day::is_rest_day;
pub use suggestions::{MAX_SUGGESTIONS, suggest_alternative_dates, suggest_alternative_dates_as_of};
pub use work_group::{
    GES_SALA_SANITARIA_DURATIONS, RangeRule, URGENTE_24H_DURATIONS, check_work_group_range,
    validate_work_group_range,
};

// Re-export public types
pub use types::{
    Balance, Request, RequestStatus, RequestType, Role, ShiftType, User, WorkGroup, Workday,
};
pub use validation::{
    DEPARTMENT_ABSENCE_CAP_PERCENT, RuleViolation, ValidationResult, check_personal_day_request,
    check_shift_change_request, check_vacation_request, validate_personal_day_request,
    validate_shift_change_request, validate_vacation_request,
};
