// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Yearly entitlement and remaining balance calculation.
//!
//! Entitlement depends only on the user's seniority. Consumption is
//! computed on demand from pending and approved requests and is never
//! written back into a stored balance.

use crate::types::{Balance, Request, RequestType, User};
use serde::{Deserialize, Serialize};

/// Vacation days every worker starts with.
pub const BASE_VACATION_DAYS: u32 = 22;

/// Years of service that earn one extra vacation day.
pub const VACATION_SENIORITY_STEP: u32 = 5;

/// Personal days every worker starts with.
pub const BASE_PERSONAL_DAYS: u32 = 3;

/// Calculates a user's entitlement for the year of `balance`.
///
/// - Vacation: 22 days plus one per completed 5 years of seniority
/// - Personal days: 3, plus 1 from 15 years or plus 2 from 25 years
///   (only the higher tier applies)
/// - Leave days and identity fields are copied unchanged
///
/// The input balance is not modified; a new value is returned.
#[must_use]
pub fn calculate_available_days(user: &User, balance: &Balance) -> Balance {
    Balance {
        vacation_days: vacation_entitlement(user.seniority),
        personal_days: personal_day_entitlement(user.seniority),
        ..balance.clone()
    }
}

const fn vacation_entitlement(seniority: u32) -> u32 {
    BASE_VACATION_DAYS + seniority / VACATION_SENIORITY_STEP
}

const fn personal_day_entitlement(seniority: u32) -> u32 {
    let bonus: u32 = if seniority >= 25 {
        2
    } else if seniority >= 15 {
        1
    } else {
        0
    };
    BASE_PERSONAL_DAYS + bonus
}

/// Remaining balance after subtracting consumed days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingBalance {
    /// The user this balance belongs to.
    pub user_id: String,
    /// The calendar year.
    pub year: i32,
    /// Vacation days granted.
    pub vacation_entitled: u32,
    /// Vacation days taken by pending or approved requests.
    pub vacation_used: u32,
    /// Vacation days left. Negative when overdrawn.
    pub vacation_remaining: i64,
    /// Personal days granted.
    pub personal_entitled: u32,
    /// Personal days taken by pending or approved requests.
    pub personal_used: u32,
    /// Personal days left. Negative when overdrawn.
    pub personal_remaining: i64,
    /// Whether every vacation day is used (`vacation_remaining` == 0).
    pub is_exhausted: bool,
    /// Whether more vacation days are requested than granted.
    pub is_overdrawn: bool,
}

/// Calculates how much of an entitlement is left.
///
/// Only the user's `vacation` and `personalDay` requests that are pending
/// or approved and start within `entitlement.year` count. Vacation requests
/// consume their inclusive day span, personal days consume one day each.
///
/// # Arguments
///
/// * `entitlement` - The balance to consume, usually from [`calculate_available_days`]
/// * `requests` - Requests to consider; other users' are ignored
#[must_use]
pub fn calculate_remaining_balance(entitlement: &Balance, requests: &[Request]) -> RemainingBalance {
    let consuming = requests.iter().filter(|r| {
        r.user_id == entitlement.user_id
            && r.status.consumes_balance()
            && r.start_date.year() == entitlement.year
    });

    let mut vacation_used: u32 = 0;
    let mut personal_used: u32 = 0;
    for request in consuming {
        match request.request_type {
            RequestType::Vacation => {
                let days: u32 = u32::try_from(request.inclusive_days()).unwrap_or(0);
                vacation_used = vacation_used.saturating_add(days);
            }
            RequestType::PersonalDay => personal_used = personal_used.saturating_add(1),
            RequestType::Leave | RequestType::ShiftChange => {}
        }
    }

    let vacation_remaining: i64 =
        i64::from(entitlement.vacation_days) - i64::from(vacation_used);
    let personal_remaining: i64 =
        i64::from(entitlement.personal_days) - i64::from(personal_used);

    RemainingBalance {
        user_id: entitlement.user_id.clone(),
        year: entitlement.year,
        vacation_entitled: entitlement.vacation_days,
        vacation_used,
        vacation_remaining,
        personal_entitled: entitlement.personal_days,
        personal_used,
        personal_remaining,
        is_exhausted: vacation_remaining == 0,
        is_overdrawn: vacation_remaining < 0,
    }
}
