// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Heuristic scheduling alerts for HR dashboards.
//!
//! The analyzers are independent, pure functions over requests, users and
//! balances. Alerts are advisory and never block a request.

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

mod alerts;
mod directory;
mod group_crowding;
mod overlap;
mod permission_accumulation;
mod vacation_limit;

#[cfg(test)]
mod tests;

pub use alerts::{
    AssistantReport, GroupCrowdingAlert, OverlapAlert, PermissionAccumulationAlert,
    VacationLimitAlert,
};
pub use group_crowding::{
    CrowdedPeriod, crowding_threshold, detect_group_crowding, merge_crowded_days,
};
pub use overlap::detect_overlaps;
pub use permission_accumulation::{
    PERMISSION_ACCUMULATION_THRESHOLD, detect_permission_accumulation,
};
pub use vacation_limit::{VACATION_LIMIT_THRESHOLD, detect_vacation_limits};

use time::{Date, OffsetDateTime};
use tracing::info;
use turnos_domain::{Balance, Request, User};

/// Runs every analyzer over the dataset.
///
/// Vacation limits are checked against the current UTC year.
#[must_use]
pub fn analyze(requests: &[Request], users: &[User], balances: &[Balance]) -> AssistantReport {
    let today: Date = OffsetDateTime::now_utc().date();
    analyze_as_of(requests, users, balances, today)
}

/// Runs every analyzer over the dataset as seen on `today`.
///
/// # Arguments
///
/// * `requests` - All requests
/// * `users` - All users
/// * `balances` - All balances, of any year
/// * `today` - Reference date; its year selects the balances checked for
///   vacation limits
///
/// # Returns
///
/// One report with the output of each analyzer, plus the crowded days
/// folded into periods.
#[must_use]
pub fn analyze_as_of(
    requests: &[Request],
    users: &[User],
    balances: &[Balance],
    today: Date,
) -> AssistantReport {
    let group_crowding: Vec<GroupCrowdingAlert> = detect_group_crowding(requests, users);
    let report: AssistantReport = AssistantReport {
        overlaps: detect_overlaps(requests, users),
        crowded_periods: merge_crowded_days(&group_crowding),
        group_crowding,
        permission_accumulation: detect_permission_accumulation(requests, users),
        vacation_limit: detect_vacation_limits(balances, users, today.year()),
    };

    info!(
        requests = requests.len(),
        users = users.len(),
        balances = balances.len(),
        total_alerts = report.total_alerts(),
        "Assistant analysis complete"
    );

    report
}
