// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly build-up of leave and personal days.

use crate::alerts::PermissionAccumulationAlert;
use crate::directory::UserDirectory;
use std::collections::BTreeMap;
use time::Month;
use tracing::debug;
use turnos_domain::{Request, RequestStatus, User};

/// Permissions in one calendar month that raise an alert.
pub const PERMISSION_ACCUMULATION_THRESHOLD: usize = 3;

/// Detects users who start many permissions in the same month.
///
/// `leave` and `personalDay` requests are bucketed by user, then by the
/// year and month of their start date. Any status counts, including
/// rejected ones; the alert reports how many are still pending.
///
/// # Arguments
///
/// * `requests` - All requests, in any order
/// * `users` - All users, used for display names
///
/// # Returns
///
/// Alerts ordered by user id, then month.
#[must_use]
pub fn detect_permission_accumulation(
    requests: &[Request],
    users: &[User],
) -> Vec<PermissionAccumulationAlert> {
    let directory: UserDirectory<'_> = UserDirectory::new(users);

    let mut buckets: BTreeMap<(&str, i32, u8), Vec<&Request>> = BTreeMap::new();
    for request in requests.iter().filter(|r| r.request_type.is_permission()) {
        let key: (&str, i32, u8) = (
            request.user_id.as_str(),
            request.start_date.year(),
            u8::from(request.start_date.month()),
        );
        buckets.entry(key).or_default().push(request);
    }

    let mut alerts: Vec<PermissionAccumulationAlert> = Vec::new();
    for ((user_id, year, _), bucket) in buckets {
        if bucket.len() < PERMISSION_ACCUMULATION_THRESHOLD {
            continue;
        }
        let Some(last_permission_date) = bucket.iter().map(|r| r.start_date).max() else {
            continue;
        };
        let month: Month = last_permission_date.month();
        let count: usize = bucket.len();
        let pending_count: usize = bucket
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .count();
        let total_days: i64 = bucket.iter().map(|r| r.inclusive_days()).sum();
        let user_name: String = directory.name_of(user_id);

        alerts.push(PermissionAccumulationAlert {
            message: format!(
                "{user_name} has {count} permissions in {month} {year} ({pending_count} pending, {total_days} days in total)"
            ),
            user_id: user_id.to_string(),
            user_name,
            year,
            month,
            count,
            pending_count,
            total_days,
            last_permission_date,
        });
    }

    debug!(
        alerts = alerts.len(),
        "Permission accumulation analysis complete"
    );
    alerts
}
