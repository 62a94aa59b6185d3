// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Overlapping requests of a single user.

use crate::alerts::OverlapAlert;
use crate::directory::UserDirectory;
use std::collections::BTreeMap;
use time::Date;
use tracing::debug;
use turnos_domain::{Request, User};

/// Detects overlapping requests per user.
///
/// Each user's requests are sorted by start date (ties broken by id) and
/// every adjacent pair whose first member ends on or after the second
/// member's start yields one alert. Only adjacent pairs are compared, so
/// three mutually overlapping requests yield two alerts, not three.
///
/// # Arguments
///
/// * `requests` - All requests, in any order
/// * `users` - All users, used for display names
#[must_use]
pub fn detect_overlaps(requests: &[Request], users: &[User]) -> Vec<OverlapAlert> {
    let directory: UserDirectory<'_> = UserDirectory::new(users);

    let mut by_user: BTreeMap<&str, Vec<&Request>> = BTreeMap::new();
    for request in requests {
        by_user
            .entry(request.user_id.as_str())
            .or_default()
            .push(request);
    }

    let mut alerts: Vec<OverlapAlert> = Vec::new();
    for (user_id, mut user_requests) in by_user {
        user_requests.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| a.id.cmp(&b.id))
        });

        for pair in user_requests.windows(2) {
            let (current, next): (&Request, &Request) = (pair[0], pair[1]);
            if current.end_date >= next.start_date {
                alerts.push(build_alert(user_id, &directory, current, next));
            }
        }
    }

    debug!(alerts = alerts.len(), "Overlap analysis complete");
    alerts
}

fn build_alert(
    user_id: &str,
    directory: &UserDirectory<'_>,
    current: &Request,
    next: &Request,
) -> OverlapAlert {
    let user_name: String = directory.name_of(user_id);
    let overlap_start: Date = next.start_date;
    let overlap_end: Date = current.end_date.min(next.end_date);

    let message: String = format!(
        "{user_name} has overlapping requests: {} ({} to {}) and {} ({} to {})",
        current.request_type.label(),
        current.start_date,
        current.end_date,
        next.request_type.label(),
        next.start_date,
        next.end_date,
    );

    OverlapAlert {
        user_id: user_id.to_string(),
        user_name,
        first_request_id: current.id.clone(),
        first_type: current.request_type,
        second_request_id: next.id.clone(),
        second_type: next.request_type,
        overlap_start,
        overlap_end,
        message,
    }
}
