// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Work-group overcrowding.
//!
//! Every pending or approved vacation request is expanded day by day and
//! counted against the requester's work group. A day is crowded when at
//! least half of the group (rounded up) is covered by vacation requests.
//! Requests are counted, not members, so one member with two overlapping
//! vacations counts twice.
//!
//! The canonical output is one alert per group and day. Dashboards that
//! prefer periods can fold consecutive days with [`merge_crowded_days`].
//!
//! The day expansion costs O(requests × range length). It is meant for
//! datasets of a few thousand requests at most.

use crate::alerts::GroupCrowdingAlert;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use time::Date;
use tracing::debug;
use turnos_domain::{DateRange, Request, RequestType, User, WorkGroup};

/// Number of vacation requests on one day that makes it crowded.
///
/// Half of the group, rounded up.
#[must_use]
pub const fn crowding_threshold(group_size: usize) -> usize {
    group_size.div_ceil(2)
}

/// Detects crowded vacation days per work group.
///
/// # Arguments
///
/// * `requests` - All requests; only pending or approved vacations count
/// * `users` - All users, which define group membership and size
///
/// # Returns
///
/// Alerts ordered by work group, then date.
#[must_use]
pub fn detect_group_crowding(requests: &[Request], users: &[User]) -> Vec<GroupCrowdingAlert> {
    let mut groups: BTreeMap<&WorkGroup, HashSet<&str>> = BTreeMap::new();
    for user in users {
        groups
            .entry(&user.work_group)
            .or_default()
            .insert(user.id.as_str());
    }

    let mut alerts: Vec<GroupCrowdingAlert> = Vec::new();
    for (work_group, members) in groups {
        let group_size: usize = members.len();
        let threshold: usize = crowding_threshold(group_size);

        let mut coverage: BTreeMap<Date, Vec<&str>> = BTreeMap::new();
        for request in requests.iter().filter(|r| {
            r.request_type == RequestType::Vacation
                && r.status.consumes_balance()
                && members.contains(r.user_id.as_str())
        }) {
            let Ok(range) = DateRange::new(request.start_date, request.end_date) else {
                continue;
            };
            for day in range.days() {
                coverage.entry(day).or_default().push(request.id.as_str());
            }
        }

        for (date, request_ids) in coverage {
            let request_count: usize = request_ids.len();
            if request_count < threshold {
                continue;
            }
            alerts.push(GroupCrowdingAlert {
                work_group: work_group.clone(),
                date,
                request_count,
                group_size,
                threshold,
                request_ids: request_ids.into_iter().map(str::to_string).collect(),
                message: format!(
                    "{request_count} vacation requests cover {date} in {work_group} (group of {group_size})"
                ),
            });
        }
    }

    debug!(alerts = alerts.len(), "Group crowding analysis complete");
    alerts
}

/// A run of consecutive crowded days in one work group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrowdedPeriod {
    /// The crowded group.
    pub work_group: WorkGroup,
    /// First crowded day.
    pub start: Date,
    /// Last crowded day.
    pub end: Date,
    /// Highest number of vacation requests on one day of the period.
    pub peak_requests: usize,
    /// Members in the group.
    pub group_size: usize,
    /// Display message.
    pub message: String,
}

/// Folds per-day crowding alerts into periods of consecutive days.
///
/// Expects alerts ordered by group then date, as produced by
/// [`detect_group_crowding`].
#[must_use]
pub fn merge_crowded_days(alerts: &[GroupCrowdingAlert]) -> Vec<CrowdedPeriod> {
    let mut periods: Vec<CrowdedPeriod> = Vec::new();

    for alert in alerts {
        if let Some(last) = periods.last_mut()
            && last.work_group == alert.work_group
            && last.end.next_day() == Some(alert.date)
        {
            last.end = alert.date;
            last.peak_requests = last.peak_requests.max(alert.request_count);
            continue;
        }

        periods.push(CrowdedPeriod {
            work_group: alert.work_group.clone(),
            start: alert.date,
            end: alert.date,
            peak_requests: alert.request_count,
            group_size: alert.group_size,
            message: String::new(),
        });
    }

    for period in &mut periods {
        period.message = format!(
            "Up to {} vacation requests cover {} to {} in {} (group of {})",
            period.peak_requests, period.start, period.end, period.work_group, period.group_size
        );
    }

    periods
}
