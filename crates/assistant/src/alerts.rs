// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Alert records produced by the analyzers.
//!
//! Alerts are derived views over requests, users and balances. They are
//! recomputed on every analysis and never stored. Each alert carries a
//! display-ready `message` plus the structured fields it was built from.

use crate::group_crowding::CrowdedPeriod;
use serde::{Deserialize, Serialize};
use time::{Date, Month};
use turnos_domain::{RequestType, WorkGroup};

/// Two requests of the same user that share at least one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapAlert {
    /// The affected user.
    pub user_id: String,
    /// The affected user's name, or their id if unknown.
    pub user_name: String,
    /// The earlier request (by start date).
    pub first_request_id: String,
    /// The earlier request's type.
    pub first_type: RequestType,
    /// The later request.
    pub second_request_id: String,
    /// The later request's type.
    pub second_type: RequestType,
    /// First shared day.
    pub overlap_start: Date,
    /// Last shared day.
    pub overlap_end: Date,
    /// Display message.
    pub message: String,
}

/// A day on which too many members of a work group are on vacation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCrowdingAlert {
    /// The crowded group.
    pub work_group: WorkGroup,
    /// The crowded day.
    pub date: Date,
    /// Vacation requests covering the day.
    pub request_count: usize,
    /// Members in the group.
    pub group_size: usize,
    /// Count at which the day is flagged.
    pub threshold: usize,
    /// The requests covering the day.
    pub request_ids: Vec<String>,
    /// Display message.
    pub message: String,
}

/// A user who piled up leave and personal days in a single month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionAccumulationAlert {
    /// The affected user.
    pub user_id: String,
    /// The affected user's name, or their id if unknown.
    pub user_name: String,
    /// Year of the month bucket.
    pub year: i32,
    /// Month bucket.
    pub month: Month,
    /// Permissions starting in the month.
    pub count: usize,
    /// How many of them are still pending.
    pub pending_count: usize,
    /// Sum of their inclusive day spans.
    pub total_days: i64,
    /// Latest start date in the bucket.
    pub last_permission_date: Date,
    /// Display message.
    pub message: String,
}

/// A user running out of vacation days this year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationLimitAlert {
    /// The affected user.
    pub user_id: String,
    /// The affected user's name, or their id if unknown.
    pub user_name: String,
    /// Year of the balance.
    pub year: i32,
    /// Remaining vacation days.
    pub days_left: u32,
    /// Display message.
    pub message: String,
}

/// Everything the assistant found in one pass over the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReport {
    /// Overlapping requests.
    pub overlaps: Vec<OverlapAlert>,
    /// Crowded days, one record per group and day.
    pub group_crowding: Vec<GroupCrowdingAlert>,
    /// The crowded days folded into consecutive periods. Not counted as
    /// alerts.
    pub crowded_periods: Vec<CrowdedPeriod>,
    /// Monthly permission build-ups.
    pub permission_accumulation: Vec<PermissionAccumulationAlert>,
    /// Nearly exhausted vacation balances.
    pub vacation_limit: Vec<VacationLimitAlert>,
}

impl AssistantReport {
    /// Total number of alerts across all analyzers.
    #[must_use]
    pub fn total_alerts(&self) -> usize {
        self.overlaps.len()
            + self.group_crowding.len()
            + self.permission_accumulation.len()
            + self.vacation_limit.len()
    }

    /// Returns whether no analyzer raised anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_alerts() == 0
    }
}
