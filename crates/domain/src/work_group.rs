// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Work-group date-range rule table.
//!
//! Every work group allows vacation only in ranges of a fixed shape:
//!
//! | Group                                           | Allowed ranges                              |
//! |-------------------------------------------------|---------------------------------------------|
//! | Grupo Localizado, Urgente 12h, Grupo 1/3        | Natural quincena (1-15, or 16-last day)      |
//! | Grupo Programado, Top Programado                | Monday-Sunday week, or any 4-day block       |
//! | Urgente 24h                                     | 2, 3 or 32 days                              |
//! | GES Sala Sanitaria                              | 10 or 12 days                                |
//! | Any unassigned group                            | Anything                                     |
//!
//! Durations count both ends. Comparisons are exact.

use crate::date_range::{inclusive_days, last_day_of_month};
use crate::types::WorkGroup;
use crate::validation::{RuleViolation, ValidationResult};
use time::{Date, Weekday};

/// Durations allowed for `Urgente 24h`: two- and three-day guard blocks,
/// and the 32-day hours-deficit block.
pub const URGENTE_24H_DURATIONS: [i64; 3] = [2, 3, 32];

/// Durations allowed for `GES Sala Sanitaria`.
pub const GES_SALA_SANITARIA_DURATIONS: [i64; 2] = [10, 12];

/// The shape of range a work group accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRule {
    /// Days 1-15, or day 16 to the end of the same month.
    Quincena,
    /// A Monday-Sunday week, or any 4 consecutive days.
    WeekOrFourDays,
    /// One of a fixed set of durations.
    FixedDurations(&'static [i64]),
    /// Any range.
    Unrestricted,
}

impl WorkGroup {
    /// Returns the range rule for this group.
    #[must_use]
    pub const fn range_rule(&self) -> RangeRule {
        match self {
            Self::GrupoLocalizado | Self::Urgente12h | Self::GrupoUnTercio => RangeRule::Quincena,
            Self::GrupoProgramado | Self::TopProgramado => RangeRule::WeekOrFourDays,
            Self::Urgente24h => RangeRule::FixedDurations(&URGENTE_24H_DURATIONS),
            Self::GesSalaSanitaria => RangeRule::FixedDurations(&GES_SALA_SANITARIA_DURATIONS),
            Self::Unassigned(_) => RangeRule::Unrestricted,
        }
    }
}

/// Checks whether `[start, end]` is a legal vacation range for `work_group`.
///
/// # Errors
///
/// Returns the violated range rule.
pub fn check_work_group_range(
    start: Date,
    end: Date,
    work_group: &WorkGroup,
) -> Result<(), RuleViolation> {
    let duration: i64 = inclusive_days(start, end);

    match work_group.range_rule() {
        RangeRule::Quincena => {
            if is_natural_quincena(start, end) {
                Ok(())
            } else {
                Err(RuleViolation::NotQuincena {
                    work_group: work_group.clone(),
                })
            }
        }
        RangeRule::WeekOrFourDays => {
            if is_natural_week(start, end) || duration == 4 {
                Ok(())
            } else {
                Err(RuleViolation::NotWeekOrFourDayBlock {
                    work_group: work_group.clone(),
                    duration,
                })
            }
        }
        RangeRule::FixedDurations(allowed) => {
            if allowed.contains(&duration) {
                Ok(())
            } else {
                Err(RuleViolation::DurationNotAllowed {
                    work_group: work_group.clone(),
                    duration,
                    allowed: allowed.to_vec(),
                })
            }
        }
        RangeRule::Unrestricted => Ok(()),
    }
}

/// Validates a range against the work-group rule table.
/// See [`check_work_group_range`].
#[must_use]
pub fn validate_work_group_range(start: Date, end: Date, work_group: &WorkGroup) -> ValidationResult {
    match check_work_group_range(start, end, work_group) {
        Ok(()) => ValidationResult::accepted("Dates match the work group rules"),
        Err(violation) => ValidationResult::rejected(&violation),
    }
}

/// First or second half of a single month.
fn is_natural_quincena(start: Date, end: Date) -> bool {
    if start.year() != end.year() || start.month() != end.month() {
        return false;
    }

    let last_day: u8 = last_day_of_month(end.year(), end.month());
    match start.day() {
        1 => end.day() == 15,
        16 => end.day() == last_day,
        _ => false,
    }
}

fn is_natural_week(start: Date, end: Date) -> bool {
    start.weekday() == Weekday::Monday
        && end.weekday() == Weekday::Sunday
        && inclusive_days(start, end) == 7
}
