// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inclusive calendar date ranges.
//!
//! Every range in this system counts both of its ends. A range from
//! 2025-08-01 to 2025-08-15 covers 15 days.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, Weekday};

/// An inclusive range of calendar days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    start: Date,
    /// Last day (inclusive).
    end: Date,
}

impl DateRange {
    /// Creates a new `DateRange`.
    ///
    /// # Arguments
    ///
    /// * `start` - First day (inclusive)
    /// * `end` - Last day (inclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvertedDateRange` if `end` is before `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvertedDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range starting at `start` that covers `days` days.
    ///
    /// # Errors
    ///
    /// Returns an error if `days` is less than 1 or date arithmetic overflows.
    pub fn with_duration(start: Date, days: i64) -> Result<Self, DomainError> {
        let end: Date = start
            .checked_add(Duration::days(days - 1))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("adding {days} days to {start}"),
            })?;
        Self::new(start, end)
    }

    /// Returns the first day.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Number of days covered, both ends included.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        inclusive_days(self.start, self.end)
    }

    /// Returns whether the two ranges share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Iterates over every day in the range in ascending order.
    #[must_use]
    pub const fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Date>,
    end: Date,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current: Date = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.next_day();
        Some(current)
    }
}

/// Number of days from `start` to `end`, both included.
///
/// Returns zero or a negative number for inverted input.
#[must_use]
pub fn inclusive_days(start: Date, end: Date) -> i64 {
    (end - start).whole_days() + 1
}

/// Last day-of-month for the given year and month, leap years included.
#[must_use]
pub const fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if time::util::is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// The first Monday strictly after `date`.
///
/// # Errors
///
/// Returns an error if date arithmetic overflows.
pub fn next_monday_after(date: Date) -> Result<Date, DomainError> {
    let mut candidate: Date = next_day(date)?;
    while candidate.weekday() != Weekday::Monday {
        candidate = next_day(candidate)?;
    }
    Ok(candidate)
}

/// Adds a number of whole weeks to `date`.
///
/// # Errors
///
/// Returns an error if date arithmetic overflows.
pub fn add_weeks(date: Date, weeks: i64) -> Result<Date, DomainError> {
    date.checked_add(Duration::weeks(weeks))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("adding {weeks} weeks to {date}"),
        })
}

fn next_day(date: Date) -> Result<Date, DomainError> {
    date.next_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("advancing past {date}"),
        })
}
