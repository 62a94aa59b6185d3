// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Alternative date suggestions for rejected vacation requests.
//!
//! Suggestions are best effort. Candidates are generated from the shape of
//! the user's work-group rule, each one keeps the duration of the rejected
//! request, and only candidates that pass [`check_vacation_request`] are
//! returned. An exhausted search returns fewer suggestions, never an error.
//!
//! ## Strategies
//!
//! - Week-based groups (`Grupo Programado`, `Top Programado`): the first
//!   Monday after the requested start, then one and two weeks later
//! - Quincena groups (`Grupo Localizado`, `Urgente 12h`, `Grupo 1/3`):
//!   days 1 and 16 of the requested month and the two following months,
//!   skipping anything not after today
//! - Every other group: no suggestions

use crate::date_range::{DateRange, add_weeks, inclusive_days, next_monday_after};
use crate::types::{Request, User};
use crate::validation::check_vacation_request;
use crate::work_group::RangeRule;
use time::{Date, Month, OffsetDateTime};

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 3;

/// Weekly offsets tried for week-based groups.
const WEEK_OFFSETS: [i64; 3] = [0, 1, 2];

/// Months scanned for quincena groups, starting with the requested month.
const QUINCENA_MONTHS: u8 = 3;

/// Suggests up to three alternative ranges for a vacation request,
/// using today's UTC date. See [`suggest_alternative_dates_as_of`].
#[must_use]
pub fn suggest_alternative_dates(
    start: Date,
    end: Date,
    user: &User,
    existing_requests: &[Request],
) -> Vec<DateRange> {
    let today: Date = OffsetDateTime::now_utc().date();
    suggest_alternative_dates_as_of(start, end, user, existing_requests, today)
}

/// Suggests up to three alternative ranges for a vacation request.
///
/// # Arguments
///
/// * `start` - Requested first day
/// * `end` - Requested last day
/// * `user` - The requester
/// * `existing_requests` - Requests every candidate is checked against
/// * `today` - Reference date; quincena candidates must start after it
///
/// # Returns
///
/// At most [`MAX_SUGGESTIONS`] ranges in generation order, each passing
/// [`check_vacation_request`]. Empty for inverted input.
#[must_use]
pub fn suggest_alternative_dates_as_of(
    start: Date,
    end: Date,
    user: &User,
    existing_requests: &[Request],
    today: Date,
) -> Vec<DateRange> {
    let duration: i64 = inclusive_days(start, end);
    if duration < 1 {
        return Vec::new();
    }

    let candidate_starts: Vec<Date> = match user.work_group.range_rule() {
        RangeRule::WeekOrFourDays => weekly_starts(start),
        RangeRule::Quincena => quincena_starts(start, today),
        RangeRule::FixedDurations(_) | RangeRule::Unrestricted => Vec::new(),
    };

    candidate_starts
        .into_iter()
        .filter_map(|candidate| DateRange::with_duration(candidate, duration).ok())
        .filter(|range| {
            check_vacation_request(range.start(), range.end(), user, existing_requests).is_ok()
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}

fn weekly_starts(start: Date) -> Vec<Date> {
    let Ok(monday) = next_monday_after(start) else {
        return Vec::new();
    };

    WEEK_OFFSETS
        .iter()
        .filter_map(|weeks| add_weeks(monday, *weeks).ok())
        .collect()
}

fn quincena_starts(start: Date, today: Date) -> Vec<Date> {
    let mut starts: Vec<Date> = Vec::with_capacity(usize::from(QUINCENA_MONTHS) * 2);
    let mut year: i32 = start.year();
    let mut month: Month = start.month();

    for _ in 0..QUINCENA_MONTHS {
        for day in [1, 16] {
            if let Ok(boundary) = Date::from_calendar_date(year, month, day) {
                starts.push(boundary);
            }
        }
        if month == Month::December {
            year += 1;
        }
        month = month.next();
    }

    starts.sort_unstable();
    starts.retain(|boundary| *boundary > today);
    starts
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{RequestStatus, RequestType, Role, ShiftType, WorkGroup, Workday};
    use crate::validation::validate_vacation_request;
    use time::macros::{date, datetime};

    fn make_user(work_group: WorkGroup) -> User {
        User::new(
            String::from("u1"),
            String::from("Ana"),
            String::from("ana@example.com"),
            Role::Worker,
            ShiftType::Programado,
            work_group,
            Workday::Completa,
            String::from("Urgencias"),
            3,
        )
    }

    fn make_vacation(id: &str, start: Date, end: Date) -> Request {
        Request::new(
            id.to_string(),
            String::from("u1"),
            RequestType::Vacation,
            start,
            end,
            datetime!(2025-01-10 09:00 UTC),
        )
        .with_status(RequestStatus::Approved)
    }

    #[test]
    fn test_programado_suggests_following_weeks() {
        let user: User = make_user(WorkGroup::GrupoProgramado);

        // Tuesday to Monday: 7 days but not a natural week
        let suggestions: Vec<DateRange> = suggest_alternative_dates_as_of(
            date!(2025 - 08 - 05),
            date!(2025 - 08 - 11),
            &user,
            &[],
            date!(2025 - 07 - 01),
        );

        assert_eq!(
            suggestions,
            vec![
                DateRange::new(date!(2025 - 08 - 11), date!(2025 - 08 - 17)).unwrap(),
                DateRange::new(date!(2025 - 08 - 18), date!(2025 - 08 - 24)).unwrap(),
                DateRange::new(date!(2025 - 08 - 25), date!(2025 - 08 - 31)).unwrap(),
            ]
        );
    }

    #[test]
    fn test_programado_skips_weeks_with_conflicts() {
        let user: User = make_user(WorkGroup::TopProgramado);
        let existing: Vec<Request> = vec![make_vacation(
            "r1",
            date!(2025 - 08 - 19),
            date!(2025 - 08 - 20),
        )];

        let suggestions: Vec<DateRange> = suggest_alternative_dates_as_of(
            date!(2025 - 08 - 05),
            date!(2025 - 08 - 11),
            &user,
            &existing,
            date!(2025 - 07 - 01),
        );

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].start(), date!(2025 - 08 - 11));
        assert_eq!(suggestions[1].start(), date!(2025 - 08 - 25));
    }

    #[test]
    fn test_quincena_suggests_boundaries_after_today() {
        let user: User = make_user(WorkGroup::GrupoLocalizado);

        // 15 days starting mid-month: only day-1 quincenas and 30-day months fit
        let suggestions: Vec<DateRange> = suggest_alternative_dates_as_of(
            date!(2025 - 08 - 05),
            date!(2025 - 08 - 19),
            &user,
            &[],
            date!(2025 - 08 - 02),
        );

        assert_eq!(
            suggestions,
            vec![
                DateRange::new(date!(2025 - 09 - 01), date!(2025 - 09 - 15)).unwrap(),
                DateRange::new(date!(2025 - 09 - 16), date!(2025 - 09 - 30)).unwrap(),
                DateRange::new(date!(2025 - 10 - 01), date!(2025 - 10 - 15)).unwrap(),
            ]
        );
    }

    #[test]
    fn test_quincena_scan_crosses_year_end() {
        let user: User = make_user(WorkGroup::GrupoUnTercio);

        let suggestions: Vec<DateRange> = suggest_alternative_dates_as_of(
            date!(2025 - 11 - 03),
            date!(2025 - 11 - 17),
            &user,
            &[],
            date!(2025 - 11 - 20),
        );

        // 2025-12-01 is a Monday, 2026-01-01 a Thursday
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].start(), date!(2025 - 12 - 01));
        assert_eq!(suggestions[1].start(), date!(2026 - 01 - 01));
    }

    #[test]
    fn test_fixed_duration_groups_get_no_suggestions() {
        for group in [
            WorkGroup::Urgente24h,
            WorkGroup::GesSalaSanitaria,
            WorkGroup::from("Sin grupo"),
        ] {
            let user: User = make_user(group);
            let suggestions: Vec<DateRange> = suggest_alternative_dates_as_of(
                date!(2025 - 08 - 05),
                date!(2025 - 08 - 09),
                &user,
                &[],
                date!(2025 - 07 - 01),
            );
            assert!(suggestions.is_empty());
        }
    }

    #[test]
    fn test_inverted_input_yields_nothing() {
        let user: User = make_user(WorkGroup::GrupoProgramado);

        let suggestions: Vec<DateRange> = suggest_alternative_dates_as_of(
            date!(2025 - 08 - 11),
            date!(2025 - 08 - 05),
            &user,
            &[],
            date!(2025 - 07 - 01),
        );

        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_every_suggestion_passes_validation() {
        let user: User = make_user(WorkGroup::Urgente12h);
        let existing: Vec<Request> = vec![make_vacation(
            "r1",
            date!(2025 - 09 - 01),
            date!(2025 - 09 - 15),
        )];

        let suggestions: Vec<DateRange> = suggest_alternative_dates_as_of(
            date!(2025 - 08 - 04),
            date!(2025 - 08 - 18),
            &user,
            &existing,
            date!(2025 - 07 - 01),
        );

        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        assert!(!suggestions.is_empty());
        for range in &suggestions {
            assert!(validate_vacation_request(range.start(), range.end(), &user, &existing).valid);
        }
    }
}
