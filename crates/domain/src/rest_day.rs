// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly rest policy.

use crate::types::{ShiftType, User};
use time::{Date, Weekday};

/// Returns whether `date` is a mandatory weekly rest day for `user`.
///
/// - `Localizado` and every other shift rest on Saturday and Sunday
/// - `Urgente 24h` has no fixed rest day; its guard rotation is not modelled
#[must_use]
pub fn is_rest_day(date: Date, user: &User) -> bool {
    match user.shift {
        ShiftType::Urgente24h => false,
        ShiftType::Localizado
        | ShiftType::Urgente12h
        | ShiftType::Programado
        | ShiftType::Other(_) => is_weekend(date),
    }
}

const fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}
