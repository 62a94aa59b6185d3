// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::alerts::VacationLimitAlert;
use crate::directory::UserDirectory;
use tracing::debug;
use turnos_domain::{Balance, User};

/// Remaining vacation days at or below which a balance is flagged.
pub const VACATION_LIMIT_THRESHOLD: u32 = 10;

/// Flags balances of `current_year` with few vacation days left.
///
/// Balances of other years are ignored. Output follows the order of
/// `balances`.
#[must_use]
pub fn detect_vacation_limits(
    balances: &[Balance],
    users: &[User],
    current_year: i32,
) -> Vec<VacationLimitAlert> {
    let directory: UserDirectory<'_> = UserDirectory::new(users);

    let alerts: Vec<VacationLimitAlert> = balances
        .iter()
        .filter(|b| b.year == current_year && b.vacation_days <= VACATION_LIMIT_THRESHOLD)
        .map(|b| {
            let user_name: String = directory.name_of(&b.user_id);
            VacationLimitAlert {
                message: format!(
                    "{user_name} has only {} vacation days left in {}",
                    b.vacation_days, b.year
                ),
                user_id: b.user_id.clone(),
                user_name,
                year: b.year,
                days_left: b.vacation_days,
            }
        })
        .collect();

    debug!(
        alerts = alerts.len(),
        current_year, "Vacation limit analysis complete"
    );
    alerts
}
