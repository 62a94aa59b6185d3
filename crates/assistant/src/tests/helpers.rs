// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;
use time::macros::datetime;
use turnos_domain::{
    Balance, Request, RequestStatus, RequestType, Role, ShiftType, User, WorkGroup, Workday,
};

pub fn create_test_user(id: &str, work_group: WorkGroup) -> User {
    User::new(
        id.to_string(),
        format!("Worker {id}"),
        format!("{id}@hospital.example"),
        Role::Worker,
        ShiftType::Programado,
        work_group,
        Workday::Completa,
        String::from("Urgencias"),
        5,
    )
}

pub fn create_test_request(
    id: &str,
    user_id: &str,
    request_type: RequestType,
    start: Date,
    end: Date,
    status: RequestStatus,
) -> Request {
    Request::new(
        id.to_string(),
        user_id.to_string(),
        request_type,
        start,
        end,
        datetime!(2025-06-01 08:30 UTC),
    )
    .with_status(status)
}

pub fn create_test_balance(user_id: &str, vacation_days: u32, year: i32) -> Balance {
    Balance::new(
        format!("b-{user_id}-{year}"),
        user_id.to_string(),
        vacation_days,
        3,
        0,
        year,
    )
}
