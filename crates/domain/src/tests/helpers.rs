// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Request, RequestStatus, RequestType, Role, ShiftType, User, WorkGroup, Workday};
use time::macros::datetime;
use time::Date;

pub fn create_test_user(id: &str, work_group: WorkGroup, shift: ShiftType) -> User {
    create_department_user(id, "Urgencias", work_group, shift)
}

pub fn create_department_user(
    id: &str,
    department: &str,
    work_group: WorkGroup,
    shift: ShiftType,
) -> User {
    User::new(
        id.to_string(),
        format!("Worker {id}"),
        format!("{id}@hospital.example"),
        Role::Worker,
        shift,
        work_group,
        Workday::Completa,
        department.to_string(),
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
