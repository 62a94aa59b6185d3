// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_balance, create_test_request, create_test_user};
use crate::{AssistantReport, analyze, analyze_as_of};
use time::macros::date;
use time::{Date, OffsetDateTime};
use turnos_domain::{Balance, Request, RequestStatus, RequestType, User, WorkGroup};

fn team() -> Vec<User> {
    vec![
        create_test_user("u1", WorkGroup::GrupoLocalizado),
        create_test_user("u2", WorkGroup::GrupoLocalizado),
        create_test_user("u3", WorkGroup::GrupoLocalizado),
        create_test_user("u4", WorkGroup::GrupoLocalizado),
    ]
}

#[test]
fn test_empty_dataset_yields_empty_report() {
    let report: AssistantReport = analyze_as_of(&[], &[], &[], date!(2025 - 06 - 01));

    assert!(report.is_empty());
    assert_eq!(report, AssistantReport::default());
}

#[test]
fn test_overlapping_pending_requests_yield_one_overlap() {
    let requests: Vec<Request> = vec![
        create_test_request(
            "r1",
            "u1",
            RequestType::Vacation,
            date!(2025 - 08 - 01),
            date!(2025 - 08 - 10),
            RequestStatus::Pending,
        ),
        create_test_request(
            "r2",
            "u1",
            RequestType::Vacation,
            date!(2025 - 08 - 08),
            date!(2025 - 08 - 15),
            RequestStatus::Pending,
        ),
    ];

    let report: AssistantReport = analyze_as_of(&requests, &team(), &[], date!(2025 - 06 - 01));

    assert_eq!(report.overlaps.len(), 1);
    assert_eq!(report.overlaps[0].first_request_id, "r1");
    assert_eq!(report.overlaps[0].second_request_id, "r2");
    // both requests belong to u1, yet each counts towards a 4-member group
    let crowded_days: Vec<Date> = report.group_crowding.iter().map(|a| a.date).collect();
    assert_eq!(
        crowded_days,
        vec![
            date!(2025 - 08 - 08),
            date!(2025 - 08 - 09),
            date!(2025 - 08 - 10),
        ]
    );
    assert_eq!(report.crowded_periods.len(), 1);
    assert_eq!(report.crowded_periods[0].start, date!(2025 - 08 - 08));
    assert_eq!(report.crowded_periods[0].end, date!(2025 - 08 - 10));
    assert!(report.permission_accumulation.is_empty());
    assert!(report.vacation_limit.is_empty());
    assert_eq!(report.total_alerts(), 4);
}

#[test]
fn test_low_balance_in_current_year_yields_one_limit_alert() {
    let balances: Vec<Balance> = vec![
        create_test_balance("u1", 8, 2025),
        create_test_balance("u2", 22, 2025),
        create_test_balance("u3", 8, 2024),
    ];

    let report: AssistantReport = analyze_as_of(&[], &team(), &balances, date!(2025 - 06 - 01));

    assert_eq!(report.vacation_limit.len(), 1);
    assert_eq!(report.vacation_limit[0].user_id, "u1");
    assert_eq!(report.vacation_limit[0].days_left, 8);
    assert_eq!(report.total_alerts(), 1);
}

#[test]
fn test_report_combines_every_analyzer() {
    let requests: Vec<Request> = vec![
        create_test_request(
            "v1",
            "u1",
            RequestType::Vacation,
            date!(2025 - 08 - 01),
            date!(2025 - 08 - 15),
            RequestStatus::Approved,
        ),
        create_test_request(
            "v2",
            "u2",
            RequestType::Vacation,
            date!(2025 - 08 - 15),
            date!(2025 - 08 - 15),
            RequestStatus::Pending,
        ),
        create_test_request(
            "p1",
            "u3",
            RequestType::PersonalDay,
            date!(2025 - 09 - 01),
            date!(2025 - 09 - 01),
            RequestStatus::Pending,
        ),
        create_test_request(
            "p2",
            "u3",
            RequestType::PersonalDay,
            date!(2025 - 09 - 08),
            date!(2025 - 09 - 08),
            RequestStatus::Pending,
        ),
        create_test_request(
            "p3",
            "u3",
            RequestType::Leave,
            date!(2025 - 09 - 08),
            date!(2025 - 09 - 09),
            RequestStatus::Approved,
        ),
    ];
    let balances: Vec<Balance> = vec![create_test_balance("u4", 3, 2025)];

    let report: AssistantReport =
        analyze_as_of(&requests, &team(), &balances, date!(2025 - 07 - 01));

    // p2 and p3 share 2025-09-08
    assert_eq!(report.overlaps.len(), 1);
    assert_eq!(report.overlaps[0].user_id, "u3");
    // Two of four members on vacation only on 2025-08-15
    assert_eq!(report.group_crowding.len(), 1);
    assert_eq!(report.group_crowding[0].date, date!(2025 - 08 - 15));
    assert_eq!(report.permission_accumulation.len(), 1);
    assert_eq!(report.permission_accumulation[0].count, 3);
    assert_eq!(report.vacation_limit.len(), 1);
    assert_eq!(report.total_alerts(), 4);
}

#[test]
fn test_analyze_uses_current_year() {
    let year: i32 = OffsetDateTime::now_utc().year();
    let balances: Vec<Balance> = vec![
        create_test_balance("u1", 5, year),
        create_test_balance("u2", 5, year - 1),
    ];

    let report: AssistantReport = analyze(&[], &team(), &balances);

    assert_eq!(report.vacation_limit.len(), 1);
    assert_eq!(report.vacation_limit[0].user_id, "u1");
}

#[test]
fn test_report_serializes_dates_as_iso_strings() {
    let balances: Vec<Balance> = vec![create_test_balance("u1", 8, 2025)];
    let requests: Vec<Request> = vec![
        create_test_request(
            "r1",
            "u1",
            RequestType::Leave,
            date!(2025 - 08 - 01),
            date!(2025 - 08 - 10),
            RequestStatus::Pending,
        ),
        create_test_request(
            "r2",
            "u1",
            RequestType::Leave,
            date!(2025 - 08 - 08),
            date!(2025 - 08 - 15),
            RequestStatus::Pending,
        ),
    ];
    let today: Date = date!(2025 - 06 - 01);

    let report: AssistantReport = analyze_as_of(&requests, &team(), &balances, today);
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["overlaps"][0]["overlapStart"], "2025-08-08");
    assert_eq!(json["vacationLimit"][0]["daysLeft"], 8);
}
