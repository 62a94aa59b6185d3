// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::Dataset;
use time::macros::datetime;
use time::OffsetDateTime;

/// Urgencias has three members (u1, u2, u3); u4 works alone in Quirófano.
pub const TEST_DATASET_JSON: &str = r#"{
    "users": [
        {
            "id": "u1", "name": "Ana", "email": "ana@hospital.example",
            "role": "worker", "shift": "Localizado", "workGroup": "Grupo Localizado",
            "workday": "Completa", "department": "Urgencias", "seniority": 27
        },
        {
            "id": "u2", "name": "Luis", "email": "luis@hospital.example",
            "role": "worker", "shift": "Localizado", "workGroup": "Grupo Localizado",
            "workday": "Parcial", "department": "Urgencias", "seniority": 3
        },
        {
            "id": "u3", "name": "Marta", "email": "marta@hospital.example",
            "role": "worker", "shift": "Programado", "workGroup": "Grupo Programado",
            "workday": "Completa", "department": "Urgencias", "seniority": 10
        },
        {
            "id": "u4", "name": "Pablo", "email": "pablo@hospital.example",
            "role": "worker", "shift": "Urgente 24h", "workGroup": "Urgente 24h",
            "workday": "Reducida", "department": "Quirófano"
        },
        {
            "id": "hr1", "name": "Elena", "email": "elena@hospital.example",
            "role": "hr", "shift": "Oficina", "workGroup": "Recursos Humanos",
            "workday": "Completa", "department": "RRHH", "seniority": 12
        }
    ],
    "requests": [
        {
            "id": "r1", "userId": "u1", "type": "vacation",
            "startDate": "2025-08-01", "endDate": "2025-08-15", "status": "approved",
            "createdAt": "2025-06-01T08:30:00Z", "updatedAt": "2025-06-03T10:00:00Z"
        },
        {
            "id": "r2", "userId": "u2", "type": "personalDay",
            "startDate": "2025-09-10", "endDate": "2025-09-10", "status": "pending",
            "reason": "Family matters"
        },
        {
            "id": "r3", "userId": "u3", "type": "vacation",
            "startDate": "2025-07-07", "endDate": "2025-07-13", "status": "rejected"
        },
        {
            "id": "r4", "userId": "u4", "type": "leave",
            "startDate": "2025-10-01", "endDate": "2025-10-02", "status": "moreInfo",
            "attachmentUrl": "https://files.hospital.example/r4.pdf"
        }
    ],
    "balances": [
        {
            "id": "b1", "userId": "u1", "vacationDays": 22, "personalDays": 3,
            "leaveDays": 2, "year": 2025
        },
        {
            "id": "b2", "userId": "u2", "vacationDays": 8, "personalDays": 3, "year": 2025
        }
    ]
}"#;

pub fn create_test_dataset() -> Dataset {
    Dataset::from_json_str(TEST_DATASET_JSON).unwrap()
}

pub fn review_time() -> OffsetDateTime {
    datetime!(2025-07-01 09:00 UTC)
}
