// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_dataset;
use crate::{
    ApiError, AssistantReport, Dataset, DateRangeRecord, SuggestAlternativesRequest,
    SuggestionsResponse, ValidatePersonalDayRequest, ValidateShiftChangeRequest,
    ValidateVacationRequest, ValidationResponse, run_assistant, suggest_alternatives,
    validate_personal_day, validate_shift_change, validate_vacation,
};
use time::macros::date;

fn vacation(user_id: &str, start: &str, end: &str) -> ValidateVacationRequest {
    ValidateVacationRequest {
        user_id: user_id.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
    }
}

fn personal_day(user_id: &str, date: &str) -> ValidatePersonalDayRequest {
    ValidatePersonalDayRequest {
        user_id: user_id.to_string(),
        date: date.to_string(),
    }
}

fn shift_change(
    user_id: &str,
    replacement_user_id: &str,
    start: &str,
    return_date: &str,
) -> ValidateShiftChangeRequest {
    ValidateShiftChangeRequest {
        user_id: user_id.to_string(),
        replacement_user_id: replacement_user_id.to_string(),
        start_date: start.to_string(),
        return_date: return_date.to_string(),
    }
}

// ============================================================================
// Vacation
// ============================================================================

#[test]
fn test_quincena_vacation_is_valid() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse =
        validate_vacation(&dataset, &vacation("u2", "2025-08-01", "2025-08-15")).unwrap();

    assert!(response.valid);
    assert_eq!(response.message, "Vacation request is valid");
}

#[test]
fn test_vacation_across_quincenas_is_rejected() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse =
        validate_vacation(&dataset, &vacation("u2", "2025-08-05", "2025-08-19")).unwrap();

    assert!(!response.valid);
    assert!(response.message.contains("quincena"));
}

#[test]
fn test_vacation_overlapping_approved_request_is_rejected() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse =
        validate_vacation(&dataset, &vacation("u1", "2025-08-01", "2025-08-15")).unwrap();

    assert!(!response.valid);
    assert!(response.message.contains("r1"));
}

#[test]
fn test_rejected_request_does_not_block_dates() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse =
        validate_vacation(&dataset, &vacation("u3", "2025-07-07", "2025-07-13")).unwrap();

    assert!(response.valid);
}

#[test]
fn test_vacation_starting_on_saturday_is_rejected() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse =
        validate_vacation(&dataset, &vacation("u3", "2025-08-02", "2025-08-05")).unwrap();

    assert!(!response.valid);
    assert!(response.message.contains("rest day"));
}

#[test]
fn test_urgente_24h_durations() {
    let dataset: Dataset = create_test_dataset();

    let five_days: ValidationResponse =
        validate_vacation(&dataset, &vacation("u4", "2025-03-03", "2025-03-07")).unwrap();
    let thirty_two_days: ValidationResponse =
        validate_vacation(&dataset, &vacation("u4", "2025-03-01", "2025-04-01")).unwrap();

    assert!(!five_days.valid);
    assert!(thirty_two_days.valid);
}

#[test]
fn test_inverted_vacation_range_is_invalid_input() {
    let dataset: Dataset = create_test_dataset();

    let err: ApiError =
        validate_vacation(&dataset, &vacation("u2", "2025-08-15", "2025-08-01")).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "endDate"));
}

#[test]
fn test_malformed_vacation_date_is_invalid_input() {
    let dataset: Dataset = create_test_dataset();

    let err: ApiError =
        validate_vacation(&dataset, &vacation("u2", "2025-13-01", "2025-08-01")).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "startDate"));
}

#[test]
fn test_unknown_user_is_not_found() {
    let dataset: Dataset = create_test_dataset();

    let err: ApiError =
        validate_vacation(&dataset, &vacation("ghost", "2025-08-01", "2025-08-15")).unwrap_err();

    assert_eq!(
        err,
        ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: String::from("User 'ghost' does not exist"),
        }
    );
}

// ============================================================================
// Personal day
// ============================================================================

#[test]
fn test_personal_day_on_free_day_is_valid() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse =
        validate_personal_day(&dataset, &personal_day("u3", "2025-09-11")).unwrap();

    assert!(response.valid);
}

#[test]
fn test_personal_day_rejected_when_department_is_short() {
    let dataset: Dataset = create_test_dataset();

    // u2 already takes 2025-09-10 off: one of three in Urgencias
    let response: ValidationResponse =
        validate_personal_day(&dataset, &personal_day("u3", "2025-09-10")).unwrap();

    assert!(!response.valid);
    assert_eq!(
        response.message,
        "33% of Urgencias is already absent on that day (maximum 10%)"
    );
}

#[test]
fn test_second_request_on_same_day_is_rejected() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse =
        validate_personal_day(&dataset, &personal_day("u2", "2025-09-10")).unwrap();

    assert!(!response.valid);
    assert_eq!(response.message, "You already have a request on 2025-09-10");
}

#[test]
fn test_personal_day_in_other_department_is_unaffected() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse =
        validate_personal_day(&dataset, &personal_day("u4", "2025-09-10")).unwrap();

    assert!(response.valid);
}

// ============================================================================
// Shift change
// ============================================================================

#[test]
fn test_shift_change_between_colleagues_is_valid() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse = validate_shift_change(
        &dataset,
        &shift_change("u1", "u2", "2025-09-01", "2025-09-03"),
    )
    .unwrap();

    assert!(response.valid);
    assert_eq!(response.message, "Shift change request is valid");
}

#[test]
fn test_shift_change_with_busy_replacement_is_rejected() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse = validate_shift_change(
        &dataset,
        &shift_change("u1", "u2", "2025-09-01", "2025-09-10"),
    )
    .unwrap();

    assert!(!response.valid);
    assert_eq!(response.message, "Luis already has a request on 2025-09-10");
}

#[test]
fn test_shift_change_with_other_shift_is_rejected() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse = validate_shift_change(
        &dataset,
        &shift_change("u1", "u3", "2025-09-01", "2025-09-03"),
    )
    .unwrap();

    assert!(!response.valid);
    assert!(response.message.contains("shift"));
}

#[test]
fn test_shift_change_returning_before_start_is_rejected() {
    let dataset: Dataset = create_test_dataset();

    let response: ValidationResponse = validate_shift_change(
        &dataset,
        &shift_change("u1", "u2", "2025-09-03", "2025-09-03"),
    )
    .unwrap();

    assert!(!response.valid);
}

#[test]
fn test_shift_change_with_unknown_replacement_is_not_found() {
    let dataset: Dataset = create_test_dataset();

    let err: ApiError = validate_shift_change(
        &dataset,
        &shift_change("u1", "ghost", "2025-09-01", "2025-09-03"),
    )
    .unwrap_err();

    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

// ============================================================================
// Suggestions and assistant
// ============================================================================

#[test]
fn test_suggestions_skip_blocked_quincenas() {
    let dataset: Dataset = create_test_dataset();
    let request: SuggestAlternativesRequest = SuggestAlternativesRequest {
        user_id: String::from("u2"),
        start_date: String::from("2025-08-05"),
        end_date: String::from("2025-08-19"),
    };

    let response: SuggestionsResponse =
        suggest_alternatives(&dataset, &request, date!(2025 - 07 - 01)).unwrap();

    // 16-30 Aug is not a full quincena; 1-15 Sep holds u2's personal day
    let ranges: Vec<(&str, &str)> = response
        .suggestions
        .iter()
        .map(|r: &DateRangeRecord| (r.start_date.as_str(), r.end_date.as_str()))
        .collect();
    assert_eq!(
        ranges,
        vec![
            ("2025-08-01", "2025-08-15"),
            ("2025-09-16", "2025-09-30"),
            ("2025-10-01", "2025-10-15"),
        ]
    );
}

#[test]
fn test_suggestions_for_fixed_duration_group_are_empty() {
    let dataset: Dataset = create_test_dataset();
    let request: SuggestAlternativesRequest = SuggestAlternativesRequest {
        user_id: String::from("u4"),
        start_date: String::from("2025-03-03"),
        end_date: String::from("2025-03-07"),
    };

    let response: SuggestionsResponse =
        suggest_alternatives(&dataset, &request, date!(2025 - 01 - 01)).unwrap();

    assert!(response.suggestions.is_empty());
}

#[test]
fn test_run_assistant_over_dataset() {
    let dataset: Dataset = create_test_dataset();

    let report: AssistantReport = run_assistant(&dataset, date!(2025 - 07 - 01));

    assert!(report.overlaps.is_empty());
    assert!(report.permission_accumulation.is_empty());
    // u2 has 8 vacation days left in 2025
    assert_eq!(report.vacation_limit.len(), 1);
    assert_eq!(report.vacation_limit[0].user_name, "Luis");
    // u1 alone on vacation in a two-member group: 1 >= ceil(2 / 2)
    assert_eq!(report.group_crowding.len(), 15);
    assert_eq!(report.crowded_periods.len(), 1);
    assert_eq!(report.total_alerts(), 16);
}
