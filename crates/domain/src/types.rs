// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date_range::inclusive_days;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// The role a profile plays in the HR system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// A worker who submits requests.
    Worker,
    /// Human resources staff who review requests.
    Hr,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Hr => "hr",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "worker" => Ok(Self::Worker),
            "hr" => Ok(Self::Hr),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

/// Contracted workday length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workday {
    /// Full-time.
    Completa,
    /// Part-time.
    Parcial,
    /// Reduced hours.
    Reducida,
}

impl Workday {
    /// Converts this workday to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completa => "Completa",
            Self::Parcial => "Parcial",
            Self::Reducida => "Reducida",
        }
    }
}

impl FromStr for Workday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Completa" => Ok(Self::Completa),
            "Parcial" => Ok(Self::Parcial),
            "Reducida" => Ok(Self::Reducida),
            _ => Err(DomainError::InvalidWorkday(s.to_string())),
        }
    }
}

/// The shift a worker is assigned to.
///
/// Only the shifts with their own rest-day rules are named. Any other
/// label is kept verbatim in `Other` and follows the default weekend rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShiftType {
    /// On-call shift.
    Localizado,
    /// 24-hour emergency guard rotation.
    Urgente24h,
    /// 12-hour emergency shift.
    Urgente12h,
    /// Scheduled shift.
    Programado,
    /// Any other shift label.
    Other(String),
}

impl ShiftType {
    /// Returns the shift label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Localizado => "Localizado",
            Self::Urgente24h => "Urgente 24h",
            Self::Urgente12h => "Urgente 12h",
            Self::Programado => "Programado",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for ShiftType {
    fn from(label: &str) -> Self {
        match label {
            "Localizado" => Self::Localizado,
            "Urgente 24h" => Self::Urgente24h,
            "Urgente 12h" => Self::Urgente12h,
            "Programado" => Self::Programado,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ShiftType {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<ShiftType> for String {
    fn from(shift: ShiftType) -> Self {
        shift.as_str().to_string()
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The work group a worker belongs to.
///
/// Each named group has a fixed date-range rule (see
/// [`crate::check_work_group_range`]). Labels outside the rule table are
/// kept in `Unassigned`, which accepts any range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkGroup {
    /// `Grupo Localizado`
    GrupoLocalizado,
    /// `Grupo Programado`
    GrupoProgramado,
    /// `Urgente 24h`
    Urgente24h,
    /// `Urgente 12h`
    Urgente12h,
    /// `GES Sala Sanitaria`
    GesSalaSanitaria,
    /// `Top Programado`
    TopProgramado,
    /// `Grupo 1/3`
    GrupoUnTercio,
    /// A group label with no entry in the rule table.
    Unassigned(String),
}

impl WorkGroup {
    /// Returns the group label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::GrupoLocalizado => "Grupo Localizado",
            Self::GrupoProgramado => "Grupo Programado",
            Self::Urgente24h => "Urgente 24h",
            Self::Urgente12h => "Urgente 12h",
            Self::GesSalaSanitaria => "GES Sala Sanitaria",
            Self::TopProgramado => "Top Programado",
            Self::GrupoUnTercio => "Grupo 1/3",
            Self::Unassigned(label) => label,
        }
    }
}

impl From<&str> for WorkGroup {
    fn from(label: &str) -> Self {
        match label {
            "Grupo Localizado" => Self::GrupoLocalizado,
            "Grupo Programado" => Self::GrupoProgramado,
            "Urgente 24h" => Self::Urgente24h,
            "Urgente 12h" => Self::Urgente12h,
            "GES Sala Sanitaria" => Self::GesSalaSanitaria,
            "Top Programado" => Self::TopProgramado,
            "Grupo 1/3" => Self::GrupoUnTercio,
            other => Self::Unassigned(other.to_string()),
        }
    }
}

impl From<String> for WorkGroup {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<WorkGroup> for String {
    fn from(group: WorkGroup) -> Self {
        group.as_str().to_string()
    }
}

impl std::fmt::Display for WorkGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of absence a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestType {
    /// Vacation days.
    Vacation,
    /// A single personal day.
    PersonalDay,
    /// Justified leave.
    Leave,
    /// Shift swap with a replacement worker.
    ShiftChange,
}

impl RequestType {
    /// Converts this request type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vacation => "vacation",
            Self::PersonalDay => "personalDay",
            Self::Leave => "leave",
            Self::ShiftChange => "shiftChange",
        }
    }

    /// Human-readable label used in alert messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vacation => "vacation",
            Self::PersonalDay => "personal day",
            Self::Leave => "leave",
            Self::ShiftChange => "shift change",
        }
    }

    /// Returns whether this type counts as a permission (leave or personal day).
    #[must_use]
    pub const fn is_permission(&self) -> bool {
        matches!(self, Self::Leave | Self::PersonalDay)
    }
}

impl FromStr for RequestType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vacation" => Ok(Self::Vacation),
            "personalDay" => Ok(Self::PersonalDay),
            "leave" => Ok(Self::Leave),
            "shiftChange" => Ok(Self::ShiftChange),
            _ => Err(DomainError::InvalidRequestType(s.to_string())),
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum RequestStatus {
    /// Submitted, awaiting review.
    #[default]
    Pending,
    /// Approved by HR. Final.
    Approved,
    /// Rejected by HR. Final.
    Rejected,
    /// HR asked the worker for more information.
    MoreInfo,
}

impl RequestStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::MoreInfo => "moreInfo",
        }
    }

    /// Returns whether a request in this status still blocks its dates.
    ///
    /// Everything except `Rejected` is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Rejected)
    }

    /// Returns whether a request in this status consumes balance.
    #[must_use]
    pub const fn consumes_balance(&self) -> bool {
        matches!(self, Self::Pending | Self::Approved)
    }

    /// Checks if a review may move a request from this status to `target`.
    ///
    /// Valid transitions are:
    /// - `Pending` → `Approved` | `Rejected` | `MoreInfo`
    /// - `MoreInfo` → `Pending` (the worker resubmits)
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Approved | Self::Rejected | Self::MoreInfo)
                | (Self::MoreInfo, Self::Pending)
        )
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "moreInfo" => Ok(Self::MoreInfo),
            _ => Err(DomainError::InvalidRequestStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A worker or HR profile.
///
/// Users are read-only input to every rule in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Role in the system.
    pub role: Role,
    /// Assigned shift.
    pub shift: ShiftType,
    /// Work group, which decides the legal vacation ranges.
    pub work_group: WorkGroup,
    /// Contracted workday.
    pub workday: Workday,
    /// Department name.
    pub department: String,
    /// Completed years of service.
    pub seniority: u32,
}

impl User {
    /// Creates a new `User`.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `name` - Display name
    /// * `email` - Contact email
    /// * `role` - Role in the system
    /// * `shift` - Assigned shift
    /// * `work_group` - Work group
    /// * `workday` - Contracted workday
    /// * `department` - Department name
    /// * `seniority` - Completed years of service
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        id: String,
        name: String,
        email: String,
        role: Role,
        shift: ShiftType,
        work_group: WorkGroup,
        workday: Workday,
        department: String,
        seniority: u32,
    ) -> Self {
        Self {
            id,
            name,
            email,
            role,
            shift,
            work_group,
            workday,
            department,
            seniority,
        }
    }
}

/// A leave, vacation, personal day or shift change request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Unique identifier.
    pub id: String,
    /// The requesting user.
    pub user_id: String,
    /// The kind of request.
    pub request_type: RequestType,
    /// First day (inclusive).
    pub start_date: Date,
    /// Last day (inclusive). Equal to `start_date` for personal days.
    pub end_date: Date,
    /// Review status.
    pub status: RequestStatus,
    /// Worker-supplied reason.
    pub reason: Option<String>,
    /// HR observations. Editable even after a final decision.
    pub observations: Option<String>,
    /// Supporting document location.
    pub attachment_url: Option<String>,
    /// Replacement worker for shift changes.
    pub replacement_user_id: Option<String>,
    /// Submission timestamp.
    pub created_at: OffsetDateTime,
    /// Last modification timestamp.
    pub updated_at: OffsetDateTime,
}

impl Request {
    /// Creates a new pending `Request` with no optional details.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `user_id` - The requesting user
    /// * `request_type` - The kind of request
    /// * `start_date` - First day (inclusive)
    /// * `end_date` - Last day (inclusive)
    /// * `created_at` - Submission timestamp, also used as `updated_at`
    #[must_use]
    pub const fn new(
        id: String,
        user_id: String,
        request_type: RequestType,
        start_date: Date,
        end_date: Date,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            user_id,
            request_type,
            start_date,
            end_date,
            status: RequestStatus::Pending,
            reason: None,
            observations: None,
            attachment_url: None,
            replacement_user_id: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns this request with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns whether this request still blocks its dates.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Number of calendar days covered, both ends included.
    #[must_use]
    pub fn inclusive_days(&self) -> i64 {
        inclusive_days(self.start_date, self.end_date)
    }

    /// Returns whether `[start, end]` shares at least one day with this request.
    #[must_use]
    pub fn overlaps(&self, start: Date, end: Date) -> bool {
        start <= self.end_date && end >= self.start_date
    }

    /// Returns whether this request starts on `date`.
    #[must_use]
    pub fn starts_on(&self, date: Date) -> bool {
        self.start_date == date
    }

    /// Applies an HR review decision.
    ///
    /// # Arguments
    ///
    /// * `status` - The new status
    /// * `observations` - Replacement observations, if any
    /// * `at` - Review timestamp, stored as `updated_at`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the current status
    /// cannot move to `status`.
    pub fn review(
        &mut self,
        status: RequestStatus,
        observations: Option<String>,
        at: OffsetDateTime,
    ) -> Result<(), DomainError> {
        if !self.status.can_transition_to(status) {
            return Err(DomainError::InvalidStatusTransition {
                request_id: self.id.clone(),
                from: self.status,
                to: status,
            });
        }

        self.status = status;
        if observations.is_some() {
            self.observations = observations;
        }
        self.updated_at = at;
        Ok(())
    }

    /// Replaces the observations. Allowed in every status.
    pub fn update_observations(&mut self, observations: Option<String>, at: OffsetDateTime) {
        self.observations = observations;
        self.updated_at = at;
    }
}

/// Per-user day allotments for one calendar year.
///
/// The engine never decrements a balance; consumption is computed on
/// demand by [`crate::calculate_remaining_balance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Unique identifier.
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// Vacation days.
    pub vacation_days: u32,
    /// Personal days.
    pub personal_days: u32,
    /// Justified leave days.
    pub leave_days: u32,
    /// Calendar year this balance applies to.
    pub year: i32,
}

impl Balance {
    /// Creates a new `Balance`.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `user_id` - Owning user
    /// * `vacation_days` - Vacation days
    /// * `personal_days` - Personal days
    /// * `leave_days` - Justified leave days
    /// * `year` - Calendar year
    #[must_use]
    pub const fn new(
        id: String,
        user_id: String,
        vacation_days: u32,
        personal_days: u32,
        leave_days: u32,
        year: i32,
    ) -> Self {
        Self {
            id,
            user_id,
            vacation_days,
            personal_days,
            leave_days,
            year,
        }
    }
}
