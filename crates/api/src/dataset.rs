// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory collections of users, requests and balances.

use crate::error::{ApiError, DatasetError};
use crate::request_response::{BalanceRecord, DatasetRecord, RequestRecord, UserRecord};
use std::collections::HashSet;
use std::hash::Hash;
use std::path::Path;
use tracing::info;
use turnos_domain::{Balance, Request, User};

/// Everything the engine reads, already converted into domain types.
///
/// Users and requests are keyed by their `id`; duplicates are rejected on
/// load. Requests of unknown users are kept, since the analyzers tolerate
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    users: Vec<User>,
    requests: Vec<Request>,
    balances: Vec<Balance>,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts and validates a dataset record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for malformed records, inverted
    /// date ranges, duplicate user or request ids, or a second balance for
    /// the same user and year.
    pub fn from_record(record: &DatasetRecord) -> Result<Self, ApiError> {
        let users: Vec<User> = record
            .users
            .iter()
            .map(UserRecord::to_domain)
            .collect::<Result<_, _>>()?;
        ensure_unique("users", users.iter().map(|u| u.id.as_str()), |id| {
            format!("Duplicate id '{id}'")
        })?;

        let requests: Vec<Request> = record
            .requests
            .iter()
            .map(RequestRecord::to_domain)
            .collect::<Result<_, _>>()?;
        ensure_unique("requests", requests.iter().map(|r| r.id.as_str()), |id| {
            format!("Duplicate id '{id}'")
        })?;

        let balances: Vec<Balance> = record.balances.iter().map(Balance::from).collect();
        ensure_unique(
            "balances",
            balances.iter().map(|b| (b.user_id.as_str(), b.year)),
            |(user_id, year)| format!("Duplicate balance for user '{user_id}' in {year}"),
        )?;

        Ok(Self {
            users,
            requests,
            balances,
        })
    }

    /// Parses a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Json` for malformed JSON and
    /// `DatasetError::Invalid` for records that fail conversion.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let record: DatasetRecord = serde_json::from_str(json)?;
        Ok(Self::from_record(&record)?)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Io` if the file cannot be read, otherwise
    /// the errors of [`Self::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let json: String = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset: Self = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            users = dataset.users.len(),
            requests = dataset.requests.len(),
            balances = dataset.balances.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Converts the dataset back into its record form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if a timestamp cannot be formatted.
    pub fn to_record(&self) -> Result<DatasetRecord, ApiError> {
        Ok(DatasetRecord {
            users: self.users.iter().map(UserRecord::from).collect(),
            requests: self
                .requests
                .iter()
                .map(RequestRecord::from_domain)
                .collect::<Result<_, _>>()?,
            balances: self.balances.iter().map(BalanceRecord::from).collect(),
        })
    }

    /// All users.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All requests.
    #[must_use]
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// All balances.
    #[must_use]
    pub fn balances(&self) -> &[Balance] {
        &self.balances
    }

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if no user has this id.
    pub fn find_user(&self, user_id: &str) -> Result<&User, ApiError> {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("User"),
                message: format!("User '{user_id}' does not exist"),
            })
    }

    /// Finds a request by id for modification.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` if no request has this id.
    pub fn find_request_mut(&mut self, request_id: &str) -> Result<&mut Request, ApiError> {
        self.requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Request"),
                message: format!("Request '{request_id}' does not exist"),
            })
    }

    /// The stored balance of a user for a year, if any.
    #[must_use]
    pub fn balance_for(&self, user_id: &str, year: i32) -> Option<&Balance> {
        self.balances
            .iter()
            .find(|b| b.user_id == user_id && b.year == year)
    }
}

fn ensure_unique<K: Eq + Hash>(
    collection: &str,
    keys: impl Iterator<Item = K>,
    describe: impl Fn(&K) -> String,
) -> Result<(), ApiError> {
    let mut seen: HashSet<K> = HashSet::new();
    for key in keys {
        if let Some(duplicate) = seen.replace(key) {
            return Err(ApiError::InvalidInput {
                field: collection.to_string(),
                message: describe(&duplicate),
            });
        }
    }
    Ok(())
}
