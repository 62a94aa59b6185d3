// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;
use turnos_domain::User;

/// Id-indexed view over a user slice.
pub struct UserDirectory<'a> {
    by_id: HashMap<&'a str, &'a User>,
}

impl<'a> UserDirectory<'a> {
    pub fn new(users: &'a [User]) -> Self {
        Self {
            by_id: users.iter().map(|u| (u.id.as_str(), u)).collect(),
        }
    }

    /// Display name for `user_id`; the id itself when the user is unknown.
    pub fn name_of(&self, user_id: &str) -> String {
        self.by_id
            .get(user_id)
            .map_or_else(|| user_id.to_string(), |u| u.name.clone())
    }
}
