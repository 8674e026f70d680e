//! User list search and ordering
//!
//! Pure functions over in-memory user records. Searching is a case-insensitive
//! substring match across the five text fields; ordering is by one field in
//! either direction. Absent fields behave as empty strings in both.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Error type for user list operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Unknown sort field: {0}. Valid fields: firstname, lastname, email, phone, address")]
    UnknownSortField(String),
    #[error("Unknown sort direction: {0}. Valid directions: asc, desc")]
    UnknownSortDirection(String),
}

/// A user as listed in the admin screens
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UserRecord {
    pub id: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UserRecord {
    /// Text fields inspected by [`filter_users`], in display order.
    pub fn searchable_fields(&self) -> [&str; 5] {
        [
            SortField::FirstName.extract(self),
            SortField::LastName.extract(self),
            SortField::Email.extract(self),
            SortField::Phone.extract(self),
            SortField::Address.extract(self),
        ]
    }
}

/// Field a user list can be ordered by
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::FirstName,
        SortField::LastName,
        SortField::Email,
        SortField::Phone,
        SortField::Address,
    ];

    /// Value of this field on `user`, or `""` when absent.
    pub fn extract(self, user: &UserRecord) -> &str {
        let value = match self {
            SortField::FirstName => &user.firstname,
            SortField::LastName => &user.lastname,
            SortField::Email => &user.email,
            SortField::Phone => &user.phone,
            SortField::Address => &user.address,
        };
        value.as_deref().unwrap_or("")
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::FirstName => "firstname",
            SortField::LastName => "lastname",
            SortField::Email => "email",
            SortField::Phone => "phone",
            SortField::Address => "address",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UserError::UnknownSortField(s.to_string()))
    }
}

/// Ordering direction
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(UserError::UnknownSortDirection(other.to_string())),
        }
    }
}

/// Whether any searchable field of `user` contains `search`, ignoring case.
///
/// `search` is expected to be lower-cased already.
fn matches_search(user: &UserRecord, search: &str) -> bool {
    user.searchable_fields()
        .iter()
        .any(|value| value.to_lowercase().contains(search))
}

/// Filter users by a free-text search
///
/// Keeps the records where at least one of firstname, lastname, email, phone
/// or address contains `search`, compared case-insensitively. An empty search
/// keeps every record. Relative order is preserved and the input is left
/// untouched.
pub fn filter_users(users: &[UserRecord], search: &str) -> Vec<UserRecord> {
    let needle = search.to_lowercase();
    users
        .iter()
        .filter(|user| matches_search(user, &needle))
        .cloned()
        .collect()
}

/// Compare two users by `field` in `direction`.
pub fn compare_users(
    a: &UserRecord,
    b: &UserRecord,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    let ordering = field.extract(a).cmp(field.extract(b));
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Return a copy of `users` ordered by `field` in `direction`.
///
/// Comparison is case-sensitive lexicographic ordering of the field value,
/// with absent values treated as the empty string.
pub fn sort_users(
    users: &[UserRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<UserRecord> {
    let mut sorted = users.to_vec();
    sort_users_in_place(&mut sorted, field, direction);
    sorted
}

/// Reorder `users` in place by `field` in `direction`.
pub fn sort_users_in_place(users: &mut [UserRecord], field: SortField, direction: SortDirection) {
    users.sort_by(|a, b| compare_users(a, b, field, direction));
}
