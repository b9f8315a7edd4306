use std::fmt;

use admin_directory_client::DirectoryUser;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Identity assigned to every record when it enters the store. Lookups,
/// removals, and UI selection all key on this, never on list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a record came from. Hydration replaces `Directory` records and
/// keeps `Local` ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOrigin {
    Directory,
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    pub origin: RecordOrigin,
    pub name: String,
    pub email: String,
    pub company: String,
}

impl UserRecord {
    pub fn local(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            origin: RecordOrigin::Local,
            name: name.into(),
            email: email.into(),
            company: company.into(),
        }
    }

    pub fn from_directory(user: DirectoryUser) -> Self {
        Self {
            id: RecordId::new(),
            origin: RecordOrigin::Directory,
            name: user.name,
            email: user.email,
            company: user.company,
        }
    }

    pub fn is_local(&self) -> bool {
        self.origin == RecordOrigin::Local
    }
}
