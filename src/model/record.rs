//! Base persisted record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common fields embedded by persisted entities.
///
/// The id stays nil until a persistence layer or id generator assigns it;
/// [`Record::new`] only stamps the timestamps, both from a single `now` so
/// a freshly created record has `created_at == updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record {
    /// A record with both timestamps stamped to the current UTC time.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Assign a generated identity.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Bump `updated_at` to the current UTC time.
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
