//! Student — a persisted student record with a stable identity.

use serde::{Deserialize, Serialize};

use crate::id::StudentId;

/// A student record.
///
/// `id` is `None` until the persistence layer assigns one on first save.
/// Neither `name` nor `registration_number` is validated here: the
/// registration number is an external identifier this core only stores, and
/// uniqueness is not enforced at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Option<StudentId>,
    pub name: String,
    pub registration_number: String,
}

impl Student {
    /// Create an unpersisted student with the given name and registration number.
    #[must_use]
    pub fn new(name: impl Into<String>, registration_number: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            registration_number: registration_number.into(),
        }
    }
}
