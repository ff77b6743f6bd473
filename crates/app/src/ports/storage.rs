//! Storage port — the repository trait for student persistence.

use std::future::Future;

use rollbook_domain::error::RollbookError;
use rollbook_domain::id::StudentId;
use rollbook_domain::student::Student;

/// Repository for persisting and querying [`Student`]s.
///
/// `save` is an upsert: a student without an id is inserted and receives one;
/// saving an already-persisted student with the same id is idempotent.
pub trait StudentRepository {
    /// Persist a student, assigning an id on first save.
    fn save(
        &self,
        student: Student,
    ) -> impl Future<Output = Result<Student, RollbookError>> + Send;

    /// Get all students, in whatever order the adapter supplies.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Student>, RollbookError>> + Send;

    /// Get a student by its unique identifier. `None` signals absence.
    fn get_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, RollbookError>> + Send;

    /// Whether a record with the given id exists.
    fn exists_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<bool, RollbookError>> + Send;

    /// Delete a record by its unique identifier.
    ///
    /// Behavior for an id that is not present is adapter-defined; callers
    /// guard with [`StudentRepository::exists_by_id`] first.
    fn delete_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<(), RollbookError>> + Send;
}
