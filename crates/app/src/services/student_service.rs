//! Student service — use-cases for managing student records.

use rollbook_domain::error::{NotFoundError, RollbookError};
use rollbook_domain::id::StudentId;
use rollbook_domain::student::Student;

use crate::ports::StudentRepository;

/// Application service for student CRUD operations.
///
/// Holds no state between calls besides the injected repository; each
/// operation is a single request/response against the port.
pub struct StudentService<R> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new student and return the persisted record, id assigned.
    ///
    /// The input is stored as given: no content validation, and no
    /// uniqueness check on the registration number — two calls with the same
    /// number produce two distinct records.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn register_student(
        &self,
        name: String,
        registration_number: String,
    ) -> Result<Student, RollbookError> {
        self.repo
            .save(Student::new(name, registration_number))
            .await
    }

    /// List all students, in whatever order the repository supplies.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_students(&self) -> Result<Vec<Student>, RollbookError> {
        self.repo.get_all().await
    }

    /// Look up a student by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RollbookError::NotFound`] when no student with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_student(&self, id: StudentId) -> Result<Student, RollbookError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError { id }.into())
    }

    /// Update an existing student's name and registration number.
    ///
    /// The record is fetched, both fields are overwritten in place (again
    /// without validation), and the result is persisted through `save`.
    ///
    /// # Errors
    ///
    /// Returns [`RollbookError::NotFound`] when no student with `id` exists
    /// (in which case no save is attempted), or a storage error from the
    /// repository.
    #[tracing::instrument(skip(self))]
    pub async fn update_student(
        &self,
        id: StudentId,
        name: String,
        registration_number: String,
    ) -> Result<Student, RollbookError> {
        let mut student = self.get_student(id).await?;
        student.name = name;
        student.registration_number = registration_number;
        self.repo.save(student).await
    }

    /// Remove a student by id.
    ///
    /// Existence is checked first; the delete is never issued for an id that
    /// is not present.
    ///
    /// # Errors
    ///
    /// Returns [`RollbookError::NotFound`] when no student with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn remove_student(&self, id: StudentId) -> Result<(), RollbookError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(NotFoundError { id }.into());
        }
        self.repo.delete_by_id(id).await
    }
}
