//! In-memory implementation of [`StudentRepository`].

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rollbook_app::ports::StudentRepository;
use rollbook_domain::error::RollbookError;
use rollbook_domain::id::StudentId;
use rollbook_domain::student::Student;

/// Mutable state shared by all clones of the repository handle.
#[derive(Debug, Default)]
struct Store {
    students: BTreeMap<i64, Student>,
    next_id: i64,
}

impl Store {
    fn assign_id(&mut self) -> StudentId {
        self.next_id += 1;
        StudentId::new(self.next_id)
    }
}

/// In-memory student repository.
///
/// Cloning the handle is cheap; all clones share the same store, the same
/// way pooled connections share one database. Identifiers start at 1 and
/// never decrease; saving a record with an explicit id above the counter
/// advances it, so later assignments cannot collide.
#[derive(Debug, Clone, Default)]
pub struct MemoryStudentRepository {
    store: Arc<Mutex<Store>>,
}

impl MemoryStudentRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // The map stays coherent across a poisoning panic.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StudentRepository for MemoryStudentRepository {
    fn save(
        &self,
        mut student: Student,
    ) -> impl Future<Output = Result<Student, RollbookError>> + Send {
        let mut store = self.lock();
        let id = match student.id {
            Some(id) => {
                store.next_id = store.next_id.max(id.as_i64());
                id
            }
            None => store.assign_id(),
        };
        student.id = Some(id);
        store.students.insert(id.as_i64(), student.clone());
        async move { Ok(student) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Student>, RollbookError>> + Send {
        let store = self.lock();
        let result: Vec<Student> = store.students.values().cloned().collect();
        async move { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, RollbookError>> + Send {
        let store = self.lock();
        let result = store.students.get(&id.as_i64()).cloned();
        async move { Ok(result) }
    }

    fn exists_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<bool, RollbookError>> + Send {
        let store = self.lock();
        let result = store.students.contains_key(&id.as_i64());
        async move { Ok(result) }
    }

    fn delete_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<(), RollbookError>> + Send {
        let mut store = self.lock();
        store.students.remove(&id.as_i64());
        async move { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, registration_number: &str) -> Student {
        Student::new(name, registration_number)
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_starting_at_one() {
        let repo = MemoryStudentRepository::new();

        let first = repo.save(student("João", "12345")).await.unwrap();
        let second = repo.save(student("Maria", "67890")).await.unwrap();

        assert_eq!(first.id, Some(StudentId::new(1)));
        assert_eq!(second.id, Some(StudentId::new(2)));
    }

    #[tokio::test]
    async fn should_retrieve_saved_student_by_id() {
        let repo = MemoryStudentRepository::new();
        let saved = repo.save(student("João", "12345")).await.unwrap();
        let id = saved.id.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(fetched.id, Some(id));
        assert_eq!(fetched.name, "João");
        assert_eq!(fetched.registration_number, "12345");
    }

    #[tokio::test]
    async fn should_return_none_when_student_not_found() {
        let repo = MemoryStudentRepository::new();
        let result = repo.get_by_id(StudentId::new(1)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_replace_record_when_saving_same_id() {
        let repo = MemoryStudentRepository::new();
        let mut saved = repo.save(student("João", "12345")).await.unwrap();
        let id = saved.id.unwrap();

        saved.name = "Carlos".to_string();
        repo.save(saved.clone()).await.unwrap();
        repo.save(saved).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Carlos");
        assert_eq!(all[0].id, Some(id));
    }

    #[tokio::test]
    async fn should_not_collide_after_saving_explicit_high_id() {
        let repo = MemoryStudentRepository::new();

        let mut imported = student("Maria", "67890");
        imported.id = Some(StudentId::new(10));
        repo.save(imported).await.unwrap();

        let fresh = repo.save(student("João", "12345")).await.unwrap();
        assert_eq!(fresh.id, Some(StudentId::new(11)));
    }

    #[tokio::test]
    async fn should_list_students_in_ascending_id_order() {
        let repo = MemoryStudentRepository::new();
        repo.save(student("João", "12345")).await.unwrap();
        repo.save(student("Maria", "67890")).await.unwrap();
        repo.save(student("Pedro", "24680")).await.unwrap();

        let all = repo.get_all().await.unwrap();

        let ids: Vec<Option<StudentId>> = all.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                Some(StudentId::new(1)),
                Some(StudentId::new(2)),
                Some(StudentId::new(3)),
            ]
        );
    }

    #[tokio::test]
    async fn should_report_existence_only_for_present_ids() {
        let repo = MemoryStudentRepository::new();
        let saved = repo.save(student("João", "12345")).await.unwrap();

        assert!(repo.exists_by_id(saved.id.unwrap()).await.unwrap());
        assert!(!repo.exists_by_id(StudentId::new(99)).await.unwrap());
    }

    #[tokio::test]
    async fn should_delete_student_by_id() {
        let repo = MemoryStudentRepository::new();
        let saved = repo.save(student("João", "12345")).await.unwrap();
        let id = saved.id.unwrap();

        repo.delete_by_id(id).await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_ignore_delete_of_missing_id() {
        let repo = MemoryStudentRepository::new();
        repo.delete_by_id(StudentId::new(1)).await.unwrap();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_share_store_between_clones() {
        let repo = MemoryStudentRepository::new();
        let other = repo.clone();

        let saved = repo.save(student("João", "12345")).await.unwrap();

        let fetched = other.get_by_id(saved.id.unwrap()).await.unwrap();
        assert!(fetched.is_some());
    }
}
