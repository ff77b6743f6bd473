//! # rollbook-adapter-storage-memory
//!
//! In-process, in-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `rollbook-app::ports::storage`
//! - Assign numeric identifiers on first save
//! - Keep records behind a cheaply cloneable shared handle
//!
//! ## Dependency rule
//! Depends on `rollbook-app` (for the port trait) and `rollbook-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod student_repo;

pub use student_repo::MemoryStudentRepository;
