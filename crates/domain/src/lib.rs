//! # rollbook-domain
//!
//! Pure domain model for the rollbook student-record system.
//!
//! ## Responsibilities
//! - Foundational types: the typed student identifier and error conventions
//! - Define the **Student** entity (a persisted record with a stable id)
//! - Contain no IO and no framework types
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or adapter crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod student;
