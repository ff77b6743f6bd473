//! # rollbook-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters must implement (driven/outbound port):
//!   - `StudentRepository` — persistence capabilities for student records
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `StudentService` — register, list, get, update, remove
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `rollbook-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
