//! projdoc-core
//!
//! Pure domain types for project report generation: the placeholder token
//! vocabulary, field sets, student lists and the typed form submission.
//!
//! Shared vocabulary of projdoc. No document or I/O dependency.

pub mod error;
pub mod models;
