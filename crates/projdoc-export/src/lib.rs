//! projdoc-export
//!
//! Template filling and PDF conversion for project reports.

pub mod assemble;
pub mod convert;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod styles;
pub mod substitute;
