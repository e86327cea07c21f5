//! Template drift detection
//!
//! Compares a repository's files with the scaffold manifest of its type:
//! - **missing**: files the type expects that are absent on disk
//! - **unexpected**: files present on disk that belong to another type's
//!   manifest but not to this one
//!
//! Files that no template produces are never reported.

mod analyzer;
mod report;

pub use analyzer::{SyncAnalyzer, analyze_sync};
pub use report::SyncReport;
