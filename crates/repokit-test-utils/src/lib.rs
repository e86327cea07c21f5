//! Shared test utilities for the repokit workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`corpus`]: markdown corpora for search tests
//! - [`repo`]: [`TestRepo`] builder for repository layouts and sidecars

pub mod corpus;
pub mod repo;

pub use repo::TestRepo;
