//! Shared test utilities for the bucket workspace.
//!
//! This crate provides standardised fixtures so each crate's tests do not
//! hand-roll repository and bucket layouts. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`repo`]: [`TestRepo`] builder for repositories, buckets and raw records

pub mod repo;

pub use repo::TestRepo;
