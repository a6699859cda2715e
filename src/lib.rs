//! Clinic patient records core.
//!
//! Three pieces with real contracts: the [`repository`] abstraction over
//! remote and in-memory patient stores, the [`coordinator`] that keeps an
//! observable cache consistent with whichever store is injected, and the
//! [`analytics`] engine that groups patients by the significant terms of
//! their diagnosis text. Screens and navigation are somebody else's
//! problem; they call in here and render the results.

pub mod analytics;
pub mod config;
pub mod coordinator;
pub mod models;
pub mod repository;
