//! Runtime orchestration and lifecycle management.
//!
//! - [`PrescriptionListSystem`] - spawns and stops the section actors and
//!   merges their snapshots
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod list_system;
pub mod tracing;

pub use list_system::*;
pub use tracing::*;
