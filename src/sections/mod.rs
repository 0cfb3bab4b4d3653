//! # Prescription List Sections
//!
//! The prescriptions screen shows two independently paginated lists, the
//! active prescriptions and the archived ones. Each list is driven by its own
//! [`SectionState`] machine:
//!
//! ```text
//! Loading --page--> Loaded (empty | non-empty)
//!    |                 |
//!    +--error--> Error |--load_more--> Loading (appends on arrival)
//!                  |
//!                  +--retry--> Loading (same cursor)
//! ```
//!
//! [`build_sections`] merges two snapshots into the pair of
//! [`PrescriptionListSection`]s the screen renders, active first. One
//! section failing never changes the other.

pub mod error;
pub mod merge;
pub mod state;

pub use error::*;
pub use merge::*;
pub use state::*;

use crate::model::Prescription;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Active,
    Archived,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Active => f.write_str("active"),
            ListKind::Archived => f.write_str("archived"),
        }
    }
}

/// One page of a prescription list as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub items: Vec<Prescription>,
    #[serde(default)]
    pub total_count: u32,
    /// Cursor of the following page; `None` on the last page.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Which page of which list to fetch. `cursor` is `None` for the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub kind: ListKind,
    pub cursor: Option<String>,
}

impl PageRequest {
    pub fn first(kind: ListKind) -> Self {
        Self { kind, cursor: None }
    }
}
