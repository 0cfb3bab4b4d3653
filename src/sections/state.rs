use super::{FetchError, ListKind, Page, PageRequest};
use crate::model::Prescription;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionPhase {
    /// A fetch for `cursor` is in flight.
    Loading { cursor: Option<String> },
    /// The fetch for `cursor` failed. Stays here until retried.
    Error {
        cursor: Option<String>,
        error: FetchError,
    },
    Loaded,
}

/// Coarse status used by the screen to pick between spinner, error banner,
/// empty placeholder and the list itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    Loading,
    Error,
    Empty,
    Loaded,
}

/// Pagination state of one list.
///
/// Items are only ever appended, in arrival order of the pages. A page or
/// error is accepted only while loading the cursor it was requested for, so
/// a late answer to an outdated request cannot corrupt the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionState {
    kind: ListKind,
    phase: SectionPhase,
    items: Vec<Prescription>,
    total_count: u32,
    next_cursor: Option<String>,
}

impl SectionState {
    /// A fresh section, loading its first page.
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            phase: SectionPhase::Loading { cursor: None },
            items: Vec::new(),
            total_count: 0,
            next_cursor: None,
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn phase(&self) -> &SectionPhase {
        &self.phase
    }

    pub fn items(&self) -> &[Prescription] {
        &self.items
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SectionPhase::Loading { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self.phase, SectionPhase::Error { .. })
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.phase {
            SectionPhase::Error { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub fn status(&self) -> SectionStatus {
        match self.phase {
            SectionPhase::Loading { .. } => SectionStatus::Loading,
            SectionPhase::Error { .. } => SectionStatus::Error,
            SectionPhase::Loaded if self.items.is_empty() => SectionStatus::Empty,
            SectionPhase::Loaded => SectionStatus::Loaded,
        }
    }

    /// The request the section is currently waiting on.
    pub fn pending_request(&self) -> Option<PageRequest> {
        match &self.phase {
            SectionPhase::Loading { cursor } => Some(PageRequest {
                kind: self.kind,
                cursor: cursor.clone(),
            }),
            _ => None,
        }
    }

    /// Appends `page` if it answers the pending request. Returns whether it
    /// was applied.
    pub fn apply_page(&mut self, request: &PageRequest, page: Page) -> bool {
        if !self.is_pending(request) {
            warn!(kind = %self.kind, cursor = ?request.cursor, "Ignoring stale page");
            return false;
        }
        debug!(kind = %self.kind, received = page.items.len(), "Page applied");
        self.items.extend(page.items);
        self.total_count = page.total_count;
        self.next_cursor = page.next_cursor;
        self.phase = SectionPhase::Loaded;
        true
    }

    /// Records a failed fetch. Already loaded items are kept.
    pub fn apply_error(&mut self, request: &PageRequest, error: FetchError) -> bool {
        if !self.is_pending(request) {
            warn!(kind = %self.kind, cursor = ?request.cursor, "Ignoring stale error");
            return false;
        }
        self.phase = SectionPhase::Error {
            cursor: request.cursor.clone(),
            error,
        };
        true
    }

    /// Starts fetching the next page. Only possible from a loaded section
    /// that has one.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.phase != SectionPhase::Loaded || self.next_cursor.is_none() {
            return None;
        }
        self.phase = SectionPhase::Loading {
            cursor: self.next_cursor.clone(),
        };
        self.pending_request()
    }

    /// Re-requests the page that failed.
    pub fn retry(&mut self) -> Option<PageRequest> {
        let SectionPhase::Error { cursor, .. } = &self.phase else {
            return None;
        };
        self.phase = SectionPhase::Loading {
            cursor: cursor.clone(),
        };
        self.pending_request()
    }

    fn is_pending(&self, request: &PageRequest) -> bool {
        request.kind == self.kind
            && matches!(&self.phase, SectionPhase::Loading { cursor } if *cursor == request.cursor)
    }
}
