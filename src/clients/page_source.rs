use crate::model::Prescription;
use crate::sections::{FetchError, ListKind, Page, PageRequest};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// Backend that serves prescription list pages.
///
/// The host implements this on top of its own networking; the crate never
/// fetches anything itself.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest, page_size: u32) -> Result<Page, FetchError>;
}

/// Serves fixed lists, paging with offset cursors.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPageSource {
    lists: HashMap<ListKind, Vec<Prescription>>,
}

impl InMemoryPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, kind: ListKind, items: Vec<Prescription>) -> Self {
        self.lists.insert(kind, items);
        self
    }
}

#[async_trait]
impl PageSource for InMemoryPageSource {
    async fn fetch_page(&self, request: &PageRequest, page_size: u32) -> Result<Page, FetchError> {
        let items = self.lists.get(&request.kind).map(Vec::as_slice).unwrap_or_default();
        let offset = match &request.cursor {
            None => 0,
            Some(cursor) => cursor
                .parse::<usize>()
                .map_err(|e| FetchError::Decode(format!("cursor {cursor:?}: {e}")))?,
        };
        let end = offset.saturating_add(page_size as usize).min(items.len());
        let start = offset.min(end);
        debug!(kind = %request.kind, start, end, "Serving page");

        Ok(Page {
            items: items[start..end].to_vec(),
            total_count: items.len() as u32,
            next_cursor: (end < items.len()).then(|| end.to_string()),
        })
    }
}
