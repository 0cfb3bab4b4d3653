//! # Mock Page Source
//!
//! Scripted [`PageSource`] for testing the list sections without a backend.
//!
//! Expectations are queued per list and consumed in order, so the active and
//! archived actors can fetch concurrently without racing for each other's
//! answers. A gated expectation holds its answer until the test releases it,
//! which makes the loading state observable.
//!
//! ```ignore
//! let mock = Arc::new(MockPageSource::new());
//! mock.expect_page(ListKind::Active).return_ok(page);
//! mock.expect_page(ListKind::Archived).return_err(FetchError::Network("offline".into()));
//!
//! let system = PrescriptionListSystem::new(mock.clone(), &ListConfig::default());
//! // ...
//! mock.verify(); // Ensures all expectations were met
//! ```

use crate::clients::PageSource;
use crate::sections::{FetchError, ListKind, Page, PageRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

struct Expectation {
    kind: ListKind,
    gate: Option<Arc<Notify>>,
    response: Result<Page, FetchError>,
}

#[derive(Default)]
pub struct MockPageSource {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Mutex<Vec<PageRequest>>,
    unexpected: AtomicUsize,
}

impl MockPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one fetch of `kind`.
    pub fn expect_page(&self, kind: ListKind) -> PageExpectationBuilder {
        PageExpectationBuilder {
            kind,
            gate: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<PageRequest> {
        lock(&self.requests).clone()
    }

    /// Verifies that all expectations were met and nothing else was asked.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining.");
        }
        let unexpected = self.unexpected.load(Ordering::SeqCst);
        if unexpected > 0 {
            panic!("Received {unexpected} unexpected request(s): {:?}", self.requests());
        }
    }
}

#[async_trait]
impl PageSource for MockPageSource {
    async fn fetch_page(&self, request: &PageRequest, _page_size: u32) -> Result<Page, FetchError> {
        lock(&self.requests).push(request.clone());

        let expectation = {
            let mut exps = lock(&self.expectations);
            let position = exps.iter().position(|e| e.kind == request.kind);
            position.and_then(|i| exps.remove(i))
        };
        let Some(expectation) = expectation else {
            self.unexpected.fetch_add(1, Ordering::SeqCst);
            return Err(FetchError::Network(format!("unexpected request {request:?}")));
        };

        if let Some(gate) = expectation.gate {
            gate.notified().await;
        }
        expectation.response
    }
}

/// Builder for a page expectation.
pub struct PageExpectationBuilder {
    kind: ListKind,
    gate: Option<Arc<Notify>>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl PageExpectationBuilder {
    /// Holds the answer until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn return_ok(self, page: Page) {
        self.push(Ok(page));
    }

    pub fn return_err(self, error: FetchError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Page, FetchError>) {
        lock(&self.expectations).push_back(Expectation {
            kind: self.kind,
            gate: self.gate,
            response,
        });
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Prescription;

    #[tokio::test]
    async fn test_answers_per_kind_in_order() {
        let mock = MockPageSource::new();
        mock.expect_page(ListKind::Active).return_err(FetchError::Network("offline".into()));
        mock.expect_page(ListKind::Archived).return_ok(Page::default());
        mock.expect_page(ListKind::Active).return_ok(Page {
            items: vec![Prescription::new("rx_1", None)],
            total_count: 1,
            next_cursor: None,
        });

        let archived = mock.fetch_page(&PageRequest::first(ListKind::Archived), 10).await;
        assert_eq!(archived, Ok(Page::default()));
        let first = mock.fetch_page(&PageRequest::first(ListKind::Active), 10).await;
        assert!(first.is_err());
        let second = mock.fetch_page(&PageRequest::first(ListKind::Active), 10).await.unwrap();
        assert_eq!(second.total_count, 1);

        assert_eq!(mock.requests().len(), 3);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "unexpected request")]
    async fn test_unexpected_request_fails_verify() {
        let mock = MockPageSource::new();
        let _ = mock.fetch_page(&PageRequest::first(ListKind::Active), 10).await;
        mock.verify();
    }
}
