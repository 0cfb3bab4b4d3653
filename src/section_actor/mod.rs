//! # Section Actor
//!
//! One actor per prescription list. The actor task exclusively owns the
//! list's [`SectionState`], so no locks are needed around it: every change
//! goes through the mailbox and is applied in order.
//!
//! Fetching a page is the only slow operation. It runs in a spawned task
//! which posts the result back to the mailbox as
//! [`SectionRequest::PageArrived`]. In the meantime the actor keeps
//! answering snapshots, which report the section as loading.

use crate::clients::{PageSource, SectionClient};
use crate::sections::{FetchError, ListKind, Page, PageRequest, SectionState};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum SectionRequest {
    Snapshot {
        respond_to: oneshot::Sender<SectionState>,
    },
    LoadMore {
        respond_to: oneshot::Sender<bool>,
    },
    Retry {
        respond_to: oneshot::Sender<bool>,
    },
    /// Answered once no fetch is in flight.
    WhenSettled {
        respond_to: oneshot::Sender<SectionState>,
    },
    PageArrived {
        request: PageRequest,
        result: Result<Page, FetchError>,
    },
}

pub struct SectionActor {
    receiver: mpsc::Receiver<SectionRequest>,
    // Weak, here and in the fetch tasks, so that dropping every client ends
    // the loop even while a fetch is still pending.
    mailbox: mpsc::WeakSender<SectionRequest>,
    state: SectionState,
    source: Arc<dyn PageSource>,
    page_size: u32,
    settled_waiters: Vec<oneshot::Sender<SectionState>>,
    fetches: Vec<AbortHandle>,
}

impl SectionActor {
    pub fn new(
        kind: ListKind,
        source: Arc<dyn PageSource>,
        page_size: u32,
        buffer_size: usize,
    ) -> (Self, SectionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            mailbox: sender.downgrade(),
            state: SectionState::new(kind),
            source,
            page_size,
            settled_waiters: Vec::new(),
            fetches: Vec::new(),
        };
        (actor, SectionClient::new(kind, sender))
    }

    /// Fetches the first page, then processes messages until every client
    /// is gone. Fetches still in flight at that point are aborted.
    pub async fn run(mut self) {
        let kind = self.state.kind();
        info!(%kind, page_size = self.page_size, "Section actor started");

        if let Some(request) = self.state.pending_request() {
            self.spawn_fetch(request);
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SectionRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.state.clone());
                }
                SectionRequest::LoadMore { respond_to } => {
                    let started = self.state.load_more();
                    debug!(%kind, started = started.is_some(), "LoadMore");
                    let accepted = started.is_some();
                    if let Some(request) = started {
                        self.spawn_fetch(request);
                    }
                    let _ = respond_to.send(accepted);
                }
                SectionRequest::Retry { respond_to } => {
                    let started = self.state.retry();
                    debug!(%kind, started = started.is_some(), "Retry");
                    let accepted = started.is_some();
                    if let Some(request) = started {
                        self.spawn_fetch(request);
                    }
                    let _ = respond_to.send(accepted);
                }
                SectionRequest::WhenSettled { respond_to } => {
                    if self.state.is_loading() {
                        self.settled_waiters.push(respond_to);
                    } else {
                        let _ = respond_to.send(self.state.clone());
                    }
                }
                SectionRequest::PageArrived { request, result } => {
                    match result {
                        Ok(page) => {
                            if self.state.apply_page(&request, page) {
                                info!(
                                    %kind,
                                    size = self.state.items().len(),
                                    total = self.state.total_count(),
                                    "Page loaded"
                                );
                            }
                        }
                        Err(e) => {
                            if self.state.apply_error(&request, e.clone()) {
                                warn!(%kind, error = %e, "Page fetch failed");
                            }
                        }
                    }
                    if !self.state.is_loading() {
                        for waiter in self.settled_waiters.drain(..) {
                            let _ = waiter.send(self.state.clone());
                        }
                    }
                }
            }
        }

        let pending = self.fetches.iter().filter(|f| !f.is_finished()).count();
        for fetch in self.fetches.drain(..) {
            fetch.abort();
        }
        info!(%kind, size = self.state.items().len(), aborted = pending, "Shutdown");
    }

    fn spawn_fetch(&mut self, request: PageRequest) {
        let mailbox = self.mailbox.clone();
        let source = Arc::clone(&self.source);
        let page_size = self.page_size;
        debug!(kind = %request.kind, cursor = ?request.cursor, "Fetching page");
        let handle = tokio::spawn(async move {
            let result = source.fetch_page(&request, page_size).await;
            let Some(mailbox) = mailbox.upgrade() else {
                debug!(kind = %request.kind, "Section gone, dropping page");
                return;
            };
            let _ = mailbox
                .send(SectionRequest::PageArrived { request, result })
                .await;
        });
        self.fetches.retain(|f| !f.is_finished());
        self.fetches.push(handle.abort_handle());
    }
}
