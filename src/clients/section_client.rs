use crate::section_actor::SectionRequest;
use crate::sections::{ListKind, SectionError, SectionState};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for one section actor.
#[derive(Clone)]
pub struct SectionClient {
    kind: ListKind,
    sender: mpsc::Sender<SectionRequest>,
}

impl SectionClient {
    pub fn new(kind: ListKind, sender: mpsc::Sender<SectionRequest>) -> Self {
        Self { kind, sender }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn snapshot(&self) -> Result<SectionState, SectionError> {
        self.request(|respond_to| SectionRequest::Snapshot { respond_to }).await
    }

    /// Asks for the next page. `Ok(false)` when the section is not in a
    /// state that allows it.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn load_more(&self) -> Result<bool, SectionError> {
        let started = self.request(|respond_to| SectionRequest::LoadMore { respond_to }).await?;
        debug!(started, "load_more answered");
        Ok(started)
    }

    /// Re-fetches the failed page. `Ok(false)` unless the section is in error.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn retry(&self) -> Result<bool, SectionError> {
        let started = self.request(|respond_to| SectionRequest::Retry { respond_to }).await?;
        debug!(started, "retry answered");
        Ok(started)
    }

    /// Waits for the in-flight fetch, if any, and returns the resulting state.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn wait_until_settled(&self) -> Result<SectionState, SectionError> {
        self.request(|respond_to| SectionRequest::WhenSettled { respond_to }).await
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> SectionRequest,
    ) -> Result<T, SectionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| SectionError::ActorClosed)?;
        response.await.map_err(|_| SectionError::ActorDropped)
    }
}
