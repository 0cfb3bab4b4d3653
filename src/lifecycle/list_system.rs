use crate::clients::{PageSource, SectionClient};
use crate::config::ListConfig;
use crate::section_actor::SectionActor;
use crate::sections::{build_sections, ListKind, PrescriptionListView, SectionError};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Runtime host of the prescriptions screen.
///
/// `PrescriptionListSystem` is responsible for:
/// - **Lifecycle Management**: spawning one [`SectionActor`] per list and
///   stopping them again
/// - **Merging**: combining both section snapshots into a
///   [`PrescriptionListView`]
/// - **Presentation state**: the archived section's collapse flag
///
/// # Example
///
/// ```ignore
/// let system = PrescriptionListSystem::new(source, &ListConfig::from_env()?);
/// let view = system.settled().await?;
/// system.archived.load_more().await?;
/// system.shutdown().await?;
/// ```
pub struct PrescriptionListSystem {
    /// Client for the active prescriptions section
    pub active: SectionClient,

    /// Client for the archived prescriptions section
    pub archived: SectionClient,

    archived_collapsed: bool,

    /// Task handles of the section actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PrescriptionListSystem {
    /// Spawns both section actors. Each starts fetching its first page right
    /// away. Must be called from within a Tokio runtime.
    pub fn new(source: Arc<dyn PageSource>, config: &ListConfig) -> Self {
        let (active_actor, active) = SectionActor::new(
            ListKind::Active,
            Arc::clone(&source),
            config.page_size,
            config.buffer_size,
        );
        let (archived_actor, archived) =
            SectionActor::new(ListKind::Archived, source, config.page_size, config.buffer_size);

        let active_handle = tokio::spawn(active_actor.run());
        let archived_handle = tokio::spawn(archived_actor.run());

        Self {
            active,
            archived,
            archived_collapsed: false,
            handles: vec![active_handle, archived_handle],
        }
    }

    pub fn client(&self, kind: ListKind) -> &SectionClient {
        match kind {
            ListKind::Active => &self.active,
            ListKind::Archived => &self.archived,
        }
    }

    pub fn archived_collapsed(&self) -> bool {
        self.archived_collapsed
    }

    /// Flips the archived collapse flag and returns the new value.
    pub fn toggle_archived(&mut self) -> bool {
        self.archived_collapsed = !self.archived_collapsed;
        info!(collapsed = self.archived_collapsed, "Archived section toggled");
        self.archived_collapsed
    }

    /// Current view, including sections that are still loading.
    #[instrument(skip(self))]
    pub async fn view(&self) -> Result<PrescriptionListView, SectionError> {
        let (active, archived) =
            tokio::try_join!(self.active.snapshot(), self.archived.snapshot())?;
        Ok(PrescriptionListView::new(
            build_sections(&active, &archived),
            self.archived_collapsed,
        ))
    }

    /// View once neither section has a fetch in flight.
    #[instrument(skip(self))]
    pub async fn settled(&self) -> Result<PrescriptionListView, SectionError> {
        let (active, archived) = tokio::try_join!(
            self.active.wait_until_settled(),
            self.archived.wait_until_settled()
        )?;
        Ok(PrescriptionListView::new(
            build_sections(&active, &archived),
            self.archived_collapsed,
        ))
    }

    /// Drops both clients and waits for the actors to finish.
    ///
    /// An actor stops once its client is gone and its last in-flight fetch
    /// has reported back.
    pub async fn shutdown(self) -> Result<(), SectionError> {
        info!("Shutting down prescription list...");

        drop(self.active);
        drop(self.archived);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Section task failed: {:?}", e);
                return Err(SectionError::TaskFailed(e.to_string()));
            }
        }

        info!("Prescription list shutdown complete.");
        Ok(())
    }
}
