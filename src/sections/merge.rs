use super::{ListKind, SectionState};
use crate::model::Prescription;
use serde::Serialize;

/// What the screen renders for one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionListSection {
    pub name: ListKind,
    pub items: Vec<Prescription>,
    pub total_count: u32,
    pub is_loading: bool,
    pub is_error: bool,
    pub has_next_page: bool,
}

impl From<&SectionState> for PrescriptionListSection {
    fn from(state: &SectionState) -> Self {
        Self {
            name: state.kind(),
            items: state.items().to_vec(),
            total_count: state.total_count(),
            is_loading: state.is_loading(),
            is_error: state.is_error(),
            has_next_page: state.has_next_page(),
        }
    }
}

/// Active section first, archived second. Each is built from its own state
/// only.
pub fn build_sections(
    active: &SectionState,
    archived: &SectionState,
) -> [PrescriptionListSection; 2] {
    [active.into(), archived.into()]
}

/// Both sections plus the archived collapse flag, which belongs to the
/// presentation layer and never influences the section data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionListView {
    pub sections: [PrescriptionListSection; 2],
    pub archived_collapsed: bool,
}

impl PrescriptionListView {
    pub fn new(sections: [PrescriptionListSection; 2], archived_collapsed: bool) -> Self {
        Self {
            sections,
            archived_collapsed,
        }
    }

    pub fn active(&self) -> &PrescriptionListSection {
        &self.sections[0]
    }

    pub fn archived(&self) -> &PrescriptionListSection {
        &self.sections[1]
    }

    /// Rows to draw for a section. A collapsed archived section draws none,
    /// though its header still shows the total count.
    pub fn visible_items(&self, kind: ListKind) -> &[Prescription] {
        match kind {
            ListKind::Active => self.active().items.as_slice(),
            ListKind::Archived if self.archived_collapsed => &[],
            ListKind::Archived => self.archived().items.as_slice(),
        }
    }
}
