//! Collaborators of the list sections: the [`PageSource`] backend seam and
//! the typed [`SectionClient`] wrapper around a section actor's mailbox.

pub mod mock;
pub mod page_source;
pub mod section_client;

pub use page_source::*;
pub use section_client::*;
