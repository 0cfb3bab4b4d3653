//! # Order Status
//!
//! An order can hold several line items, each in its own fulfillment state,
//! but a card shows exactly one status badge. [`resolve_status`] picks it by
//! walking [`STATUS_PRIORITY`] once: the most actionable or alarming status
//! present wins.
//!
//! ```rust
//! use pharmacy_recipe::model::{Order, OrderItem, StatusCode};
//! use pharmacy_recipe::orders::{resolve_status, StatusLabel};
//!
//! let order = Order::new("2026-10-19T10:00:00Z", vec![
//!     OrderItem::new(Some("Lisinopril"), None, StatusCode::Shipped),
//!     OrderItem::new(Some("Metformin"), None, StatusCode::ActionRequired),
//! ]);
//! assert_eq!(resolve_status(&order), StatusLabel::Known(StatusCode::ActionRequired));
//! ```

pub mod summary;

pub use summary::*;

use crate::model::{Order, StatusCode};
use std::fmt;

/// Badge precedence, highest first.
pub const STATUS_PRIORITY: [StatusCode; 9] = [
    StatusCode::ActionRequired,
    StatusCode::Cancelled,
    StatusCode::Stopped,
    StatusCode::Delayed,
    StatusCode::Shipped,
    StatusCode::Processing,
    StatusCode::Received,
    StatusCode::Scheduled,
    StatusCode::Miscellaneous,
];

/// The single status badge shown for an order.
///
/// `Unknown` renders as an empty label. It covers orders whose items carry no
/// status from [`STATUS_PRIORITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLabel {
    Known(StatusCode),
    Unknown,
}

impl StatusLabel {
    pub fn code(&self) -> Option<StatusCode> {
        match self {
            StatusLabel::Known(code) => Some(*code),
            StatusLabel::Unknown => None,
        }
    }

    /// Translation key the host can localize with.
    pub fn key(&self) -> &'static str {
        match self.code() {
            Some(StatusCode::ActionRequired) => "orders.status.actionRequired.infoLabel",
            Some(StatusCode::Cancelled) => "orders.status.cancelled.infoLabel",
            Some(StatusCode::Stopped) => "orders.status.stopped.infoLabel",
            Some(StatusCode::Delayed) => "orders.status.delayed.infoLabel",
            Some(StatusCode::Shipped) => "orders.status.shipped.infoLabel",
            Some(StatusCode::Processing) => "orders.status.processing.infoLabel",
            Some(StatusCode::Received) => "orders.status.received.infoLabel",
            Some(StatusCode::Scheduled) => "orders.status.scheduled.infoLabel",
            Some(StatusCode::Miscellaneous) => "orders.status.miscellaneous.infoLabel",
            Some(StatusCode::Unrecognized) | None => "",
        }
    }

    /// Default en-US copy.
    pub fn text(&self) -> &'static str {
        match self.code() {
            Some(StatusCode::ActionRequired) => "Action Required",
            Some(StatusCode::Cancelled) => "Cancelled",
            Some(StatusCode::Stopped) => "Stopped",
            Some(StatusCode::Delayed) => "Delayed",
            Some(StatusCode::Shipped) => "Shipped",
            Some(StatusCode::Processing) => "Processing",
            Some(StatusCode::Received) => "Received",
            Some(StatusCode::Scheduled) => "Scheduled",
            Some(StatusCode::Miscellaneous) => "Miscellaneous",
            Some(StatusCode::Unrecognized) | None => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Picks the badge for `order`: the first entry of [`STATUS_PRIORITY`] that
/// any item carries.
pub fn resolve_status(order: &Order) -> StatusLabel {
    STATUS_PRIORITY
        .iter()
        .copied()
        .find(|code| order.has_status(*code))
        .map(StatusLabel::Known)
        .unwrap_or(StatusLabel::Unknown)
}
