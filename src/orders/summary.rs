//! Everything an order card displays, derived in one pass.

use super::{resolve_status, StatusLabel};
use crate::format;
use crate::model::Order;
use rust_decimal::Decimal;

/// Shown in place of a drug name the pharmacy did not send.
pub const UNAVAILABLE_DRUG_NAME: &str = "Drug name unavailable";

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub status: StatusLabel,
    pub total: Decimal,
    /// `total` as `$X.XX`.
    pub subtitle: String,
    /// Drug names joined with `", "`.
    pub title: String,
    /// Empty when the creation date does not parse.
    pub formatted_date: String,
}

impl OrderSummary {
    pub fn from_order(order: &Order) -> Self {
        let total = order.total();
        let title = order
            .order_items
            .iter()
            .map(|item| match item.prescription_drug_name.as_deref() {
                Some(name) if !name.is_empty() => name,
                _ => UNAVAILABLE_DRUG_NAME,
            })
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            status: resolve_status(order),
            total,
            subtitle: format::dollars(total),
            title,
            formatted_date: format::medium_date(&order.creation_date),
        }
    }
}
