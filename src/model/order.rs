use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fulfillment status of a single order line item.
///
/// Upstream payloads carry either the code (`"ActionRequired"`) or the display
/// form (`"Action Required"`); both deserialize to the same variant. Anything
/// else lands on [`StatusCode::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    #[serde(alias = "Action Required", alias = "ACTION_REQUIRED")]
    ActionRequired,
    #[serde(alias = "CANCELLED")]
    Cancelled,
    #[serde(alias = "STOPPED")]
    Stopped,
    #[serde(alias = "DELAYED")]
    Delayed,
    #[serde(alias = "SHIPPED")]
    Shipped,
    #[serde(alias = "PROCESSING")]
    Processing,
    #[serde(alias = "RECEIVED")]
    Received,
    #[serde(alias = "SCHEDULED")]
    Scheduled,
    #[serde(alias = "MISCELLANEOUS")]
    Miscellaneous,
    #[serde(other)]
    Unrecognized,
}

/// One prescription line of an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub prescription_drug_name: Option<String>,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    pub order_status: StatusCode,
}

impl OrderItem {
    pub fn new(
        drug_name: Option<&str>,
        original_price: Option<Decimal>,
        order_status: StatusCode,
    ) -> Self {
        Self {
            prescription_drug_name: drug_name.map(str::to_string),
            original_price,
            order_status,
        }
    }
}

/// A purchase made of one or more prescription line items.
///
/// `creation_date` is kept as the raw upstream timestamp; it is only parsed
/// when it is formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub creation_date: String,
    pub order_items: Vec<OrderItem>,
}

impl Order {
    pub fn new(creation_date: impl Into<String>, order_items: Vec<OrderItem>) -> Self {
        Self {
            creation_date: creation_date.into(),
            order_items,
        }
    }

    /// Sum of the item prices. Items without a price count as zero.
    pub fn total(&self) -> Decimal {
        self.order_items
            .iter()
            .map(|item| item.original_price.unwrap_or(Decimal::ZERO))
            .sum()
    }

    pub fn has_status(&self, code: StatusCode) -> bool {
        self.order_items.iter().any(|item| item.order_status == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(raw: &str) -> StatusCode {
        serde_json::from_value(serde_json::Value::String(raw.into())).unwrap()
    }

    #[test]
    fn test_action_required_spellings() {
        assert_eq!(status("Action Required"), StatusCode::ActionRequired);
        assert_eq!(status("ActionRequired"), StatusCode::ActionRequired);
        assert_eq!(status("ACTION_REQUIRED"), StatusCode::ActionRequired);
        assert_eq!(status("SomethingNew"), StatusCode::Unrecognized);
    }

    #[test]
    fn test_order_item_with_display_status() {
        let item: OrderItem = serde_json::from_str(
            r#"{ "prescriptionDrugName": null, "orderStatus": "Action Required" }"#,
        )
        .unwrap();
        assert_eq!(item, OrderItem::new(None, None, StatusCode::ActionRequired));

        let order = Order::new("2026-10-19T09:30:00Z", vec![item]);
        assert!(order.has_status(StatusCode::ActionRequired));
        assert_eq!(order.total(), Decimal::ZERO);
    }
}
