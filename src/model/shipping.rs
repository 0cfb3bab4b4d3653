use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Delivery tier offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryType {
    Standard,
    TwoDay,
    OvernightPm,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub amount: Decimal,
}

/// One selectable shipping tier.
///
/// `selected` is what the upstream payload says. Once a selection is made the
/// flag is rewritten from the chosen index, see [`crate::shipping`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    pub delivery_type: DeliveryType,
    #[serde(default)]
    pub cost: Option<Cost>,
    #[serde(default)]
    pub selected: bool,
}

impl ShippingOption {
    pub fn new(delivery_type: DeliveryType, amount: Option<Decimal>) -> Self {
        Self {
            delivery_type,
            cost: amount.map(|amount| Cost { amount }),
            selected: false,
        }
    }

    pub fn amount(&self) -> Option<Decimal> {
        self.cost.map(|cost| cost.amount)
    }
}
