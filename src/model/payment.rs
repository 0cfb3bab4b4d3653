use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of stored payment method. Types this crate does not know keep their
/// upstream name in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethodType {
    ECheck,
    CreditCard,
    Other(String),
}

impl From<String> for PaymentMethodType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ECheck" => PaymentMethodType::ECheck,
            "Credit Card" | "CreditCard" => PaymentMethodType::CreditCard,
            _ => PaymentMethodType::Other(value),
        }
    }
}

impl From<PaymentMethodType> for String {
    fn from(value: PaymentMethodType) -> Self {
        match value {
            PaymentMethodType::ECheck => "ECheck".to_string(),
            PaymentMethodType::CreditCard => "Credit Card".to_string(),
            PaymentMethodType::Other(name) => name,
        }
    }
}

/// A stored payment method as returned by the payment-method query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(default)]
    pub resource_id: String,
    pub payment_method_type: PaymentMethodType,
    #[serde(default)]
    pub last_four_digits: String,
    #[serde(default)]
    pub credit_card_type: Option<String>,
}

impl PaymentMethod {
    pub fn credit_card(
        resource_id: impl Into<String>,
        card_type: impl Into<String>,
        last_four: impl Into<String>,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            payment_method_type: PaymentMethodType::CreditCard,
            last_four_digits: last_four.into(),
            credit_card_type: Some(card_type.into()),
        }
    }

    pub fn echeck(resource_id: impl Into<String>, last_four: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
            payment_method_type: PaymentMethodType::ECheck,
            last_four_digits: last_four.into(),
            credit_card_type: None,
        }
    }
}

/// Result of the payment-method query: the account default and whatever the
/// member picked during this session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethods {
    #[serde(default)]
    pub default_payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub selected_payment_method: Option<PaymentMethod>,
}

impl PaymentMethods {
    /// The session selection wins over the account default.
    pub fn preferred(&self) -> Option<&PaymentMethod> {
        self.selected_payment_method
            .as_ref()
            .or(self.default_payment_method.as_ref())
    }
}

/// Pharmacy account balances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    #[serde(default)]
    pub financial_account_id: Option<String>,
    #[serde(default)]
    pub past_due_amount: Option<Decimal>,
    #[serde(default)]
    pub current_balance_amount: Option<Decimal>,
}

impl Balances {
    pub fn past_due(&self) -> Decimal {
        self.past_due_amount.unwrap_or(Decimal::ZERO)
    }

    pub fn current(&self) -> Decimal {
        self.current_balance_amount.unwrap_or(Decimal::ZERO)
    }
}
