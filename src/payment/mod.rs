//! # Payment Method Labels
//!
//! [`resolve_payment_label`] turns the optional configured payment method into
//! the caption of the checkout payment pane. A missing method is not an error:
//! it produces the "payment method required" prompt. Unknown method types are
//! treated like cards.
//!
//! The [`amount`] module holds the make-payment form state.

pub mod amount;

pub use amount::*;

use crate::model::{PaymentMethod, PaymentMethodType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentLabel {
    /// No payment method configured.
    Required,
    ECheck { last_four: String },
    Card { card_type: String, last_four: String },
}

impl PaymentLabel {
    pub fn key(&self) -> &'static str {
        match self {
            PaymentLabel::Required => "checkout.paymentMethodRequiredText",
            PaymentLabel::ECheck { .. } => "checkout.echeckPaymentMethodLabel",
            PaymentLabel::Card { .. } => "",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, PaymentLabel::Required)
    }
}

impl fmt::Display for PaymentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentLabel::Required => f.write_str("Payment method required"),
            PaymentLabel::ECheck { last_four } => write!(f, "Account ending in {last_four}"),
            PaymentLabel::Card { card_type, last_four } if card_type.is_empty() => {
                write!(f, "****{last_four}")
            }
            PaymentLabel::Card { card_type, last_four } => write!(f, "{card_type} ****{last_four}"),
        }
    }
}

pub fn resolve_payment_label(method: Option<&PaymentMethod>) -> PaymentLabel {
    let Some(method) = method else {
        return PaymentLabel::Required;
    };
    let last_four = method.last_four_digits.clone();
    match method.payment_method_type {
        PaymentMethodType::ECheck => PaymentLabel::ECheck { last_four },
        PaymentMethodType::CreditCard | PaymentMethodType::Other(_) => PaymentLabel::Card {
            card_type: method.credit_card_type.clone().unwrap_or_default(),
            last_four,
        },
    }
}
