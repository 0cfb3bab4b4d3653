//! Make-payment form: which amount is being paid, with what, and whether the
//! form can be submitted.

use crate::format;
use crate::model::{Balances, PaymentMethod, PaymentMethods};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// Which amount card is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountChoice {
    /// The past-due balance.
    Due,
    /// The current total balance.
    #[default]
    Total,
    /// A member-entered amount.
    Other,
}

/// Parses `$1,234.56`-style input. `None` when nothing numeric is left.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Reformats the "other amount" field when it loses focus.
///
/// A leading `$` is ignored. Empty input stays as typed (`None`). Input that
/// does not parse is replaced by a `$0.00` placeholder.
pub fn format_other_amount(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }
    let amount = parse_amount(trimmed).unwrap_or(Decimal::ZERO);
    Some(format::currency_usd(amount))
}

/// Payload handed to the account-transactions mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSubmission {
    pub financial_account_resource_id: Option<String>,
    pub payment_method_resource_id: String,
    pub transaction_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentForm {
    balances: Balances,
    choice: AmountChoice,
    other_amount: String,
    method: Option<PaymentMethod>,
}

impl PaymentForm {
    /// Opens the form on the total balance, preloading the preferred method.
    pub fn new(balances: Balances, methods: &PaymentMethods) -> Self {
        Self {
            balances,
            choice: AmountChoice::default(),
            other_amount: String::new(),
            method: methods.preferred().cloned(),
        }
    }

    pub fn choice(&self) -> AmountChoice {
        self.choice
    }

    pub fn method(&self) -> Option<&PaymentMethod> {
        self.method.as_ref()
    }

    pub fn other_amount(&self) -> &str {
        &self.other_amount
    }

    pub fn choose(&mut self, choice: AmountChoice) {
        self.choice = choice;
    }

    pub fn set_other_amount(&mut self, text: impl Into<String>) {
        self.other_amount = text.into();
    }

    /// Applies [`format_other_amount`] to the field.
    pub fn blur_other_amount(&mut self) {
        if let Some(formatted) = format_other_amount(&self.other_amount) {
            self.other_amount = formatted;
        }
    }

    /// Re-syncs with the payment-method query after it changes.
    pub fn refresh_method(&mut self, methods: &PaymentMethods) {
        if let Some(preferred) = methods.preferred() {
            self.method = Some(preferred.clone());
        }
    }

    /// Amount that would be charged for the current choice.
    pub fn amount(&self) -> Option<Decimal> {
        match self.choice {
            AmountChoice::Due => Some(self.balances.past_due()),
            AmountChoice::Total => Some(self.balances.current()),
            AmountChoice::Other => parse_amount(&self.other_amount),
        }
    }

    /// Text of the amount card captions.
    pub fn card_text(&self, choice: AmountChoice) -> String {
        match choice {
            AmountChoice::Due => format::currency_usd(self.balances.past_due()),
            AmountChoice::Total => format::currency_usd(self.balances.current()),
            AmountChoice::Other => "Other amount".to_string(),
        }
    }

    /// A method is required and the chosen amount must be positive.
    pub fn can_submit(&self) -> bool {
        self.method.is_some() && self.amount().is_some_and(|amount| amount > Decimal::ZERO)
    }

    pub fn submission(&self) -> Option<PaymentSubmission> {
        if !self.can_submit() {
            debug!(choice = ?self.choice, "Payment form not ready");
            return None;
        }
        let method = self.method.as_ref()?;
        Some(PaymentSubmission {
            financial_account_resource_id: self.balances.financial_account_id.clone(),
            payment_method_resource_id: method.resource_id.clone(),
            transaction_amount: self.amount()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances() -> Balances {
        Balances {
            financial_account_id: Some("fa_1".into()),
            past_due_amount: Some(Decimal::new(2500, 2)),
            current_balance_amount: Some(Decimal::new(123450, 2)),
        }
    }

    fn with_card() -> PaymentMethods {
        PaymentMethods {
            default_payment_method: Some(PaymentMethod::credit_card("pm_default", "Amex", "0005")),
            selected_payment_method: None,
        }
    }

    #[test]
    fn test_parse_amount_strips_symbols() {
        assert_eq!(parse_amount("$1,234.56"), Some(Decimal::new(123456, 2)));
        assert_eq!(parse_amount(" 12 "), Some(Decimal::new(12, 0)));
        assert_eq!(parse_amount("$"), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_format_other_amount() {
        assert_eq!(format_other_amount("12.5").as_deref(), Some("$12.50"));
        assert_eq!(format_other_amount("$1000").as_deref(), Some("$1,000.00"));
        assert_eq!(format_other_amount("$"), None);
        assert_eq!(format_other_amount("").as_deref(), None);
        assert_eq!(format_other_amount("twelve").as_deref(), Some("$0.00"));
        // Blurring twice keeps the value stable.
        assert_eq!(format_other_amount("$1,000.00").as_deref(), Some("$1,000.00"));
    }

    #[test]
    fn test_selected_method_wins_over_default() {
        let methods = PaymentMethods {
            selected_payment_method: Some(PaymentMethod::echeck("pm_selected", "9999")),
            ..with_card()
        };
        let form = PaymentForm::new(balances(), &methods);
        assert_eq!(form.method().map(|m| m.resource_id.as_str()), Some("pm_selected"));
    }

    #[test]
    fn test_submit_requires_method_and_amount() {
        let mut form = PaymentForm::new(balances(), &PaymentMethods::default());
        assert!(!form.can_submit());

        form.refresh_method(&with_card());
        assert!(form.can_submit());

        form.choose(AmountChoice::Other);
        assert!(!form.can_submit());
        form.set_other_amount("0");
        assert!(!form.can_submit());
        form.set_other_amount("40");
        form.blur_other_amount();
        assert_eq!(form.other_amount(), "$40.00");
        assert!(form.can_submit());
    }

    #[test]
    fn test_negative_other_amount_blocks_submit() {
        let mut form = PaymentForm::new(balances(), &with_card());
        form.choose(AmountChoice::Other);
        form.set_other_amount("-5");
        assert_eq!(form.amount(), Some(Decimal::new(-5, 0)));
        assert!(!form.can_submit());
        assert!(form.submission().is_none());
    }

    #[test]
    fn test_zero_balance_blocks_submit() {
        let empty = Balances::default();
        let form = PaymentForm::new(empty, &with_card());
        assert_eq!(form.choice(), AmountChoice::Total);
        assert!(!form.can_submit());
        assert!(form.submission().is_none());
    }

    #[test]
    fn test_submission_payload() {
        let mut form = PaymentForm::new(balances(), &with_card());
        form.choose(AmountChoice::Due);
        assert_eq!(form.card_text(AmountChoice::Due), "$25.00");
        assert_eq!(form.card_text(AmountChoice::Total), "$1,234.50");

        let submission = form.submission().unwrap();
        assert_eq!(
            submission,
            PaymentSubmission {
                financial_account_resource_id: Some("fa_1".into()),
                payment_method_resource_id: "pm_default".into(),
                transaction_amount: Decimal::new(2500, 2),
            }
        );
    }
}
