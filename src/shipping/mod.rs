//! # Shipping Method Selection
//!
//! The chosen index is the single source of truth. Each option's `selected`
//! flag is derived from it whenever options are handed back, so the flags and
//! the index can never disagree.
//!
//! Two entry points with different failure policies:
//!
//! - [`select_shipping_method`] mutates the selection and fails loudly with
//!   [`ShippingError::InvalidIndex`] when the index is out of range.
//! - [`selected_shipping_summary`] feeds the read-only checkout pane and falls
//!   back to standard shipping instead of failing.
//!
//! The index is threaded explicitly through [`ShippingSelection`] (and the
//! `Checkout` route) rather than kept in shared state.

pub mod error;

pub use error::*;

use crate::format;
use crate::model::{DeliveryType, ShippingOption};
use rust_decimal::Decimal;
use std::fmt;
use tracing::{debug, warn};

/// Display copy for one shipping tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingLabel {
    Standard,
    TwoDay { amount: Option<Decimal> },
    OneDay { amount: Option<Decimal> },
}

impl ShippingLabel {
    /// Unknown or missing delivery types fall back to standard.
    pub fn for_option(option: Option<&ShippingOption>) -> Self {
        match option.map(|o| (o.delivery_type, o.amount())) {
            Some((DeliveryType::TwoDay, amount)) => ShippingLabel::TwoDay { amount },
            Some((DeliveryType::OvernightPm, amount)) => ShippingLabel::OneDay { amount },
            _ => ShippingLabel::Standard,
        }
    }

    /// Translation key prefix, e.g. `checkout.shippingMethod.twoDay`.
    pub fn key(&self) -> &'static str {
        match self {
            ShippingLabel::Standard => "checkout.shippingMethod.standard",
            ShippingLabel::TwoDay { .. } => "checkout.shippingMethod.twoDay",
            ShippingLabel::OneDay { .. } => "checkout.shippingMethod.oneDay",
        }
    }

    /// Option title on the shipping method screen, with the cost when known.
    pub fn label(&self) -> String {
        match self {
            ShippingLabel::Standard => "Standard shipping (free)".to_string(),
            ShippingLabel::TwoDay { amount } => with_amount("2-day shipping", *amount),
            ShippingLabel::OneDay { amount } => with_amount("Overnight shipping", *amount),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ShippingLabel::Standard => "Arrives in 5-7 business days",
            ShippingLabel::TwoDay { .. } => "Arrives in 2 business days",
            ShippingLabel::OneDay { .. } => "Arrives the next business day",
        }
    }

    /// Short form for the checkout summary pane.
    pub fn shipping_label(&self) -> &'static str {
        match self {
            ShippingLabel::Standard => "Standard shipping",
            ShippingLabel::TwoDay { .. } => "2-day shipping",
            ShippingLabel::OneDay { .. } => "Overnight shipping",
        }
    }
}

fn with_amount(base: &str, amount: Option<Decimal>) -> String {
    match amount {
        Some(amount) => format!("{base} ({})", format::currency_usd(amount)),
        None => base.to_string(),
    }
}

impl fmt::Display for ShippingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Selects the option at `chosen_index`.
///
/// Returns the chosen option's label and a fresh copy of `options` where only
/// that option is flagged selected. An empty option list is a no-op for any
/// index and yields the standard label.
///
/// # Errors
/// [`ShippingError::InvalidIndex`] when `chosen_index >= options.len()` on a
/// non-empty list. The input is left untouched.
pub fn select_shipping_method(
    options: &[ShippingOption],
    chosen_index: usize,
) -> Result<(ShippingLabel, Vec<ShippingOption>), ShippingError> {
    if options.is_empty() {
        debug!(chosen_index, "No shipping options offered");
        return Ok((ShippingLabel::Standard, Vec::new()));
    }
    let Some(chosen) = options.get(chosen_index) else {
        warn!(chosen_index, len = options.len(), "Shipping index out of range");
        return Err(ShippingError::InvalidIndex {
            index: chosen_index,
            len: options.len(),
        });
    };

    let label = ShippingLabel::for_option(Some(chosen));
    debug!(chosen_index, delivery_type = ?chosen.delivery_type, "Shipping method selected");
    Ok((label, flag_selected(options, chosen_index)))
}

/// Label for the checkout summary. Out-of-range or missing options fall back
/// to standard shipping.
pub fn selected_shipping_summary(
    options: Option<&[ShippingOption]>,
    chosen_index: usize,
) -> ShippingLabel {
    ShippingLabel::for_option(options.and_then(|options| options.get(chosen_index)))
}

fn flag_selected(options: &[ShippingOption], chosen_index: usize) -> Vec<ShippingOption> {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| ShippingOption {
            selected: i == chosen_index,
            ..option.clone()
        })
        .collect()
}

/// The offered options together with the chosen index.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingSelection {
    options: Vec<ShippingOption>,
    index: usize,
}

impl ShippingSelection {
    /// Starts from the first option the payload flags as selected, else index 0.
    pub fn from_options(options: Vec<ShippingOption>) -> Self {
        let index = options.iter().position(|o| o.selected).unwrap_or(0);
        Self { options, index }
    }

    /// Starts from an index carried over from a previous screen. The index is
    /// only checked when it is used to select.
    pub fn with_index(options: Vec<ShippingOption>, index: usize) -> Self {
        Self { options, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_selected(&self, index: usize) -> bool {
        index == self.index && index < self.options.len()
    }

    /// Returns the selection with `index` chosen; `self` is not modified.
    ///
    /// # Errors
    /// [`ShippingError::InvalidIndex`] as for [`select_shipping_method`].
    pub fn choose(&self, index: usize) -> Result<Self, ShippingError> {
        let (_, options) = select_shipping_method(&self.options, index)?;
        Ok(Self { options, index })
    }

    /// Options with `selected` derived from the current index.
    pub fn options(&self) -> Vec<ShippingOption> {
        flag_selected(&self.options, self.index)
    }

    pub fn label(&self) -> ShippingLabel {
        selected_shipping_summary(Some(self.options.as_slice()), self.index)
    }
}
