//! # Prescriber Search
//!
//! The search form takes a last name and a phone number. The phone field shows
//! a progressive `(XXX) XXX-XXXX` mask while it is not being edited and the
//! bare digits while it has focus, see [`mask_phone`].
//!
//! After a successful search the flow moves on to confirming a match or to the
//! no-results screen; both carry the original search so the member can come
//! back to an already filled-in form.

use crate::model::{Prescriber, Prescription};
use crate::navigation::Route;
use serde::{Deserialize, Serialize};
use tracing::debug;

const MAX_PHONE_DIGITS: usize = 10;

/// Formats a phone number for display.
///
/// Non-digits are stripped first, which makes the transform idempotent:
/// masking an already masked string gives the same string back.
///
/// ```rust
/// use pharmacy_recipe::prescriber::mask_phone;
///
/// assert_eq!(mask_phone("5551234567", false), "(555) 123-4567");
/// assert_eq!(mask_phone("(555) 123-4567", true), "5551234567");
/// assert_eq!(mask_phone("55", false), "55");
/// ```
pub fn mask_phone(raw: &str, is_focused: bool) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if is_focused {
        return digits;
    }

    let len = digits.len();
    let part = |start: usize, end: usize| &digits[start.min(len)..end.min(len)];

    let mut masked = String::with_capacity(MAX_PHONE_DIGITS + 4);
    if len > 2 {
        masked.push('(');
        masked.push_str(part(0, 3));
        masked.push(')');
    } else {
        masked.push_str(&digits);
    }
    if len > 3 {
        masked.push(' ');
        masked.push_str(part(3, 6));
    }
    if len > 6 {
        masked.push('-');
        masked.push_str(part(6, MAX_PHONE_DIGITS));
    }
    masked
}

/// Query sent to the prescriber search service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriberSearch {
    pub prescriber_last_name: String,
    pub prescriber_phone_number: String,
}

/// State of the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrescriberSearchForm {
    search: PrescriberSearch,
    phone_focused: bool,
}

impl PrescriberSearchForm {
    /// Re-opens the form with a previous search, if any.
    pub fn new(original_search: Option<PrescriberSearch>) -> Self {
        Self {
            search: original_search.unwrap_or_default(),
            phone_focused: false,
        }
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.search.prescriber_last_name = value.into();
    }

    pub fn set_phone_number(&mut self, value: impl Into<String>) {
        self.search.prescriber_phone_number = value.into();
    }

    pub fn focus_phone(&mut self) {
        self.phone_focused = true;
    }

    pub fn end_phone_editing(&mut self) {
        self.phone_focused = false;
    }

    /// Value shown in the phone input.
    pub fn phone_display(&self) -> String {
        mask_phone(&self.search.prescriber_phone_number, self.phone_focused)
    }

    pub fn search(&self) -> &PrescriberSearch {
        &self.search
    }
}

/// Where to go once the search service answered.
pub fn search_outcome_route(
    prescription: Prescription,
    search: PrescriberSearch,
    prescribers: Vec<Prescriber>,
) -> Route {
    debug!(matches = prescribers.len(), "Prescriber search finished");
    if prescribers.is_empty() {
        Route::NoResultsFound {
            prescription,
            original_search: Some(search),
        }
    } else {
        Route::ConfirmPrescriber {
            prescription,
            prescribers,
            original_search: Some(search),
        }
    }
}
