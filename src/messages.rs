//! Pharmacy landing-page messages: prescription alerts and the balance notice.

use crate::format;
use crate::model::{Balances, PrescriptionAlert};
use crate::navigation::Route;
use crate::orders::UNAVAILABLE_DRUG_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTone {
    Warning,
    Primary,
}

/// Renewals are highlighted as warnings.
pub fn alert_tone(status: &str) -> AlertTone {
    if status == "Renew" {
        AlertTone::Warning
    } else {
        AlertTone::Primary
    }
}

pub fn alert_title(alert: &PrescriptionAlert) -> String {
    let mut status = alert.status.to_lowercase();
    if status == "renew" {
        status = "renewal".to_string();
    }
    if alert.count > 1 {
        return format!("{} prescriptions need {status}", alert.count);
    }
    let name = alert
        .prescription
        .as_ref()
        .and_then(|p| p.drug_name.as_deref())
        .unwrap_or(UNAVAILABLE_DRUG_NAME);
    format!("{name} needs {status}")
}

/// Alerts covering several prescriptions open the list; single ones open the
/// refill/renew flow for that prescription.
pub fn alert_route(alert: &PrescriptionAlert) -> Route {
    match (&alert.prescription, alert.count) {
        (Some(prescription), count) if count <= 1 => Route::RefillRenewPreorder {
            prescription: prescription.clone(),
        },
        _ => Route::PrescriptionsList,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceMessage {
    pub title: String,
    pub route: Route,
}

/// Only shown while there is something to pay.
pub fn balance_message(balances: Option<&Balances>) -> Option<BalanceMessage> {
    let balances = balances?;
    let current = balances.current();
    if current <= rust_decimal::Decimal::ZERO {
        return None;
    }
    Some(BalanceMessage {
        title: format!("You have a balance of {}", format::currency_usd(current)),
        route: Route::MakePayment {
            balances: balances.clone(),
        },
    })
}
