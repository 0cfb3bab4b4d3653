//! Typed destinations of the medications stack.
//!
//! Navigation itself belongs to the host. The crate only decides *where* a
//! flow goes next and with which parameters, and hands a [`Route`] to a
//! [`Navigator`].

use crate::model::{Balances, Order, OrderItem, Prescriber, Prescription, ShippingOption};
use crate::prescriber::PrescriberSearch;
use std::sync::{Mutex, PoisonError};
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    MyMedications,
    PrescriptionsList,
    PrescriptionDetails { prescription: Prescription },
    OrderHistory,
    OrderDetails { order: Order },
    OrderItemDetails { order_item: OrderItem, order: Order },
    /// `place_order_data` is the place-order mutation response, passed through
    /// untouched.
    OrderConfirmation { place_order_data: serde_json::Value },
    Cart,
    Checkout { selected_shipping_index: usize },
    PaymentSuccess,
    Placeholder { title: String },
    ShippingMethod { shipping_options: Vec<ShippingOption> },
    MakePayment { balances: Balances },
    RefillRenewPreorder { prescription: Prescription },
    AddToCartSuccess { prescription: Prescription },
    ConfirmPrescriber {
        prescription: Prescription,
        prescribers: Vec<Prescriber>,
        original_search: Option<PrescriberSearch>,
    },
    SearchPrescriber {
        prescription: Prescription,
        original_search: Option<PrescriberSearch>,
    },
    NoResultsFound {
        prescription: Prescription,
        original_search: Option<PrescriberSearch>,
    },
    UniversalPayment,
    UniversalShippingAddress,
}

impl Route {
    /// Screen identifier as registered with the host navigator.
    pub fn name(&self) -> &'static str {
        match self {
            Route::MyMedications => "my-medications",
            Route::PrescriptionsList => "prescriptions-list",
            Route::PrescriptionDetails { .. } => "prescription-details",
            Route::OrderHistory => "order-history",
            Route::OrderDetails { .. } => "order-details",
            Route::OrderItemDetails { .. } => "order-item-details",
            Route::OrderConfirmation { .. } => "order-confirmation",
            Route::Cart => "cart",
            Route::Checkout { .. } => "checkout",
            Route::PaymentSuccess => "payment-success",
            Route::Placeholder { .. } => "placeholder",
            Route::ShippingMethod { .. } => "shipping-method",
            Route::MakePayment { .. } => "make-payment",
            Route::RefillRenewPreorder { .. } => "refill-renew-preorder",
            Route::AddToCartSuccess { .. } => "add-to-cart-success",
            Route::ConfirmPrescriber { .. } => "confirm-prescriber",
            Route::SearchPrescriber { .. } => "search-prescriber",
            Route::NoResultsFound { .. } => "no-results-found",
            Route::UniversalPayment => "universal-payment",
            Route::UniversalShippingAddress => "universal-shipping-address",
        }
    }
}

/// Fire-and-forget navigation service supplied by the host.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.visited().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        info!(route = route.name(), "Navigate");
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_recording_navigator_keeps_order() {
        let navigator = RecordingNavigator::new();
        navigator.navigate(Route::OrderHistory);
        navigator.navigate(Route::Checkout { selected_shipping_index: 2 });

        let names: Vec<_> = navigator.visited().iter().map(Route::name).collect();
        assert_eq!(names, ["order-history", "checkout"]);
        assert_eq!(navigator.last(), Some(Route::Checkout { selected_shipping_index: 2 }));
    }

    #[test]
    fn test_keeps_recording_after_panic_while_locked() {
        let navigator = Arc::new(RecordingNavigator::new());
        navigator.navigate(Route::Cart);

        let holder = Arc::clone(&navigator);
        let crashed = std::thread::spawn(move || {
            let _guard = holder.visited.lock().unwrap();
            panic!("host crashed mid-navigation");
        })
        .join();
        assert!(crashed.is_err());
        assert!(navigator.visited.is_poisoned());

        navigator.navigate(Route::PaymentSuccess);
        assert_eq!(navigator.visited(), [Route::Cart, Route::PaymentSuccess]);
    }

    #[test]
    fn test_remaining_stack_screens() {
        let prescription = Prescription::new("rx_1", Some("Lipitor"));
        let confirmation = Route::OrderConfirmation {
            place_order_data: serde_json::json!({ "orderId": "ord_1" }),
        };
        let placeholder = Route::Placeholder { title: "Coming soon".into() };
        let added = Route::AddToCartSuccess { prescription };

        assert_eq!(confirmation.name(), "order-confirmation");
        assert_eq!(placeholder.name(), "placeholder");
        assert_eq!(added.name(), "add-to-cart-success");
    }
}
