use pharmacy_recipe::messages::{alert_route, alert_title, balance_message};
use pharmacy_recipe::model::{
    Balances, Order, PaymentMethods, PrescriptionAlert, ShippingOption, StatusCode,
};
use pharmacy_recipe::navigation::{Navigator, RecordingNavigator, Route};
use pharmacy_recipe::orders::{OrderSummary, StatusLabel};
use pharmacy_recipe::payment::{resolve_payment_label, AmountChoice, PaymentForm};
use pharmacy_recipe::shipping::{ShippingError, ShippingLabel, ShippingSelection};
use rust_decimal::Decimal;
use serde_json::json;

fn order() -> Order {
    serde_json::from_value(json!({
        "creationDate": "2026-10-19T09:30:00Z",
        "orderItems": [
            {
                "prescriptionDrugName": "Atorvastatin",
                "originalPrice": "12.50",
                "orderStatus": "Shipped"
            },
            { "originalPrice": "4.25", "orderStatus": "Delayed" },
            { "prescriptionDrugName": "Metformin", "orderStatus": "SomethingNew" }
        ]
    }))
    .expect("Failed to parse order")
}

fn shipping_options() -> Vec<ShippingOption> {
    serde_json::from_value(json!([
        { "deliveryType": "STANDARD", "cost": { "amount": "0" }, "selected": true },
        { "deliveryType": "TWO_DAY", "cost": { "amount": "15.00" } },
        { "deliveryType": "OVERNIGHT_PM", "cost": { "amount": "25.99" } }
    ]))
    .expect("Failed to parse shipping options")
}

/// Order history card built straight from the upstream payload.
#[test]
fn test_order_card_from_payload() {
    let order = order();
    assert_eq!(order.order_items[2].order_status, StatusCode::Unrecognized);

    let summary = OrderSummary::from_order(&order);
    assert_eq!(summary.status, StatusLabel::Known(StatusCode::Delayed));
    assert_eq!(summary.status.to_string(), "Delayed");
    assert_eq!(summary.title, "Atorvastatin, Drug name unavailable, Metformin");
    assert_eq!(summary.subtitle, "$16.75");
    assert_eq!(summary.formatted_date, "Oct 19, 2026");
}

/// Cart -> shipping method screen -> back to checkout with the chosen index.
#[test]
fn test_checkout_shipping_and_payment() {
    let navigator = RecordingNavigator::new();

    let selection = ShippingSelection::from_options(shipping_options());
    assert_eq!(selection.index(), 0);
    assert_eq!(selection.label(), ShippingLabel::Standard);
    navigator.navigate(Route::ShippingMethod {
        shipping_options: selection.options(),
    });

    let chosen = selection.choose(1).expect("Index 1 is offered");
    let flags: Vec<bool> = chosen.options().iter().map(|o| o.selected).collect();
    assert_eq!(flags, [false, true, false]);
    assert_eq!(chosen.label().to_string(), "2-day shipping ($15.00)");
    assert_eq!(
        selection.choose(3),
        Err(ShippingError::InvalidIndex { index: 3, len: 3 })
    );
    navigator.navigate(Route::Checkout {
        selected_shipping_index: chosen.index(),
    });

    let methods: PaymentMethods = serde_json::from_value(json!({
        "defaultPaymentMethod": {
            "resourceId": "pm_1",
            "paymentMethodType": "Credit Card",
            "lastFourDigits": "4242",
            "creditCardType": "Visa"
        }
    }))
    .unwrap();
    assert_eq!(resolve_payment_label(methods.preferred()).to_string(), "Visa ****4242");
    assert!(resolve_payment_label(PaymentMethods::default().preferred()).is_required());

    let names: Vec<_> = navigator.visited().iter().map(Route::name).collect();
    assert_eq!(names, ["shipping-method", "checkout"]);
    assert_eq!(
        navigator.last(),
        Some(Route::Checkout { selected_shipping_index: 1 })
    );
}

/// Landing page balance notice -> make payment -> submission payload.
#[test]
fn test_balance_to_payment_submission() {
    let balances: Balances = serde_json::from_value(json!({
        "financialAccountId": "fa_7",
        "pastDueAmount": "10.00",
        "currentBalanceAmount": "57.30"
    }))
    .unwrap();

    let message = balance_message(Some(&balances)).expect("Balance is owed");
    assert_eq!(message.title, "You have a balance of $57.30");
    let Route::MakePayment { balances } = message.route else {
        panic!("Expected MakePayment route");
    };

    let methods: PaymentMethods = serde_json::from_value(json!({
        "selectedPaymentMethod": {
            "resourceId": "pm_check",
            "paymentMethodType": "ECheck",
            "lastFourDigits": "6789"
        }
    }))
    .unwrap();
    let mut form = PaymentForm::new(balances, &methods);
    form.choose(AmountChoice::Other);
    form.set_other_amount("20");
    form.blur_other_amount();
    assert_eq!(form.other_amount(), "$20.00");

    let submission = form.submission().expect("Form is complete");
    assert_eq!(submission.transaction_amount, Decimal::new(20, 0));
    let payload = serde_json::to_value(&submission).unwrap();
    assert_eq!(payload["financialAccountResourceId"], "fa_7");
    assert_eq!(payload["paymentMethodResourceId"], "pm_check");
}

#[test]
fn test_prescription_alert_flow() {
    let alert: PrescriptionAlert = serde_json::from_value(json!({
        "status": "Renew",
        "count": 1,
        "prescription": { "resourceId": "rx_1", "drugName": "Sertraline" }
    }))
    .unwrap();
    assert_eq!(alert_title(&alert), "Sertraline needs renewal");
    assert_eq!(alert_route(&alert).name(), "refill-renew-preorder");
}
