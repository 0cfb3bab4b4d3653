//! Demo: loads both prescription lists from an in-memory backend and logs
//! what the pharmacy screens would show.

use pharmacy_recipe::clients::InMemoryPageSource;
use pharmacy_recipe::config::ListConfig;
use pharmacy_recipe::lifecycle::{setup_tracing, PrescriptionListSystem};
use pharmacy_recipe::model::{Order, PaymentMethods, Prescription, ShippingOption};
use pharmacy_recipe::navigation::{Navigator, RecordingNavigator, Route};
use pharmacy_recipe::orders::OrderSummary;
use pharmacy_recipe::payment::resolve_payment_label;
use pharmacy_recipe::prescriber::mask_phone;
use pharmacy_recipe::sections::ListKind;
use pharmacy_recipe::shipping::ShippingSelection;
use std::sync::Arc;
use tracing::{info, Instrument};

const ORDER_JSON: &str = r#"{
    "creationDate": "2026-10-19T09:30:00Z",
    "orderItems": [
        { "prescriptionDrugName": "Atorvastatin", "originalPrice": 12.5, "orderStatus": "Shipped" },
        { "prescriptionDrugName": null, "originalPrice": 4.25, "orderStatus": "Action Required" }
    ]
}"#;

const SHIPPING_JSON: &str = r#"[
    { "deliveryType": "STANDARD", "cost": { "amount": 0 }, "selected": true },
    { "deliveryType": "TWO_DAY", "cost": { "amount": 15 } },
    { "deliveryType": "OVERNIGHT_PM", "cost": { "amount": 25.99 } }
]"#;

const PAYMENT_JSON: &str = r#"{
    "defaultPaymentMethod": {
        "resourceId": "pm_1",
        "paymentMethodType": "Credit Card",
        "lastFourDigits": "4242",
        "creditCardType": "Visa"
    }
}"#;

fn prescriptions(prefix: &str, names: &[&str]) -> Vec<Prescription> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Prescription::new(format!("{prefix}_{i}"), Some(*name)))
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ListConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting pharmacy demo");

    // Order card
    let order: Order = serde_json::from_str(ORDER_JSON).map_err(|e| e.to_string())?;
    let summary = OrderSummary::from_order(&order);
    info!(
        status = %summary.status,
        title = %summary.title,
        total = %summary.subtitle,
        date = %summary.formatted_date,
        "Order card"
    );

    // Checkout panes
    let options: Vec<ShippingOption> =
        serde_json::from_str(SHIPPING_JSON).map_err(|e| e.to_string())?;
    let selection = ShippingSelection::from_options(options)
        .choose(2)
        .map_err(|e| e.to_string())?;
    let methods: PaymentMethods = serde_json::from_str(PAYMENT_JSON).map_err(|e| e.to_string())?;
    info!(
        shipping = %selection.label(),
        payment = %resolve_payment_label(methods.preferred()),
        "Checkout"
    );
    info!(phone = %mask_phone("5551234567", false), "Prescriber search");

    // Prescription lists
    let source = InMemoryPageSource::new()
        .with_list(
            ListKind::Active,
            prescriptions("active", &["Lisinopril", "Metformin", "Sertraline", "Levothyroxine"]),
        )
        .with_list(ListKind::Archived, prescriptions("archived", &["Amoxicillin"]));

    let mut system = PrescriptionListSystem::new(Arc::new(source), &config);

    let span = tracing::info_span!("prescriptions");
    async {
        let view = system.settled().await.map_err(|e| e.to_string())?;
        for section in &view.sections {
            info!(
                name = %section.name,
                shown = section.items.len(),
                total = section.total_count,
                more = section.has_next_page,
                "Section"
            );
        }

        if system.active.load_more().await.map_err(|e| e.to_string())? {
            let active = system.active.wait_until_settled().await.map_err(|e| e.to_string())?;
            info!(shown = active.items().len(), "Loaded more active prescriptions");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let collapsed = system.toggle_archived();
    let view = system.view().await.map_err(|e| e.to_string())?;
    info!(
        collapsed,
        visible = view.visible_items(ListKind::Archived).len(),
        total = view.archived().total_count,
        "Archived section"
    );

    let navigator = RecordingNavigator::new();
    navigator.navigate(Route::Checkout {
        selected_shipping_index: selection.index(),
    });

    system.shutdown().await.map_err(|e| e.to_string())?;
    info!("Demo finished");
    Ok(())
}
