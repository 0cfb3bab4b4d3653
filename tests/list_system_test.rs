use pharmacy_recipe::clients::mock::MockPageSource;
use pharmacy_recipe::clients::InMemoryPageSource;
use pharmacy_recipe::config::ListConfig;
use pharmacy_recipe::lifecycle::PrescriptionListSystem;
use pharmacy_recipe::model::Prescription;
use pharmacy_recipe::sections::{FetchError, ListKind, Page, SectionStatus};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

fn page(prefix: &str, count: usize, total: u32, next: Option<&str>) -> Page {
    Page {
        items: (0..count)
            .map(|i| Prescription::new(format!("{prefix}_{i}"), Some("Lisinopril")))
            .collect(),
        total_count: total,
        next_cursor: next.map(str::to_string),
    }
}

fn ids(items: &[Prescription]) -> Vec<String> {
    items.iter().map(|p| p.resource_id.clone()).collect()
}

/// One section failing while the other is still loading; neither affects
/// the other.
#[tokio::test]
async fn test_sections_load_independently() {
    let mock = Arc::new(MockPageSource::new());
    let gate = Arc::new(Notify::new());
    mock.expect_page(ListKind::Active)
        .gated(gate.clone())
        .return_ok(page("a", 2, 2, None));
    mock.expect_page(ListKind::Archived)
        .return_err(FetchError::Server { status: 500, message: "boom".into() });

    let system = PrescriptionListSystem::new(mock.clone(), &ListConfig::default());

    let archived = system.archived.wait_until_settled().await.unwrap();
    assert_eq!(archived.status(), SectionStatus::Error);

    let view = system.view().await.unwrap();
    assert!(view.active().is_loading);
    assert!(!view.active().is_error);
    assert!(view.archived().is_error);
    assert!(!view.archived().is_loading);

    gate.notify_one();
    let view = system.settled().await.unwrap();
    assert_eq!(ids(&view.active().items), ["a_0", "a_1"]);
    assert!(view.archived().is_error, "Active success must not clear the archived error");

    mock.verify();
    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_retry_refetches_failed_section() {
    let mock = Arc::new(MockPageSource::new());
    mock.expect_page(ListKind::Active).return_ok(page("a", 1, 1, None));
    mock.expect_page(ListKind::Archived).return_err(FetchError::Network("offline".into()));
    mock.expect_page(ListKind::Archived).return_ok(page("z", 3, 3, None));

    let system = PrescriptionListSystem::new(mock.clone(), &ListConfig::default());
    let view = system.settled().await.unwrap();
    assert!(view.archived().is_error);

    // Only an errored section can be retried, and it cannot load more.
    assert!(!system.active.retry().await.unwrap());
    assert!(!system.archived.load_more().await.unwrap());

    assert!(system.archived.retry().await.unwrap());
    let archived = system.archived.wait_until_settled().await.unwrap();
    assert_eq!(archived.status(), SectionStatus::Loaded);
    assert_eq!(archived.total_count(), 3);

    let requests = mock.requests();
    let archived_requests: Vec<_> = requests
        .iter()
        .filter(|r| r.kind == ListKind::Archived)
        .collect();
    assert_eq!(archived_requests.len(), 2);
    assert_eq!(archived_requests[0], archived_requests[1]);

    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_load_more_appends_next_page() {
    let mock = Arc::new(MockPageSource::new());
    mock.expect_page(ListKind::Active).return_ok(page("p1", 2, 3, Some("cursor_2")));
    mock.expect_page(ListKind::Archived).return_ok(Page::default());
    mock.expect_page(ListKind::Active).return_ok(page("p2", 1, 3, None));

    let system = PrescriptionListSystem::new(mock.clone(), &ListConfig::default());
    let view = system.settled().await.unwrap();
    assert!(view.active().has_next_page);
    assert_eq!(view.archived().items.len(), 0);
    assert!(!view.archived().is_loading);

    assert!(system.active.load_more().await.unwrap());
    let active = system.active.wait_until_settled().await.unwrap();
    assert_eq!(ids(active.items()), ["p1_0", "p1_1", "p2_0"]);
    assert!(!active.has_next_page());
    assert!(!system.active.load_more().await.unwrap());

    let last = mock.requests().into_iter().last().unwrap();
    assert_eq!(last.cursor.as_deref(), Some("cursor_2"));

    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_toggling_archived_leaves_active_unchanged() {
    let mock = Arc::new(MockPageSource::new());
    mock.expect_page(ListKind::Active).return_ok(page("a", 2, 2, None));
    mock.expect_page(ListKind::Archived).return_ok(page("z", 4, 4, None));

    let mut system = PrescriptionListSystem::new(mock.clone(), &ListConfig::default());
    let expanded = system.settled().await.unwrap();
    assert!(!expanded.archived_collapsed);

    assert!(system.toggle_archived());
    let collapsed = system.view().await.unwrap();
    assert_eq!(collapsed.active(), expanded.active());
    assert!(collapsed.visible_items(ListKind::Archived).is_empty());
    assert_eq!(collapsed.archived().total_count, 4);

    assert!(!system.toggle_archived());
    assert_eq!(system.view().await.unwrap(), expanded);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_pages_through_in_memory_source() {
    let active: Vec<_> = (0..5).map(|i| Prescription::new(format!("rx_{i}"), None)).collect();
    let source = InMemoryPageSource::new().with_list(ListKind::Active, active);
    let config = ListConfig { page_size: 2, ..ListConfig::default() };

    let system = PrescriptionListSystem::new(Arc::new(source), &config);
    let mut state = system.active.wait_until_settled().await.unwrap();
    while system.active.load_more().await.unwrap() {
        state = system.active.wait_until_settled().await.unwrap();
    }

    assert_eq!(ids(state.items()), ["rx_0", "rx_1", "rx_2", "rx_3", "rx_4"]);
    assert_eq!(state.total_count(), 5);

    let archived = system.archived.wait_until_settled().await.unwrap();
    assert_eq!(archived.status(), SectionStatus::Empty);

    system.shutdown().await.unwrap();
}

/// Leaving the screen while a fetch hangs must not block teardown.
#[tokio::test]
async fn test_shutdown_does_not_wait_for_pending_fetch() {
    let mock = Arc::new(MockPageSource::new());
    let never_released = Arc::new(Notify::new());
    mock.expect_page(ListKind::Active)
        .gated(never_released.clone())
        .return_ok(page("a", 1, 1, None));
    mock.expect_page(ListKind::Archived).return_ok(Page::default());

    let system = PrescriptionListSystem::new(mock.clone(), &ListConfig::default());
    system.archived.wait_until_settled().await.unwrap();
    assert!(system.view().await.unwrap().active().is_loading);

    let result = tokio::time::timeout(Duration::from_secs(2), system.shutdown()).await;
    assert!(
        matches!(result, Ok(Ok(()))),
        "Shutdown should not wait for the hanging fetch"
    );
}
