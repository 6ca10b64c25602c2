//! NotificationHelper behaviour against the in-memory notification service

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use perf_notifier::application::NotificationHelper;
use perf_notifier::domain::notification::{Completion, NotificationId, SlotState, TapAction};
use perf_notifier::infrastructure::InMemoryNotificationService;

const SLOT: NotificationId = NotificationId::new(1);

fn helper() -> (
    NotificationHelper<Arc<InMemoryNotificationService>>,
    Arc<InMemoryNotificationService>,
) {
    let service = Arc::new(InMemoryNotificationService::new());
    (NotificationHelper::new(Arc::clone(&service)), service)
}

#[tokio::test]
async fn benchmark_finished_scenario() {
    let (mut helper, service) = helper();

    helper
        .create_notification("Benchmark finished", None)
        .await
        .unwrap();

    assert_eq!(service.active_count(), 1);
    let active = service.active(SLOT).unwrap();
    assert_eq!(active.title(), "PerformanceHelper");
    assert_eq!(active.body(), "Benchmark finished");
    assert!(active.auto_cancel());

    assert_eq!(helper.completed().await.unwrap(), Completion::Withdrawn);
    assert!(service.active(SLOT).is_none());
    assert_eq!(service.active_count(), 0);
}

#[tokio::test]
async fn body_is_passed_through_verbatim() {
    let (mut helper, service) = helper();

    for text in ["", "tab\there", "line\nbreak\r\n", "bell\u{7}", "ünïcödé ✓"] {
        helper.create_notification(text, None).await.unwrap();
        assert_eq!(service.active(SLOT).unwrap().body(), text);
    }
}

#[tokio::test]
async fn second_show_replaces_first() {
    let (mut helper, service) = helper();

    helper.create_notification("A", None).await.unwrap();
    helper.create_notification("B", None).await.unwrap();

    assert_eq!(service.active_count(), 1);
    assert_eq!(service.active(SLOT).unwrap().body(), "B");
    assert_eq!(helper.state(), SlotState::Shown);
}

#[tokio::test]
async fn completed_is_idempotent() {
    let (mut helper, service) = helper();
    helper.create_notification("x", None).await.unwrap();

    helper.completed().await.unwrap();
    let after_once = service.active_count();
    helper.completed().await.unwrap();

    assert_eq!(after_once, 0);
    assert_eq!(service.active_count(), 0);
    assert_eq!(helper.state(), SlotState::Absent);
}

#[tokio::test]
async fn show_complete_show_leaves_latest() {
    let (mut helper, service) = helper();

    helper.create_notification("x", None).await.unwrap();
    helper.completed().await.unwrap();
    helper.create_notification("y", None).await.unwrap();

    assert_eq!(service.active_count(), 1);
    assert_eq!(service.active(SLOT).unwrap().body(), "y");
}

#[tokio::test]
async fn completed_before_any_show_is_reported() {
    let (mut helper, service) = helper();

    assert_eq!(helper.completed().await.unwrap(), Completion::NotShown);
    assert_eq!(service.active_count(), 0);
    assert_eq!(helper.state(), SlotState::Absent);
}

#[tokio::test]
async fn tap_runs_action_and_dismisses() {
    let (mut helper, service) = helper();
    let tapped = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&tapped);

    helper
        .create_notification(
            "tap me",
            Some(TapAction::new(move || flag.store(true, Ordering::SeqCst))),
        )
        .await
        .unwrap();

    assert!(service.tap(SLOT));
    assert!(tapped.load(Ordering::SeqCst));
    assert!(service.active(SLOT).is_none());
}

#[tokio::test]
async fn completion_tracks_helper_calls_after_user_dismissal() {
    let (mut helper, service) = helper();
    helper.create_notification("tap me", None).await.unwrap();

    assert!(service.tap(SLOT));
    assert_eq!(service.active_count(), 0);
    assert_eq!(helper.state(), SlotState::Shown);

    assert_eq!(helper.completed().await.unwrap(), Completion::Withdrawn);
    assert_eq!(helper.state(), SlotState::Absent);
    assert_eq!(service.active_count(), 0);
}

#[tokio::test]
async fn helpers_on_separate_services_do_not_interfere() {
    let (mut first, first_service) = helper();
    let (mut second, second_service) = helper();

    first.create_notification("one", None).await.unwrap();
    second.create_notification("two", None).await.unwrap();
    first.completed().await.unwrap();

    assert_eq!(first_service.active_count(), 0);
    assert_eq!(second_service.active(SLOT).unwrap().body(), "two");
}
