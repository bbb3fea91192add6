//! Notification center flows through the service.

use bloodlink_entity::notification::NotificationSeverity;
use bloodlink_entity::request::{Criticality, TimeWindow};
use bloodlink_realtime::notification::builder::NotificationBuilder;
use bloodlink_service::validation::RequestDraft;

use crate::helpers::{self, TestApp};

fn critical_emergency(patient: &str) -> RequestDraft {
    RequestDraft {
        emergency: true,
        time_window: Some(TimeWindow::Immediate),
        ..helpers::standard_request(patient, "O", "negative", 2)
    }
}

#[tokio::test]
async fn test_critical_prompt_surfaces_once_per_notification() {
    let app = TestApp::new();
    let mut rx = app.events();

    let first = app
        .service
        .submit_request(critical_emergency("Rajesh"))
        .await
        .expect("submit");
    let prompt = first.prompt.expect("first critical raises a prompt");
    assert_eq!(prompt.target.title, "🚨 CRITICAL BLOOD EMERGENCY");
    assert_eq!(
        prompt.target.message,
        "O- blood urgently needed at City Hospital. Patient in critical condition."
    );

    let camp = NotificationBuilder::new(NotificationSeverity::Info, "Blood Donation Camp")
        .message("Camp tomorrow at 9 AM")
        .build();
    assert!(app.service.post_notification(camp).await.is_none());

    assert_eq!(
        helpers::drain(&mut rx),
        vec![
            "request.submitted",
            "notification.added",
            "notification.critical_prompt",
            "notification.added",
        ]
    );
}

#[tokio::test]
async fn test_dismissed_critical_does_not_resurface() {
    let app = TestApp::new();
    let submission = app
        .service
        .submit_request(critical_emergency("Rajesh"))
        .await
        .expect("submit");
    let target = submission.prompt.expect("prompt").target;

    let ack = app.service.dismiss_notification(target.id).await;
    assert_eq!(ack.title, "Notification Dismissed");
    let again = app.service.dismiss_notification(target.id).await;
    assert_eq!(again, ack);

    let info = NotificationBuilder::new(NotificationSeverity::Info, "Reminder").build();
    assert!(app.service.post_notification(info).await.is_none());
    assert_eq!(app.service.list_notifications().await.len(), 1);
}

#[tokio::test]
async fn test_prompt_for_new_critical_opens_oldest() {
    let app = TestApp::new();
    let first = app
        .service
        .submit_request(critical_emergency("first"))
        .await
        .expect("submit");
    let standard = app
        .service
        .submit_request(helpers::standard_request("second", "A", "positive", 1))
        .await
        .expect("submit");

    let ack = app
        .service
        .escalate_request(standard.request.id, Criticality::Critical)
        .await
        .expect("escalate");
    assert_eq!(ack.title, "Request Escalated");

    let notifications = app.service.list_notifications().await;
    assert_eq!(notifications.len(), 2);
    assert!(notifications.iter().all(|n| n.is_critical()));
    assert_eq!(
        notifications[0].request_id,
        Some(first.request.id),
        "insertion order is kept"
    );
}

#[tokio::test]
async fn test_respond_to_notification_changes_nothing() {
    let app = TestApp::new();
    app.service
        .submit_request(critical_emergency("Rajesh"))
        .await
        .expect("submit");
    let before = app.service.list_notifications().await;

    let ack = app
        .service
        .respond_to_notification(before[0].id)
        .await
        .expect("respond");
    assert_eq!(ack.message, "Hospital has been notified of your availability");
    assert_eq!(app.service.list_notifications().await.len(), before.len());
}
