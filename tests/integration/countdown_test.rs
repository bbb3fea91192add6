//! Countdown behaviour over whole request lifetimes.

use std::sync::Arc;
use std::time::Duration;

use bloodlink_entity::request::Criticality;
use bloodlink_service::validation::RequestDraft;
use bloodlink_worker::CountdownScheduler;

use crate::helpers::{self, TestApp};

fn critical_with_minutes(minutes: u32) -> RequestDraft {
    RequestDraft {
        criticality: Some(Criticality::Critical),
        remaining_minutes: Some(minutes),
        ..helpers::standard_request("Rajesh Kumar", "O", "negative", 3)
    }
}

#[tokio::test]
async fn test_request_expires_on_its_last_minute() {
    let app = TestApp::new();
    let id = app
        .service
        .submit_request(critical_with_minutes(45))
        .await
        .expect("submit")
        .request
        .id;

    for _ in 0..44 {
        app.service.tick().await;
    }
    let request = app.service.get_request(id).await.expect("still active");
    assert_eq!(request.remaining_minutes, 1);

    let outcome = app.service.tick().await;
    assert_eq!(outcome.expired.len(), 1);
    assert_eq!(outcome.expired[0].id, id);
    assert!(app.service.get_request(id).await.is_err());
}

#[tokio::test]
async fn test_critical_alert_raised_once_per_set() {
    let app = TestApp::new();
    app.service
        .submit_request(critical_with_minutes(10))
        .await
        .expect("submit");

    let first = app.service.tick().await;
    let alert = first.critical_alert.expect("alert");
    assert_eq!(alert.message, "1 critical patient(s) need immediate blood donation");
    assert!(app.service.tick().await.critical_alert.is_none());

    app.service
        .submit_request(critical_with_minutes(10))
        .await
        .expect("submit");
    let changed = app.service.tick().await;
    assert_eq!(changed.critical_alert.expect("alert").request_ids.len(), 2);
}

#[tokio::test]
async fn test_non_critical_requests_never_alert() {
    let app = TestApp::new();
    app.service
        .submit_request(helpers::standard_request("Amit", "B", "positive", 1))
        .await
        .expect("submit");
    for _ in 0..5 {
        assert!(app.service.tick().await.critical_alert.is_none());
    }
    assert!(app.service.critical_summary().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_scheduler_counts_down_in_real_time() {
    let app = TestApp::new();
    let id = app
        .service
        .submit_request(critical_with_minutes(5))
        .await
        .expect("submit")
        .request
        .id;

    let period = Duration::from_millis(500);
    let mut scheduler = CountdownScheduler::new(Arc::new(app.service.clone()), period);
    scheduler.start().expect("start");

    tokio::time::sleep(period * 4 + period / 2).await;
    assert_eq!(
        app.service.get_request(id).await.expect("active").remaining_minutes,
        1
    );

    scheduler.stop().await.expect("stop");
    tokio::time::sleep(period * 10).await;
    assert!(app.service.get_request(id).await.is_ok());
}
