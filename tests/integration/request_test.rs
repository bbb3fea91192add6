//! Request submission, escalation, and completion flows.

use bloodlink_core::error::ErrorKind;
use bloodlink_entity::request::{Criticality, EmergencyType, TimeWindow, Urgency};
use bloodlink_entity::BloodType;
use bloodlink_service::validation::{BankDraft, InventoryDraft, RequestDraft};
use futures::future::join_all;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_missing_blood_type_rejected() {
    let app = TestApp::new();
    let mut rx = app.events();

    let err = app
        .service
        .submit_request(RequestDraft {
            blood_group: None,
            ..helpers::standard_request("Rajesh", "O", "negative", 2)
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "Please fill in all required fields");
    assert!(app.service.list_active_requests().await.is_empty());
    assert!(helpers::drain(&mut rx).is_empty());
}

#[tokio::test]
async fn test_emergency_missing_fields_uses_emergency_wording() {
    let app = TestApp::new();
    let err = app
        .service
        .submit_request(RequestDraft {
            emergency: true,
            ..RequestDraft::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.message, "Please fill in all required emergency fields");
}

#[tokio::test]
async fn test_standard_request_orders_by_tier_then_time() {
    let app = TestApp::new();
    let scheduled = app
        .service
        .submit_request(RequestDraft {
            urgency: Some(Urgency::Scheduled),
            ..helpers::standard_request("Amit", "B", "positive", 1)
        })
        .await
        .expect("submit");
    let immediate = app
        .service
        .submit_request(RequestDraft {
            urgency: Some(Urgency::Immediate),
            ..helpers::standard_request("Priya", "AB", "positive", 1)
        })
        .await
        .expect("submit");

    assert_eq!(scheduled.request.criticality, Criticality::Urgent);
    assert_eq!(scheduled.acknowledgement.title, "Blood Request Submitted");
    assert_eq!(immediate.request.criticality, Criticality::Critical);

    let active = app.service.list_active_requests().await;
    assert_eq!(active[0].id, immediate.request.id);
    assert_eq!(active[1].id, scheduled.request.id);
}

#[tokio::test]
async fn test_trauma_and_mass_transfusion_escalate() {
    let app = TestApp::new();
    let submission = app
        .service
        .submit_request(RequestDraft {
            emergency: true,
            emergency_type: Some(EmergencyType::Accident),
            time_window: Some(TimeWindow::TwoHours),
            ..helpers::standard_request("Rajesh", "O", "negative", 4)
        })
        .await
        .expect("submit");
    assert_eq!(submission.request.criticality, Criticality::Critical);
    assert_eq!(submission.request.remaining_minutes, 120);
}

#[tokio::test]
async fn test_escalation_cannot_lower_tier() {
    let app = TestApp::new();
    let submission = app
        .service
        .submit_request(RequestDraft {
            criticality: Some(Criticality::Severe),
            ..helpers::standard_request("Priya", "AB", "positive", 2)
        })
        .await
        .expect("submit");

    let err = app
        .service
        .escalate_request(submission.request.id, Criticality::Urgent)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    app.service
        .escalate_request(submission.request.id, Criticality::Severe)
        .await
        .expect("same tier is a no-op");
    assert!(app.service.list_notifications().await.is_empty());
}

#[tokio::test]
async fn test_completed_request_matches_against_stock() {
    let app = TestApp::new();
    let bank = app
        .service
        .register_bank(BankDraft {
            name: "Red Cross Blood Bank".to_string(),
            ..BankDraft::default()
        })
        .await
        .expect("bank");
    app.service
        .add_inventory(bank.id, InventoryDraft::for_type(BloodType::O_NEGATIVE, 8))
        .await
        .expect("stock");

    let submission = app
        .service
        .submit_request(helpers::standard_request("Sneha", "AB", "positive", 2))
        .await
        .expect("submit");
    let report = app
        .service
        .match_request(submission.request.id)
        .await
        .expect("match");
    assert_eq!(report.stock_units(), 8);

    app.service
        .complete_request(submission.request.id)
        .await
        .expect("complete");
    let err = app
        .service
        .complete_request(submission.request.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_concurrent_submissions_are_all_kept() {
    let app = TestApp::new();
    let submissions = join_all((0..20).map(|i| {
        let service = app.service.clone();
        async move {
            service
                .submit_request(helpers::standard_request(&format!("patient-{i}"), "A", "positive", 1))
                .await
        }
    }))
    .await;

    assert!(submissions.iter().all(|s| s.is_ok()));
    assert_eq!(app.service.list_active_requests().await.len(), 20);
}
