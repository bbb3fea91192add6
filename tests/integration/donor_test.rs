//! Donor registration and eligibility flows.

use bloodlink_core::config::AppConfig;
use bloodlink_service::validation::DonorDraft;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_eligible_donor_registration() {
    let app = TestApp::new();
    let mut rx = app.events();

    let registration = app
        .service
        .submit_donor(DonorDraft {
            medical_conditions: String::new(),
            ..helpers::donor("Arjun Singh", "O", "negative", Some(100))
        })
        .await
        .expect("register");

    assert!(registration.verdict.eligible);
    assert_eq!(registration.verdict.message(), "eligible to donate");
    assert_eq!(helpers::drain(&mut rx), vec!["donor.registered"]);
}

#[tokio::test]
async fn test_recent_donor_is_registered_but_ineligible() {
    let app = TestApp::new();
    let registration = app
        .service
        .submit_donor(helpers::donor("Rohit Mehta", "B", "positive", Some(45)))
        .await
        .expect("register");

    assert!(!registration.verdict.eligible);
    assert_eq!(registration.verdict.message(), "interdonation interval not met");
    assert_eq!(registration.acknowledgement.title, "Registration Noted");
    assert_eq!(app.service.list_donors().await.len(), 1);
}

#[tokio::test]
async fn test_disqualifying_condition_matches_case_insensitively() {
    let app = TestApp::new();
    let registration = app
        .service
        .submit_donor(DonorDraft {
            medical_conditions: "Controlled HYPERTENSION".to_string(),
            ..helpers::donor("Sneha Gupta", "AB", "positive", None)
        })
        .await
        .expect("register");
    assert_eq!(registration.verdict.message(), "medical condition may affect eligibility");
}

#[tokio::test]
async fn test_configured_interval_is_used() {
    let mut config = AppConfig::default();
    config.eligibility.min_days_between_donations = 56;
    let app = TestApp::with_config(config);

    let registration = app
        .service
        .submit_donor(helpers::donor("Arjun", "O", "positive", Some(60)))
        .await
        .expect("register");
    assert!(registration.verdict.eligible);
}

#[tokio::test]
async fn test_unavailable_donor_is_not_matched() {
    let app = TestApp::new();
    let registration = app
        .service
        .submit_donor(helpers::donor("Arjun", "O", "negative", None))
        .await
        .expect("register");
    let request = app
        .service
        .submit_request(helpers::standard_request("Rajesh", "A", "positive", 1))
        .await
        .expect("submit")
        .request;

    assert_eq!(
        app.service.match_request(request.id).await.expect("match").donors.len(),
        1
    );

    let ack = app
        .service
        .toggle_availability(registration.donor.id, false)
        .await
        .expect("toggle");
    assert_eq!(ack.message, "You are now marked as unavailable");
    assert!(app.service.match_request(request.id).await.expect("match").donors.is_empty());
}
