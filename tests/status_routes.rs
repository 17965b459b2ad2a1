//! Integration tests for the onboarding REST routes.
//!
//! Each test spins up an Axum server on a random port and queries it with
//! reqwest.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::net::TcpListener;

use nutri_onboard::gesture::{InputEvent, TrackMetrics};
use nutri_onboard::onboarding::{
    Gender, OnboardingManager, OnboardingRouteState, Target, Wizard, WizardAction,
    onboarding_routes,
};

/// Start an Axum server on a random port, return (base url, manager).
async fn start_server() -> (String, Arc<OnboardingManager>) {
    let manager = OnboardingManager::new(Wizard::default());
    let app = onboarding_routes(OnboardingRouteState {
        manager: Arc::clone(&manager),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (format!("http://127.0.0.1:{port}"), manager)
}

async fn complete(manager: &OnboardingManager) {
    let actions = vec![
        WizardAction::Layout {
            target: Target::SliderTrack,
            metrics: TrackMetrics::new(0.0, 300.0, 50.0),
        },
        WizardAction::Pointer {
            target: Target::SliderTrack,
            event: InputEvent::mouse_down(260.0),
        },
        WizardAction::SelectGender(Gender::Male),
        WizardAction::Next,
        WizardAction::Next,
        WizardAction::SelectGoal(0),
        WizardAction::Next,
    ];
    for action in actions {
        manager.dispatch(action).await.unwrap();
    }
}

#[tokio::test]
async fn status_starts_at_start_screen() {
    let (base, _manager) = start_server().await;

    let resp = reqwest::get(format!("{base}/api/onboarding/status"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["screen"], "start");
    assert_eq!(body["progress"], 0);
    assert_eq!(body["onboarding_completed"], false);
    assert_eq!(body["profile"]["weight_kg"], 65);
    assert_eq!(body["profile"]["height_cm"], 178);
}

#[tokio::test]
async fn profile_is_404_until_complete() {
    let (base, manager) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/onboarding/profile"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Onboarding is not complete");

    complete(&manager).await;

    let resp = client
        .get(format!("{base}/api/onboarding/profile"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["gender"], "male");
    assert_eq!(body["goal"], "loss");
    assert_eq!(body["completed"], true);
    assert!(body["completed_at"].is_string());
}

#[tokio::test]
async fn status_tracks_screen_changes() {
    let (base, manager) = start_server().await;

    manager
        .dispatch(WizardAction::Layout {
            target: Target::SliderTrack,
            metrics: TrackMetrics::new(0.0, 300.0, 50.0),
        })
        .await
        .unwrap();
    manager
        .dispatch(WizardAction::Pointer {
            target: Target::SliderTrack,
            event: InputEvent::touch_start(290.0),
        })
        .await
        .unwrap();

    let body: Value = reqwest::get(format!("{base}/api/onboarding/status"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["screen"], "gender");
    assert_eq!(body["progress"], 20);

    complete_from_gender(&manager).await;
    let body: Value = reqwest::get(format!("{base}/api/onboarding/status"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["screen"], "complete");
    assert_eq!(body["onboarding_completed"], true);
    assert_eq!(body["progress"], 100);
}

async fn complete_from_gender(manager: &OnboardingManager) {
    for action in [
        WizardAction::SelectGender(Gender::Female),
        WizardAction::Next,
        WizardAction::Next,
        WizardAction::SelectGoal(1),
        WizardAction::Next,
    ] {
        manager.dispatch(action).await.unwrap();
    }
}

#[tokio::test]
async fn cors_is_open() {
    let (base, _manager) = start_server().await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/api/onboarding/status"))
        .header("Origin", "https://web.telegram.org")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
