//! Tests for the data-only notification endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use roastmap::{
    model::notification::{NotificationActionDto, NotificationRequestDto},
    server::controller::{extract::ApiJson, notification::send_notification},
};
use roastmap_test_utils::fixtures::push::mock_message_name;
use serde_json::json;

use super::*;

fn request() -> NotificationRequestDto {
    NotificationRequestDto {
        token: "device-token".to_string(),
        title: "Latte art throwdown".to_string(),
        body: "Saturday at noon".to_string(),
        payload: Some("event:42".to_string()),
        image_url: None,
        actions: vec![
            NotificationActionDto {
                action_id: "going".to_string(),
                title: "Going".to_string(),
            },
            NotificationActionDto {
                action_id: "maybe".to_string(),
                title: "Maybe".to_string(),
            },
        ],
    }
}

/// Expected: 200 with actions flattened into indexed data keys
#[tokio::test]
async fn sends_flattened_data_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(1)
        .with_send_endpoint(
            json!({
                "token": "device-token",
                "data": {
                    "title": "Latte art throwdown",
                    "body": "Saturday at noon",
                    "payload": "event:42",
                    "imageUrl": "",
                    "action_0_id": "going",
                    "action_0_title": "Going",
                    "action_1_id": "maybe",
                    "action_1_title": "Maybe"
                }
            }),
            1,
        )
        .build()
        .await?;

    let resp = send_notification(State(test.state()), ApiJson(request()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["messageId"], mock_message_name());
    test.assert_mocks();

    Ok(())
}

/// Expected: one token exchange shared by consecutive sends
#[tokio::test]
async fn reuses_access_token_across_sends() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(1)
        .with_send_endpoint(json!({ "token": "device-token" }), 2)
        .build()
        .await?;

    for _ in 0..2 {
        let resp = send_notification(State(test.state()), ApiJson(request()))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }
    test.assert_mocks();

    Ok(())
}

/// Expected: 500 with internal_error code when FCM rejects the message
#[tokio::test]
async fn fails_when_fcm_rejects() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(1)
        .with_failing_send_endpoint(503)
        .build()
        .await?;

    let resp = send_notification(State(test.state()), ApiJson(request()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await["code"], "internal_error");

    Ok(())
}
