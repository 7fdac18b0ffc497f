//! Tests for the user controller endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use roastmap::{
    model::{
        notification::NotificationRequestDto,
        user::{ChooseUsernameDto, ReviewDto, SaveFavoriteDto, UsernameQuery},
    },
    server::{
        controller::{
            extract::{ApiJson, ApiQuery},
            user::{add_review, choose_username, get_username, save_favorite, send_notification},
        },
        model::app::AppState,
    },
};
use roastmap_test_utils::fixtures::push::mock_message_name;
use serde_json::json;

use super::*;

fn choose(username: &str, firebase_uid: &str) -> ApiJson<ChooseUsernameDto> {
    ApiJson(ChooseUsernameDto {
        username: username.to_string(),
        firebase_uid: firebase_uid.to_string(),
    })
}

fn favorite(firebase_uid: &str, coffee_shop_id: &str) -> ApiJson<SaveFavoriteDto> {
    ApiJson(SaveFavoriteDto {
        firebase_uid: firebase_uid.to_string(),
        coffee_shop_id: coffee_shop_id.to_string(),
    })
}

fn username_query(firebase_uid: &str) -> ApiQuery<UsernameQuery> {
    ApiQuery(UsernameQuery {
        firebase_uid: firebase_uid.to_string(),
    })
}

/// Registers alice, rejects the duplicate username and looks both UIDs up.
///
/// Expected: 200 with userId 1, 409, 200 "alice", 404
#[tokio::test]
async fn username_registration_flow() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    let state: AppState = test.state();

    let resp = choose_username(State(state.clone()), choose("alice", "uid1"))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["userId"], 1);
    assert_eq!(body["message"], "Username successfully registered.");

    let resp = choose_username(State(state.clone()), choose("alice", "uid2"))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Username already exists.");
    assert_eq!(body["code"], "conflict");

    let resp = get_username(State(state.clone()), username_query("uid1"))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "username": "alice" }));

    let resp = get_username(State(state), username_query("uid2"))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["code"], "not_found");

    Ok(())
}

/// Expected: 400 with validation_error code for an empty username
#[tokio::test]
async fn choose_username_rejects_empty_username() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let resp = choose_username(State(test.state()), choose("", "uid1"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["code"], "validation_error");

    Ok(())
}

/// Expected: 409 when the Firebase UID already has an account
#[tokio::test]
async fn choose_username_rejects_registered_uid() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_account("alice", "uid1")
        .build()
        .await?;

    let resp = choose_username(State(test.state()), choose("bob", "uid1"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expected: 500 naming the failed operation when tables are missing
#[tokio::test]
async fn choose_username_fails_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = choose_username(State(test.state()), choose("alice", "uid1"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["code"], "internal_error");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to save user: "));

    Ok(())
}

/// Expected: 400 for a missing firebaseUid query parameter
#[tokio::test]
async fn get_username_rejects_empty_uid() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let resp = get_username(State(test.state()), username_query(""))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Favorites a venue, repeats it and tries an unknown UID.
///
/// Expected: 200, 409, 404
#[tokio::test]
async fn save_favorite_flow() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_account("alice", "uid1")
        .build()
        .await?;
    let state: AppState = test.state();

    let resp = save_favorite(State(state.clone()), favorite("uid1", "venueA"))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "message": "Coffee shop added to favorites." })
    );

    let resp = save_favorite(State(state.clone()), favorite("uid1", "venueA"))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = save_favorite(State(state), favorite("unknown-uid", "venueA"))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: 500 naming the favorite operation when tables are missing
#[tokio::test]
async fn save_favorite_fails_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = save_favorite(State(test.state()), favorite("uid1", "venueA"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["code"], "internal_error");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to save favorite: "));

    Ok(())
}

/// Expected: 400 when the coffee shop ID is missing
#[tokio::test]
async fn save_favorite_rejects_missing_venue() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let resp = save_favorite(State(test.state()), favorite("uid1", ""))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["error"],
        "Firebase UID and Coffee Shop ID are required."
    );

    Ok(())
}

/// Expected: 200 for a review with a rating outside 1 to 5
#[tokio::test]
async fn add_review_accepts_any_rating() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_account("alice", "uid1")
        .build()
        .await?;

    let resp = add_review(
        State(test.state()),
        ApiJson(ReviewDto {
            firebase_uid: "uid1".to_string(),
            rating: 11,
            comment: "Worth the queue".to_string(),
            place_id: "venueA".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "message": "Review added successfully" })
    );

    Ok(())
}

/// Expected: 404 for a review from an unknown UID
#[tokio::test]
async fn add_review_fails_for_unknown_uid() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let resp = add_review(
        State(test.state()),
        ApiJson(ReviewDto {
            firebase_uid: "unknown-uid".to_string(),
            rating: 4,
            comment: "Nice".to_string(),
            place_id: "venueA".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: 200 with the FCM message name, sent with a notification envelope
#[tokio::test]
async fn send_notification_uses_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(1)
        .with_send_endpoint(
            json!({
                "token": "device-token",
                "notification": { "title": "New review", "body": "Someone reviewed your shop" },
                "data": { "payload": "", "imageUrl": "" }
            }),
            1,
        )
        .build()
        .await?;

    let resp = send_notification(
        State(test.state()),
        ApiJson(NotificationRequestDto {
            token: "device-token".to_string(),
            title: "New review".to_string(),
            body: "Someone reviewed your shop".to_string(),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["messageId"], mock_message_name());
    assert_eq!(
        body["message"],
        format!("Notification sent successfully: {}", mock_message_name())
    );
    test.assert_mocks();

    Ok(())
}

/// Expected: 500 with the FCM error echoed
#[tokio::test]
async fn send_notification_fails_when_fcm_rejects() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(1)
        .with_failing_send_endpoint(400)
        .build()
        .await?;

    let resp = send_notification(
        State(test.state()),
        ApiJson(NotificationRequestDto {
            token: "bad-token".to_string(),
            title: "Hello".to_string(),
            body: "World".to_string(),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to send notification"));

    Ok(())
}
