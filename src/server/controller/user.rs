use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use push::RenderMode;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        notification::{NotificationReceiptDto, NotificationRequestDto},
        user::{
            ChooseUsernameDto, ReviewDto, SaveFavoriteDto, UserCreatedDto, UsernameDto,
            UsernameQuery,
        },
    },
    server::{
        controller::extract::{ApiJson, ApiQuery},
        error::Error,
        model::app::AppState,
        service::{
            account::AccountService, favorite::FavoriteService,
            notification::NotificationService, review::ReviewService,
        },
    },
};

pub static USER_TAG: &str = "user";

/// Register a username for a Firebase UID
///
/// # Responses
/// - 200 (OK): Account created, returns its ID
/// - 400 (Bad Request): Username or Firebase UID is empty
/// - 409 (Conflict): Username taken or Firebase UID already registered
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/user/choose-username",
    tag = USER_TAG,
    request_body = ChooseUsernameDto,
    responses(
        (status = 200, description = "Username registered", body = UserCreatedDto),
        (status = 400, description = "Missing username or Firebase UID", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn choose_username(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ChooseUsernameDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!(
        username = %payload.username,
        firebase_uid = %payload.firebase_uid,
        "Received username registration"
    );

    let account = AccountService::new(&state.db)
        .register(&payload.username, &payload.firebase_uid)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserCreatedDto {
            user_id: account.id,
            message: "Username successfully registered.".to_string(),
        }),
    ))
}

/// Look up the username registered for a Firebase UID
///
/// # Responses
/// - 200 (OK): Returns the username
/// - 400 (Bad Request): Firebase UID is empty
/// - 404 (Not Found): No account for the Firebase UID
/// - 500 (Internal Server Error): Database failure or stored username is empty
#[utoipa::path(
    get,
    path = "/user/get-username",
    tag = USER_TAG,
    params(UsernameQuery),
    responses(
        (status = 200, description = "Username found", body = UsernameDto),
        (status = 400, description = "Missing Firebase UID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_username(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UsernameQuery>,
) -> Result<impl IntoResponse, Error> {
    let username = AccountService::new(&state.db)
        .get_username(&query.firebase_uid)
        .await?;

    Ok((StatusCode::OK, Json(UsernameDto { username })))
}

/// Add a coffee shop to the user's favorites
///
/// # Responses
/// - 200 (OK): Favorite stored
/// - 400 (Bad Request): Firebase UID or coffee shop ID is empty
/// - 404 (Not Found): No account for the Firebase UID
/// - 409 (Conflict): Coffee shop already in favorites
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/user/save-favorite",
    tag = USER_TAG,
    request_body = SaveFavoriteDto,
    responses(
        (status = 200, description = "Coffee shop added to favorites", body = MessageDto),
        (status = 400, description = "Missing Firebase UID or coffee shop ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Coffee shop already in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_favorite(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SaveFavoriteDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!(
        firebase_uid = %payload.firebase_uid,
        coffee_shop_id = %payload.coffee_shop_id,
        "Received favorite"
    );

    FavoriteService::new(&state.db)
        .add_favorite(&payload.firebase_uid, &payload.coffee_shop_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Coffee shop added to favorites.".to_string(),
        }),
    ))
}

/// Submit a review of a coffee shop
///
/// # Responses
/// - 200 (OK): Review stored
/// - 400 (Bad Request): Firebase UID, comment or place ID is empty
/// - 404 (Not Found): No account for the Firebase UID
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/user/review",
    tag = USER_TAG,
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Review added", body = MessageDto),
        (status = 400, description = "Missing review fields", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_review(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ReviewDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!(
        firebase_uid = %payload.firebase_uid,
        place_id = %payload.place_id,
        rating = payload.rating,
        "Received review"
    );

    ReviewService::new(&state.db)
        .add_review(
            &payload.firebase_uid,
            payload.rating,
            &payload.comment,
            &payload.place_id,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Review added successfully".to_string(),
        }),
    ))
}

/// Send a push notification using the native FCM notification envelope
///
/// Action buttons are not rendered in this mode.
///
/// # Responses
/// - 200 (OK): FCM accepted the message, returns its name
/// - 400 (Bad Request): Body is not a notification request
/// - 500 (Internal Server Error): Credential, token or FCM failure
#[utoipa::path(
    post,
    path = "/user/send-notification",
    tag = USER_TAG,
    operation_id = "send_user_notification",
    request_body = NotificationRequestDto,
    responses(
        (status = 200, description = "Notification sent", body = NotificationReceiptDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_notification(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NotificationRequestDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!(title = %payload.title, "Received notification");

    let request = push::PushRequest::from(payload);

    let name = NotificationService::new(&state.push_client)
        .send(&request, RenderMode::Notification)
        .await?;

    Ok((
        StatusCode::OK,
        Json(NotificationReceiptDto {
            message: format!("Notification sent successfully: {}", name),
            message_id: name,
        }),
    ))
}
