use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use push::RenderMode;

use crate::{
    model::{
        api::ErrorDto,
        notification::{NotificationReceiptDto, NotificationRequestDto},
    },
    server::{
        controller::extract::ApiJson, error::Error, model::app::AppState,
        service::notification::NotificationService,
    },
};

pub static NOTIFICATION_TAG: &str = "notification";

/// Send a data-only push notification
///
/// Title, body, payload, image URL and every action are flattened into the FCM data map so the
/// app renders the notification itself.
///
/// # Responses
/// - 200 (OK): FCM accepted the message, returns its name
/// - 400 (Bad Request): Body is not a notification request
/// - 500 (Internal Server Error): Credential, token or FCM failure
#[utoipa::path(
    post,
    path = "/api/notification/send-notification",
    tag = NOTIFICATION_TAG,
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
    tracing::debug!(
        title = %payload.title,
        actions = payload.actions.len(),
        "Received data notification"
    );

    let request = push::PushRequest::from(payload);

    let name = NotificationService::new(&state.push_client)
        .send(&request, RenderMode::Data)
        .await?;

    Ok((
        StatusCode::OK,
        Json(NotificationReceiptDto {
            message: format!("Notification sent successfully: {}", name),
            message_id: name,
        }),
    ))
}
