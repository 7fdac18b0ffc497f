use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::null_as_default;

/// Push notification request
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationRequestDto {
    /// FCM registration token of the target device
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    pub payload: Option<String>,
    pub image_url: Option<String>,
    /// Action buttons, only forwarded by the data-only notification endpoint
    #[serde(deserialize_with = "null_as_default")]
    pub actions: Vec<NotificationActionDto>,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationActionDto {
    #[serde(deserialize_with = "null_as_default")]
    pub action_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
}

/// Acknowledgment from the push service
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationReceiptDto {
    pub message: String,
    /// Message name assigned by FCM
    pub message_id: String,
}

impl From<NotificationRequestDto> for push::PushRequest {
    fn from(dto: NotificationRequestDto) -> Self {
        Self {
            token: dto.token,
            title: dto.title,
            body: dto.body,
            payload: dto.payload,
            image_url: dto.image_url,
            actions: dto
                .actions
                .into_iter()
                .map(|action| push::NotificationAction {
                    id: action.action_id,
                    title: action.title,
                })
                .collect(),
        }
    }
}
