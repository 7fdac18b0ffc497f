//! Shaping of push requests into FCM v1 messages.
//!
//! A single [`PushRequest`] can be rendered two ways, selected by [`RenderMode`]:
//!
//! - [`RenderMode::Data`] flattens every field, including the indexed action list, into the
//!   message's key/value `data` map and leaves rendering to the client app.
//! - [`RenderMode::Notification`] places the title and body into FCM's `notification`
//!   envelope so the OS notification tray renders it; only `payload` and `imageUrl` travel
//!   in `data`.

use std::collections::BTreeMap;

use serde::Serialize;

/// A push notification addressed to a single device.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PushRequest {
    /// Device registration token.
    pub token: String,
    pub title: String,
    pub body: String,
    pub payload: Option<String>,
    pub image_url: Option<String>,
    /// Buttons the client app should offer; only rendered in [`RenderMode::Data`].
    pub actions: Vec<NotificationAction>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationAction {
    pub id: String,
    pub title: String,
}

/// How a [`PushRequest`] is laid out in the outgoing FCM message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Everything in the `data` map, no `notification` envelope.
    Data,
    /// Title and body in the `notification` envelope, the rest in `data`.
    Notification,
}

/// The `message` object of an FCM v1 `messages:send` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<NotificationEnvelope>,
    pub data: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NotificationEnvelope {
    pub title: String,
    pub body: String,
}

impl PushRequest {
    /// Builds the FCM message for this request.
    pub fn render(&self, mode: RenderMode) -> Message {
        let mut data = BTreeMap::new();

        let notification = match mode {
            RenderMode::Data => {
                data.insert("title".to_string(), self.title.clone());
                data.insert("body".to_string(), self.body.clone());

                for (i, action) in self.actions.iter().enumerate() {
                    data.insert(format!("action_{}_id", i), action.id.clone());
                    data.insert(format!("action_{}_title", i), action.title.clone());
                }

                None
            }
            RenderMode::Notification => Some(NotificationEnvelope {
                title: self.title.clone(),
                body: self.body.clone(),
            }),
        };

        // FCM data values must be strings, absent values are sent empty
        data.insert(
            "payload".to_string(),
            self.payload.clone().unwrap_or_default(),
        );
        data.insert(
            "imageUrl".to_string(),
            self.image_url.clone().unwrap_or_default(),
        );

        Message {
            token: self.token.clone(),
            notification,
            data,
        }
    }
}
