use push::{PushRequest, RenderMode};

use crate::server::error::Error;

pub struct NotificationService<'a> {
    push_client: &'a push::Client,
}

impl<'a> NotificationService<'a> {
    /// Creates a new instance of [`NotificationService`]
    pub fn new(push_client: &'a push::Client) -> Self {
        Self { push_client }
    }

    /// Renders the request in the given mode and dispatches it through FCM
    ///
    /// # Returns
    /// - `Ok(String)`: Message name FCM assigned to the notification
    /// - `Err(Error::PushError)`: Credential, transport or FCM failure; not retried
    pub async fn send(&self, request: &PushRequest, mode: RenderMode) -> Result<String, Error> {
        let message = request.render(mode);

        let name = self.push_client.send(&message).await?;

        tracing::info!(
            message_name = %name,
            mode = ?mode,
            "Notification sent"
        );

        Ok(name)
    }
}
