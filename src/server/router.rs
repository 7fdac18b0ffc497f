//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI annotations, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/notification/send-notification` - Send a data-only push notification
/// - `POST /user/choose-username` - Register a username for a Firebase UID
/// - `GET /user/get-username` - Look up the username for a Firebase UID
/// - `POST /user/save-favorite` - Add a coffee shop to the user's favorites
/// - `POST /user/review` - Submit a review
/// - `POST /user/send-notification` - Send a push notification with a notification envelope
///
/// The OpenAPI document is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, push_client };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Roastmap", description = "Roastmap API"), tags(
        (name = controller::user::USER_TAG, description = "Account, favorite and review routes"),
        (name = controller::notification::NOTIFICATION_TAG, description = "Push notification routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::notification::send_notification))
        .routes(routes!(controller::user::choose_username))
        .routes(routes!(controller::user::get_username))
        .routes(routes!(controller::user::save_favorite))
        .routes(routes!(controller::user::add_review))
        .routes(routes!(controller::user::send_notification))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
