use sea_orm::DatabaseConnection;

/// State shared by all request handlers.
///
/// The push client is built once at startup; clones share its connection pool and token cache.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub push_client: push::Client,
}

impl From<(DatabaseConnection, push::Client)> for AppState {
    fn from((db, push_client): (DatabaseConnection, push::Client)) -> Self {
        Self { db, push_client }
    }
}
