use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_USER_AGENT, credentials::mock_service_account, error::TestError};

pub struct TestAppState {
    pub db: DatabaseConnection,
    pub push_client: push::Client,
}

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Convert TestAppState into any type that can be constructed from its fields.
    /// This allows conversion to AppState without creating a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, push::Client)>,
    {
        T::from((self.state.db.clone(), self.state.push_client.clone()))
    }
}

impl TestSetup {
    /// Creates an in-memory SQLite database without tables and an FCM client pointed at a
    /// fresh mock server. No mock endpoints are registered.
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let mock_server_url = mock_server.url();

        let push_client = push::Client::builder()
            .service_account(mock_service_account(&mock_server_url))
            .api_url(&mock_server_url)
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState { db, push_client },
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks created by the TestBuilder to verify
    /// they were invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates the account, favorite venue and review tables in dependency order.
#[macro_export]
macro_rules! test_setup_with_account_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Account),
                schema.create_table_from_entity(entity::prelude::FavoriteVenue),
                schema.create_table_from_entity(entity::prelude::Review),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
