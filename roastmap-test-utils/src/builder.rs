//! Declarative test builder.
//!
//! The `TestBuilder` API queues the account tables, account fixtures and mock FCM endpoints,
//! all of which are created during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestSetup};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// account fixtures, and mock FCM endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    include_account_tables: bool,

    accounts: Vec<(String, String)>, // (username, firebase_uid)

    token_endpoint: Option<usize>, // expected_requests
    send_endpoints: Vec<(serde_json::Value, usize)>, // (message, expected_requests)
    failing_send_endpoints: Vec<usize>, // status
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            include_account_tables: false,
            accounts: Vec::new(),
            token_endpoint: None,
            send_endpoints: Vec::new(),
            failing_send_endpoints: Vec::new(),
        }
    }

    /// Add the account, favorite venue and review tables to the test database.
    pub fn with_account_tables(mut self) -> Self {
        self.include_account_tables = true;
        self
    }

    /// Insert an account during `build()`. Requires account tables.
    pub fn with_account(mut self, username: impl Into<String>, firebase_uid: impl Into<String>) -> Self {
        self.accounts.push((username.into(), firebase_uid.into()));
        self
    }

    /// Add the mock OAuth2 token endpoint, expected to be called `expected_requests` times.
    pub fn with_token_endpoint(mut self, expected_requests: usize) -> Self {
        self.token_endpoint = Some(expected_requests);
        self
    }

    /// Add a mock FCM send endpoint accepting messages that contain `message`.
    pub fn with_send_endpoint(mut self, message: serde_json::Value, expected_requests: usize) -> Self {
        self.send_endpoints.push((message, expected_requests));
        self
    }

    /// Add a mock FCM send endpoint that always fails with `status`.
    pub fn with_failing_send_endpoint(mut self, status: usize) -> Self {
        self.failing_send_endpoints.push(status);
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates the account tables if requested
    /// 2. Inserts account fixtures
    /// 3. Creates mock HTTP endpoints (token, send, failing send)
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::PushError)` - Mock FCM client initialization failed
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_account_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Account),
                schema.create_table_from_entity(entity::prelude::FavoriteVenue),
                schema.create_table_from_entity(entity::prelude::Review),
            ]);
        }

        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for (username, firebase_uid) in self.accounts {
            setup
                .account()
                .insert_account(&username, &firebase_uid)
                .await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        if let Some(expected_requests) = self.token_endpoint {
            mocks.push(setup.push().create_token_endpoint(expected_requests));
        }

        for (message, expected_requests) in self.send_endpoints {
            mocks.push(setup.push().create_send_endpoint(message, expected_requests));
        }

        for status in self.failing_send_endpoints {
            mocks.push(setup.push().create_failing_send_endpoint(status));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
