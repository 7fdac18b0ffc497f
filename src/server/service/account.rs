use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::account::AccountRepository,
    error::{user::UserError, Error},
    model::db::AccountModel,
    service::conflict_on_unique_violation,
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new instance of [`AccountService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a username for a Firebase UID
    ///
    /// # Returns
    /// - `Ok(AccountModel)`: The newly created account
    /// - `Err(UserError::MissingFields)`: Username or Firebase UID is empty
    /// - `Err(UserError::UsernameTaken)`: Username is already registered (exact match)
    /// - `Err(UserError::IdentityTaken)`: Firebase UID already has an account
    /// - `Err(Error::OperationFailed)`: Database failure
    pub async fn register(
        &self,
        username: &str,
        firebase_uid: &str,
    ) -> Result<AccountModel, Error> {
        if username.is_empty() || firebase_uid.is_empty() {
            return Err(UserError::MissingFields("Username and Firebase UID are required.").into());
        }

        let account = self
            .create_account(username, firebase_uid)
            .await
            .map_err(|err| err.during("Failed to save user"))?;

        tracing::info!(account_id = %account.id, "Registered username {}", account.username);

        Ok(account)
    }

    async fn create_account(
        &self,
        username: &str,
        firebase_uid: &str,
    ) -> Result<AccountModel, Error> {
        let txn = self.db.begin().await?;
        let account_repository = AccountRepository::new(&txn);

        if account_repository.username_exists(username).await? {
            return Err(UserError::UsernameTaken.into());
        }

        if account_repository
            .find_by_firebase_uid(firebase_uid)
            .await?
            .is_some()
        {
            return Err(UserError::IdentityTaken.into());
        }

        let account = account_repository
            .create(username, firebase_uid)
            .await
            .map_err(|err| conflict_on_unique_violation(err, account_conflict))?;

        txn.commit().await?;

        Ok(account)
    }

    /// Looks up the username registered for a Firebase UID
    ///
    /// # Returns
    /// - `Ok(String)`: The username
    /// - `Err(UserError::MissingFields)`: Firebase UID is empty
    /// - `Err(UserError::AccountNotFound)`: No account for the Firebase UID
    /// - `Err(UserError::EmptyUsername)`: Stored username is empty
    /// - `Err(Error::OperationFailed)`: Database failure
    pub async fn get_username(&self, firebase_uid: &str) -> Result<String, Error> {
        if firebase_uid.is_empty() {
            return Err(UserError::MissingFields("Firebase UID is required.").into());
        }

        let Some(account) = AccountRepository::new(self.db)
            .find_by_firebase_uid(firebase_uid)
            .await
            .map_err(|err| Error::from(err).during("Error retrieving username"))?
        else {
            return Err(UserError::AccountNotFound.into());
        };

        if account.username.is_empty() {
            return Err(UserError::EmptyUsername(account.id).into());
        }

        Ok(account.username)
    }

    /// Deletes the account for a Firebase UID together with its favorites and reviews
    ///
    /// Returns whether an account was deleted.
    pub async fn delete_account(&self, firebase_uid: &str) -> Result<bool, Error> {
        let account_repository = AccountRepository::new(self.db);

        let Some(account) = account_repository
            .find_by_firebase_uid(firebase_uid)
            .await
            .map_err(|err| Error::from(err).during("Failed to delete user"))?
        else {
            return Ok(false);
        };

        let result = account_repository
            .delete(account.id)
            .await
            .map_err(|err| Error::from(err).during("Failed to delete user"))?;

        tracing::info!(account_id = %account.id, "Deleted account");

        Ok(result.rows_affected > 0)
    }
}

/// Picks the conflict for a unique violation on the account table.
///
/// Constraint names and SQLite messages both carry the violated column.
fn account_conflict(violation: &str) -> UserError {
    if violation.contains("firebase_uid") {
        UserError::IdentityTaken
    } else {
        UserError::UsernameTaken
    }
}

#[cfg(test)]
mod tests {

    mod register {
        use roastmap_test_utils::prelude::*;

        use crate::server::{
            error::{user::UserError, Error},
            service::account::AccountService,
        };

        /// Expect the first registration of a username to succeed
        #[tokio::test]
        async fn registers_new_username() -> Result<(), TestError> {
            let test = test_setup_with_account_tables!()?;
            let account_service = AccountService::new(&test.state.db);

            let result = account_service.register("alice", "uid1").await;

            assert!(result.is_ok());
            let account = result.unwrap();
            assert_eq!(account.id, 1);
            assert_eq!(account.username, "alice");

            Ok(())
        }

        /// Expect UsernameTaken for a second registration regardless of Firebase UID
        #[tokio::test]
        async fn fails_for_taken_username() -> Result<(), TestError> {
            let test = test_setup_with_account_tables!()?;
            let account_service = AccountService::new(&test.state.db);
            account_service.register("alice", "uid1").await.unwrap();

            let result = account_service.register("alice", "uid2").await;

            assert!(matches!(
                result,
                Err(Error::UserError(UserError::UsernameTaken))
            ));

            Ok(())
        }

        /// Expect usernames differing only by case to be distinct
        #[tokio::test]
        async fn username_match_is_case_sensitive() -> Result<(), TestError> {
            let test = test_setup_with_account_tables!()?;
            let account_service = AccountService::new(&test.state.db);
            account_service.register("alice", "uid1").await.unwrap();

            let result = account_service.register("Alice", "uid2").await;

            assert!(result.is_ok());

            Ok(())
        }

        /// Expect IdentityTaken when the Firebase UID already has an account
        #[tokio::test]
        async fn fails_for_registered_identity() -> Result<(), TestError> {
            let test = test_setup_with_account_tables!()?;
            let account_service = AccountService::new(&test.state.db);
            account_service.register("alice", "uid1").await.unwrap();

            let result = account_service.register("bob", "uid1").await;

            assert!(matches!(
                result,
                Err(Error::UserError(UserError::IdentityTaken))
            ));

            Ok(())
        }

        /// Expect MissingFields for empty inputs without touching the database
        #[tokio::test]
        async fn fails_for_empty_fields() -> Result<(), TestError> {
            // No tables: a database call would fail instead
            let test = test_setup_with_tables!()?;
            let account_service = AccountService::new(&test.state.db);

            let empty_username = account_service.register("", "uid1").await;
            let empty_uid = account_service.register("alice", "").await;

            assert!(matches!(
                empty_username,
                Err(Error::UserError(UserError::MissingFields(_)))
            ));
            assert!(matches!(
                empty_uid,
                Err(Error::UserError(UserError::MissingFields(_)))
            ));

            Ok(())
        }

        /// Expect the database failure to name the registration
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let account_service = AccountService::new(&test.state.db);

            let result = account_service.register("alice", "uid1").await;

            assert!(matches!(
                result,
                Err(Error::OperationFailed { operation: "Failed to save user", .. })
            ));

            Ok(())
        }
    }

    mod account_conflict {
        use roastmap_test_utils::prelude::*;

        use crate::server::{
            data::account::AccountRepository,
            error::{user::UserError, Error},
            service::{account::account_conflict, conflict_on_unique_violation},
        };

        /// Expect a duplicate username insert to map to UsernameTaken
        #[tokio::test]
        async fn maps_duplicate_username() -> Result<(), TestError> {
            let mut test = test_setup_with_account_tables!()?;
            test.account().insert_account("alice", "uid1").await?;

            let err = AccountRepository::new(&test.state.db)
                .create("alice", "uid2")
                .await
                .unwrap_err();
            let result = conflict_on_unique_violation(err, account_conflict);

            assert!(matches!(
                result,
                Error::UserError(UserError::UsernameTaken)
            ));

            Ok(())
        }

        /// Expect a duplicate Firebase UID insert to map to IdentityTaken
        #[tokio::test]
        async fn maps_duplicate_identity() -> Result<(), TestError> {
            let mut test = test_setup_with_account_tables!()?;
            test.account().insert_account("alice", "uid1").await?;

            let err = AccountRepository::new(&test.state.db)
                .create("bob", "uid1")
                .await
                .unwrap_err();
            let result = conflict_on_unique_violation(err, account_conflict);

            assert!(matches!(
                result,
                Error::UserError(UserError::IdentityTaken)
            ));

            Ok(())
        }
    }

    mod get_username {
        use roastmap_test_utils::prelude::*;

        use crate::server::{
            error::{user::UserError, Error},
            service::account::AccountService,
        };

        /// Expect the registered username to be returned
        #[tokio::test]
        async fn returns_registered_username() -> Result<(), TestError> {
            let test = test_setup_with_account_tables!()?;
            let account_service = AccountService::new(&test.state.db);
            account_service.register("alice", "uid1").await.unwrap();

            let result = account_service.get_username("uid1").await;

            assert_eq!(result.unwrap(), "alice");

            Ok(())
        }

        /// Expect AccountNotFound for an unknown Firebase UID
        #[tokio::test]
        async fn fails_for_unknown_uid() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_account_tables()
                .with_account("alice", "uid1")
                .build()
                .await?;
            let account_service = AccountService::new(&test.state.db);

            let result = account_service.get_username("uid2").await;

            assert!(matches!(
                result,
                Err(Error::UserError(UserError::AccountNotFound))
            ));

            Ok(())
        }

        /// Expect EmptyUsername when the stored username is empty
        #[tokio::test]
        async fn fails_for_empty_stored_username() -> Result<(), TestError> {
            let mut test = test_setup_with_account_tables!()?;
            let account_model = test.account().insert_account("", "uid1").await?;
            let account_service = AccountService::new(&test.state.db);

            let result = account_service.get_username("uid1").await;

            assert!(matches!(
                result,
                Err(Error::UserError(UserError::EmptyUsername(id))) if id == account_model.id
            ));

            Ok(())
        }

        /// Expect the database failure to name the lookup
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let account_service = AccountService::new(&test.state.db);

            let result = account_service.get_username("uid1").await;

            assert!(matches!(
                result,
                Err(Error::OperationFailed { operation: "Error retrieving username", .. })
            ));

            Ok(())
        }

        /// Expect MissingFields for an empty Firebase UID
        #[tokio::test]
        async fn fails_for_empty_uid() -> Result<(), TestError> {
            let test = test_setup_with_account_tables!()?;
            let account_service = AccountService::new(&test.state.db);

            let result = account_service.get_username("").await;

            assert!(matches!(
                result,
                Err(Error::UserError(UserError::MissingFields(_)))
            ));

            Ok(())
        }
    }

    mod delete_account {
        use roastmap_test_utils::prelude::*;

        use crate::server::{
            data::{favorite_venue::FavoriteVenueRepository, review::ReviewRepository},
            service::account::AccountService,
        };

        /// Expect the account and everything it owns to be removed
        #[tokio::test]
        async fn deletes_account_and_owned_rows() -> Result<(), TestError> {
            let mut test = test_setup_with_account_tables!()?;
            let (account_model, _, _) = test
                .account()
                .insert_account_with_activity("alice", "uid1")
                .await?;
            let account_service = AccountService::new(&test.state.db);

            let deleted = account_service.delete_account("uid1").await.unwrap();

            assert!(deleted);
            let favorites = FavoriteVenueRepository::new(&test.state.db)
                .get_by_account_id(account_model.id)
                .await?;
            let reviews = ReviewRepository::new(&test.state.db)
                .get_by_account_id(account_model.id)
                .await?;
            assert!(favorites.is_empty());
            assert!(reviews.is_empty());
            assert!(account_service.get_username("uid1").await.is_err());

            Ok(())
        }

        /// Expect false for an unknown Firebase UID
        #[tokio::test]
        async fn returns_false_for_unknown_uid() -> Result<(), TestError> {
            let test = test_setup_with_account_tables!()?;
            let account_service = AccountService::new(&test.state.db);

            let deleted = account_service.delete_account("uid1").await.unwrap();

            assert!(!deleted);

            Ok(())
        }
    }
}
