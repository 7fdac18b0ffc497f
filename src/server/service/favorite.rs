use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{account::AccountRepository, favorite_venue::FavoriteVenueRepository},
    error::{user::UserError, Error},
    model::db::FavoriteVenueModel,
    service::conflict_on_unique_violation,
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a venue to the favorites of the account registered for a Firebase UID
    ///
    /// # Returns
    /// - `Ok(FavoriteVenueModel)`: The stored favorite
    /// - `Err(UserError::MissingFields)`: Firebase UID or venue ID is empty
    /// - `Err(UserError::AccountNotFound)`: No account for the Firebase UID
    /// - `Err(UserError::FavoriteExists)`: The venue is already a favorite of this account
    /// - `Err(Error::OperationFailed)`: Database failure
    pub async fn add_favorite(
        &self,
        firebase_uid: &str,
        venue_id: &str,
    ) -> Result<FavoriteVenueModel, Error> {
        if firebase_uid.is_empty() || venue_id.is_empty() {
            return Err(
                UserError::MissingFields("Firebase UID and Coffee Shop ID are required.").into(),
            );
        }

        let favorite = self
            .create_favorite(firebase_uid, venue_id)
            .await
            .map_err(|err| err.during("Failed to save favorite"))?;

        tracing::debug!(
            account_id = %favorite.account_id,
            venue_id = %venue_id,
            "Added favorite venue"
        );

        Ok(favorite)
    }

    async fn create_favorite(
        &self,
        firebase_uid: &str,
        venue_id: &str,
    ) -> Result<FavoriteVenueModel, Error> {
        let txn = self.db.begin().await?;

        let Some(account) = AccountRepository::new(&txn)
            .find_by_firebase_uid(firebase_uid)
            .await?
        else {
            return Err(UserError::AccountNotFound.into());
        };

        let favorite_repository = FavoriteVenueRepository::new(&txn);

        if favorite_repository.exists(account.id, venue_id).await? {
            return Err(UserError::FavoriteExists.into());
        }

        let favorite = favorite_repository
            .create(account.id, venue_id)
            .await
            .map_err(|err| conflict_on_unique_violation(err, |_| UserError::FavoriteExists))?;

        txn.commit().await?;

        Ok(favorite)
    }
}
