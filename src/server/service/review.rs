use sea_orm::DatabaseConnection;

use crate::server::{
    data::{account::AccountRepository, review::ReviewRepository},
    error::{user::UserError, Error},
    model::db::ReviewModel,
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    /// Creates a new instance of [`ReviewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a review by the account registered for a Firebase UID
    ///
    /// The rating is stored as given; no range is enforced.
    ///
    /// # Returns
    /// - `Ok(ReviewModel)`: The stored review
    /// - `Err(UserError::MissingFields)`: Firebase UID, comment or venue ID is empty
    /// - `Err(UserError::AccountNotFound)`: No account for the Firebase UID
    /// - `Err(Error::OperationFailed)`: Database failure
    pub async fn add_review(
        &self,
        firebase_uid: &str,
        rating: i32,
        comment: &str,
        venue_id: &str,
    ) -> Result<ReviewModel, Error> {
        if firebase_uid.is_empty() || comment.is_empty() || venue_id.is_empty() {
            return Err(UserError::MissingFields(
                "Firebase UID, comment and Place ID are required.",
            )
            .into());
        }

        let Some(account) = AccountRepository::new(self.db)
            .find_by_firebase_uid(firebase_uid)
            .await
            .map_err(|err| Error::from(err).during("Failed to save review"))?
        else {
            return Err(UserError::AccountNotFound.into());
        };

        let review = ReviewRepository::new(self.db)
            .create(account.id, rating, comment, venue_id)
            .await
            .map_err(|err| Error::from(err).during("Failed to save review"))?;

        tracing::debug!(
            account_id = %account.id,
            venue_id = %venue_id,
            rating = rating,
            "Added review"
        );

        Ok(review)
    }
}
