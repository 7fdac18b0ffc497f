use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{AccountModel, FavoriteVenueModel, ReviewModel},
    TestSetup,
};

impl TestSetup {
    pub fn account<'a>(&'a mut self) -> AccountFixtures<'a> {
        AccountFixtures { setup: self }
    }
}

pub struct AccountFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> AccountFixtures<'a> {
    pub async fn insert_account(
        &self,
        username: &str,
        firebase_uid: &str,
    ) -> Result<AccountModel, TestError> {
        Ok(
            entity::prelude::Account::insert(entity::account::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                firebase_uid: ActiveValue::Set(firebase_uid.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_favorite(
        &self,
        account_id: i32,
        venue_id: &str,
    ) -> Result<FavoriteVenueModel, TestError> {
        Ok(
            entity::prelude::FavoriteVenue::insert(entity::favorite_venue::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                venue_id: ActiveValue::Set(venue_id.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_review(
        &self,
        account_id: i32,
        rating: i32,
        comment: &str,
        venue_id: &str,
    ) -> Result<ReviewModel, TestError> {
        Ok(
            entity::prelude::Review::insert(entity::review::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                rating: ActiveValue::Set(rating),
                comment: ActiveValue::Set(comment.to_string()),
                venue_id: ActiveValue::Set(venue_id.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Inserts an account owning one favorite and one review.
    pub async fn insert_account_with_activity(
        &self,
        username: &str,
        firebase_uid: &str,
    ) -> Result<(AccountModel, FavoriteVenueModel, ReviewModel), TestError> {
        let account = self.insert_account(username, firebase_uid).await?;
        let favorite = self.insert_favorite(account.id, "venue-1").await?;
        let review = self
            .insert_review(account.id, 5, "Great espresso", "venue-1")
            .await?;

        Ok((account, favorite, review))
    }
}
