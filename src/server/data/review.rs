use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a review; the rating is not range checked
    pub async fn create(
        &self,
        account_id: i32,
        rating: i32,
        comment: &str,
        venue_id: &str,
    ) -> Result<entity::review::Model, DbErr> {
        let review = entity::review::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            rating: ActiveValue::Set(rating),
            comment: ActiveValue::Set(comment.to_string()),
            venue_id: ActiveValue::Set(venue_id.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        review.insert(self.db).await
    }

    /// Reviews written by an account, oldest first
    pub async fn get_by_account_id(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::AccountId.eq(account_id))
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await
    }
}
