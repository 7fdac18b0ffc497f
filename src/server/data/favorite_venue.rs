use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteVenueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteVenueRepository<'a, C> {
    /// Creates a new instance of [`FavoriteVenueRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a venue to an account's favorites
    pub async fn create(
        &self,
        account_id: i32,
        venue_id: &str,
    ) -> Result<entity::favorite_venue::Model, DbErr> {
        let favorite = entity::favorite_venue::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            venue_id: ActiveValue::Set(venue_id.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn exists(&self, account_id: i32, venue_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::FavoriteVenue::find()
            .filter(entity::favorite_venue::Column::AccountId.eq(account_id))
            .filter(entity::favorite_venue::Column::VenueId.eq(venue_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Favorites of an account, oldest first
    pub async fn get_by_account_id(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::favorite_venue::Model>, DbErr> {
        entity::prelude::FavoriteVenue::find()
            .filter(entity::favorite_venue::Column::AccountId.eq(account_id))
            .order_by_asc(entity::favorite_venue::Column::Id)
            .all(self.db)
            .await
    }
}
