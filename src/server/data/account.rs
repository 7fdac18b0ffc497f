use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account
    pub async fn create(
        &self,
        username: &str,
        firebase_uid: &str,
    ) -> Result<entity::account::Model, DbErr> {
        let account = entity::account::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            firebase_uid: ActiveValue::Set(firebase_uid.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    pub async fn find_by_firebase_uid(
        &self,
        firebase_uid: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::FirebaseUid.eq(firebase_uid))
            .one(self.db)
            .await
    }

    /// Case-sensitive exact match against stored usernames
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes an account along with its favorites and reviews
    ///
    /// Returns OK regardless of the account existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Account::delete_by_id(account_id)
            .exec(self.db)
            .await
    }
}
