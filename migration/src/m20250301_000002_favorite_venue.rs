use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_account::Account;

static IDX_FAVORITE_VENUE_ACCOUNT_VENUE: &str = "idx_favorite_venue_account_id_venue_id";
static FK_FAVORITE_VENUE_ACCOUNT_ID: &str = "fk_favorite_venue_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteVenue::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteVenue::Id))
                    .col(integer(FavoriteVenue::AccountId))
                    .col(string(FavoriteVenue::VenueId))
                    .col(timestamp(FavoriteVenue::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // One favorite per (account, venue); also serves account_id lookups.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_VENUE_ACCOUNT_VENUE)
                    .table(FavoriteVenue::Table)
                    .col(FavoriteVenue::AccountId)
                    .col(FavoriteVenue::VenueId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_VENUE_ACCOUNT_ID)
                    .from_tbl(FavoriteVenue::Table)
                    .from_col(FavoriteVenue::AccountId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_VENUE_ACCOUNT_ID)
                    .table(FavoriteVenue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_VENUE_ACCOUNT_VENUE)
                    .table(FavoriteVenue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteVenue::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteVenue {
    Table,
    Id,
    AccountId,
    VenueId,
    CreatedAt,
}
