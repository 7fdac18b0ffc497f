use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_account::Account;

static IDX_REVIEW_ACCOUNT_ID: &str = "idx_review_account_id";
static FK_REVIEW_ACCOUNT_ID: &str = "fk_review_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::AccountId))
                    .col(integer(Review::Rating))
                    .col(text(Review::Comment))
                    .col(string(Review::VenueId))
                    .col(timestamp(Review::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_ACCOUNT_ID)
                    .table(Review::Table)
                    .col(Review::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REVIEW_ACCOUNT_ID)
                    .from_tbl(Review::Table)
                    .from_col(Review::AccountId)
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
                    .name(FK_REVIEW_ACCOUNT_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_ACCOUNT_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Review {
    Table,
    Id,
    AccountId,
    Rating,
    Comment,
    VenueId,
    CreatedAt,
}
