pub use sea_orm_migration::prelude::*;

mod m20250301_000001_account;
mod m20250301_000002_favorite_venue;
mod m20250301_000003_review;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_account::Migration),
            Box::new(m20250301_000002_favorite_venue::Migration),
            Box::new(m20250301_000003_review::Migration),
        ]
    }
}
