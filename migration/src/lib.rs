pub use sea_orm_migration::prelude::*;

mod m20250810_093000_create_table_users;
mod m20250810_094500_create_profile_tables;
mod m20250812_101500_create_table_fees;
mod m20250815_120000_create_table_import_history;
mod m20250902_140000_create_table_notices;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_093000_create_table_users::Migration),
            Box::new(m20250810_094500_create_profile_tables::Migration),
            Box::new(m20250812_101500_create_table_fees::Migration),
            Box::new(m20250815_120000_create_table_import_history::Migration),
            Box::new(m20250902_140000_create_table_notices::Migration),
        ]
    }
}
