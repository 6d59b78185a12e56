use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(locallib_catalog_migration::Migrator).await;
}
