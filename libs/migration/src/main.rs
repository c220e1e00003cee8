use migration::Migrator;
use sea_orm_migration::cli;

/// `cargo run -p migration -- up` (reads `DATABASE_URL`)
#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
