use common::persistence::PG_POOL;

#[tokio::main]
async fn main() {
    sqlx::migrate!("src/persistence/migrations")
        .run(&*PG_POOL)
        .await
        .expect("failed to run migrations");
}
