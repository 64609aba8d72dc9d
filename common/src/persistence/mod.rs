use crate::config::CONFIG;
use sqlx::postgres::PgPoolOptions;
use std::sync::LazyLock;

pub mod catalog;
pub mod error;
pub mod models;

pub type PgPool = sqlx::PgPool;

pub fn init_pg_pool() -> PgPool {
    let db_url = format!(
        "postgres://{user}:{password}@{host}:{port}/{db_name}",
        user = CONFIG.postgres.user,
        password = CONFIG.postgres.password,
        host = CONFIG.postgres.host,
        port = CONFIG.postgres.port,
        db_name = CONFIG.postgres.db_name
    );
    PgPoolOptions::new()
        .connect_lazy(&db_url)
        .expect("build pool")
}

pub static PG_POOL: LazyLock<PgPool> = LazyLock::new(init_pg_pool);
