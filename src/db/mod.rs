use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::config::Config;

// Definimos un alias para "Pool<Postgres>"
pub type DbPool = Pool<Postgres>;

pub async fn init_db(config: &Config) -> Result<DbPool, sqlx::Error> {
    // Creamos el pool de conexiones
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // Las migraciones van embebidas en el binario (carpeta migrations/)
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
