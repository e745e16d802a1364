use std::sync::Arc;

use tracing::{error, info};

use tabload::infrastructure::config::Settings;
use tabload::infrastructure::db::{connect_pool, PgTableStore};
use tabload::interfaces::http::start_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            error!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let pool = match connect_pool(&settings.database_url).await {
        Ok(pool) => pool,
        Err(err) => {
            error!("database bootstrap failed: {}", err);
            std::process::exit(1);
        }
    };

    let store = Arc::new(PgTableStore::new(pool));

    info!("listening on {}", settings.bind_addr);
    start_server(&settings, store)?.await
}
