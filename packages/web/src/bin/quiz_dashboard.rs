use anyhow::Context as _;
use api::db::PostgresStore;
use store::MemoryStore;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    web::server::init_tracing();

    let settings = api::Settings::new().context("Invalid configuration")?;

    info!("Starting quiz dashboard...");
    let app = if settings.database.memory {
        warn!("Serving fixture data from memory, no database in use");
        web::quiz_dashboard::app(MemoryStore::sample(), &settings.session)
    } else {
        let store = PostgresStore::new(&settings.database);
        // Startup probe only; requests still connect on their own.
        if let Err(e) = store.ping().await {
            warn!(target_db = %settings.database.target(), error = %e, "Database not reachable");
        }
        web::quiz_dashboard::app(store, &settings.session)
    };

    web::server::serve(app, &settings.server).await
}
