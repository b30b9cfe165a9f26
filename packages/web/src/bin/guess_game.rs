use anyhow::Context as _;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    web::server::init_tracing();

    let settings = api::Settings::new().context("Invalid configuration")?;

    info!("Starting guessing game...");
    let app = web::guess_game::app(&settings.session);

    web::server::serve(app, &settings.server).await
}
