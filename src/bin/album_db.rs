use catalog::core::{AlbumState, Config, Service, db, server};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::init_tracing();

    let config = Config::from_env(Service::Album)?;
    config.print_info();

    let pool = db::connect(&config).await?;
    let state = Arc::new(AlbumState::new(pool));
    state.album.create_table().await?;

    let app = catalog::create_album_router(state);
    server::serve(app, &config.bind_address()).await?;

    Ok(())
}
