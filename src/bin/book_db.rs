use catalog::core::{BookState, Config, Service, db, server};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::init_tracing();

    // Inizializza la configurazione
    let config = Config::from_env(Service::Book)?;
    config.print_info();

    let pool = db::connect(&config).await?;
    let state = Arc::new(BookState::new(pool));

    // Lo schema viene creato all'avvio se assente
    state.book.create_table().await?;

    let app = catalog::create_book_router(state);
    server::serve(app, &config.bind_address()).await?;

    Ok(())
}
