//! Interactive console for managing establishments.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use saborexpress::infra::config::ConsoleSettings;
use saborexpress::infra::logging;
use saborexpress::transport::console::ConsoleMenu;
use saborexpress::{CatalogService, JsonFileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let settings = ConsoleSettings::parse();
    logging::init_console_logger(settings.verbose);

    let store = Arc::new(JsonFileStore::new(settings.storage.data_file_path()));
    let service = CatalogService::open(store).await;

    let stdin = io::stdin();
    let mut menu = ConsoleMenu::new(service, stdin.lock(), io::stdout());
    menu.run().await.context("console I/O failed")?;
    Ok(())
}
