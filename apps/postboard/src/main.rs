//! # Postboard
//!
//! Terminal client for a hosted posts table: create, list, search, edit
//! and delete short text posts.

mod command;
mod config;
mod session;
mod state;
mod telemetry;
mod terminal;

use std::io;

use postboard_core::PostsController;
use postboard_core::render::Renderer;

use config::AppConfig;
use terminal::TerminalView;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!("Starting postboard");

    let store = state::build_store(config.store.as_ref());
    let view = TerminalView::new(io::stdin().lock(), io::stdout());
    let mut controller = PostsController::new(store, view, Renderer::local());

    session::run(&mut controller).await
}
