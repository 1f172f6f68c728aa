//! Graphviz IDE
//!
//! A small HTTP front-end that serves a directory of Graphviz sources as
//! browsable images, rendering each request through the external `dot`
//! binary and validating client caches against source modification times.

use std::sync::Arc;

use clap::Parser;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod markup;
mod render;
mod routing;
mod server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = config::Cli::parse();
    let settings = config::Settings::from_cli(&cli);
    let addr = settings.socket_addr()?;

    let state = Arc::new(config::AppState::new(settings)?);
    let listener = server::create_reusable_listener(addr)?;

    logger::log_server_start(state.settings.port);
    server::run_accept_loop(listener, state).await;

    Ok(())
}
