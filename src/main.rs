use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

use gopher_translator::cli::Args;
use gopher_translator::history::HistoryStore;
use gopher_translator::logging;
use gopher_translator::server;
use gopher_translator::service::TranslationService;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let service = TranslationService::new(HistoryStore::new(args.history_file));

    let listener = TcpListener::bind((args.host, args.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", args.host, args.port))?;

    server::serve(listener, service).await
}
