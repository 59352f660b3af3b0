//! Score server binary

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use tower_http::cors::CorsLayer;

use arena_engine::foundation::logging;
use score_server::config::PORT_VAR;
use score_server::{app, shared, ScoreStore, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("score_server")
        .about("Serves the maze shooter client and its high score API")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Server config file (.toml or .ron)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port to listen on, overrides $PORT and the config file")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("static-dir")
                .long("static-dir")
                .value_name("DIR")
                .help("Directory of the game client")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("scores-file")
                .long("scores-file")
                .value_name("FILE")
                .help("JSON file holding the scores")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("cors")
                .long("cors")
                .help("Allow cross-origin requests")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    logging::init();

    let config_path = matches.get_one::<PathBuf>("config");
    let mut config = ServerConfig::load(config_path.map(PathBuf::as_path))
        .with_context(|| format!("Failed to load server config {config_path:?}"))?;
    config.apply_port_var(std::env::var(PORT_VAR).ok().as_deref());
    if let Some(port) = matches.get_one::<u16>("port") {
        config.port = *port;
    }
    if let Some(dir) = matches.get_one::<PathBuf>("static-dir") {
        config.static_dir.clone_from(dir);
    }
    if let Some(file) = matches.get_one::<PathBuf>("scores-file") {
        config.scores_file.clone_from(file);
    }
    config.allow_cors |= matches.get_flag("cors");

    if !config.static_dir.is_dir() {
        log::warn!(
            "Static directory {} does not exist; only the API will answer",
            config.static_dir.display()
        );
    }

    let store = shared(ScoreStore::open(&config.scores_file));
    let mut router = app(store, &config.static_dir);
    if config.allow_cors {
        router = router.layer(CorsLayer::permissive());
    }

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("Server running on port {}", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
