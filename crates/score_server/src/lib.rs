//! # Score Server
//!
//! HTTP backend for the maze shooter: serves the game client's static files
//! and keeps a flat JSON file of submitted high scores.
//!
//! - `GET /api/scores` returns every entry
//! - `POST /api/scores` with `{"name": string, "score": number}` appends one

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod error;
pub mod routes;
pub mod store;

use axum::body::Bytes;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;

pub use config::ServerConfig;
pub use error::ServerError;
pub use store::{ScoreEntry, ScoreStore, StoreError};

/// Score store shared between requests. The lock is held across the
/// append and the file write, so concurrent submissions never interleave.
pub type SharedStore = Arc<Mutex<ScoreStore>>;

/// Wrap a store for sharing between handlers
pub fn shared(store: ScoreStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}

/// Build the router: the score API plus static files from `static_dir`
pub fn app(store: SharedStore, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(
            "/api/scores",
            get({
                let store = Arc::clone(&store);
                move || routes::list_scores(store)
            })
            .post({
                let store = Arc::clone(&store);
                move |body: Bytes| routes::submit_score(store, body)
            }),
        )
        .fallback_service(ServeDir::new(static_dir))
}
