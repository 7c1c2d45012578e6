//! hop-server library - application state and router assembly

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use hop_common::catalog::ObjectiveCatalog;
use hop_common::config::DataPaths;
use hop_common::index::{RecordIndex, ResultKind};
use hop_common::Result;

pub mod api;

/// Application state shared across HTTP handlers.
///
/// Everything here is read-only after construction; each handler is a pure
/// function of (state, request).
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ObjectiveCatalog>,
    pub interference: Arc<RecordIndex>,
    pub physiology: Arc<RecordIndex>,
    /// Folder the raw data files are served from under /data
    pub data_folder: PathBuf,
}

impl AppState {
    /// Load the catalog and both record indexes from the data folder.
    ///
    /// Any missing or malformed input file fails the whole load; the
    /// process must not serve a degraded dataset.
    pub fn load(folder: &Path) -> Result<Self> {
        let paths = DataPaths::new(folder);
        let catalog = ObjectiveCatalog::load(&paths.objectives)?;
        let interference = RecordIndex::load(ResultKind::Interference, &paths.interference)?;
        let physiology = RecordIndex::load(ResultKind::Physiology, &paths.physiology)?;

        Ok(Self {
            catalog: Arc::new(catalog),
            interference: Arc::new(interference),
            physiology: Arc::new(physiology),
            data_folder: folder.to_path_buf(),
        })
    }
}

/// Build the application router.
///
/// Exposes the two endpoint families over both transports (POST with a
/// JSON body, GET with repeated query parameters), the health endpoint,
/// and the raw data files under /data. CORS is permissive on every route.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let data_dir = ServeDir::new(state.data_folder.clone());

    Router::new()
        .route(
            "/api/interference",
            post(api::interference).get(api::interference_query),
        )
        .route("/api/radar", post(api::radar))
        .route("/api/physiology", get(api::physiology_query))
        .merge(api::health_routes())
        .nest_service("/data", data_dir)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
