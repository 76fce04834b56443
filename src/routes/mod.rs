pub mod contact;
pub mod download;
pub mod stats;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn site_routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/client-form",
            get(contact::client_form_page).post(contact::client_form),
        )
        .route("/download_cv", get(download::download_cv))
        .route("/api/stats", get(stats::stats))
}
