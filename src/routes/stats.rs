use axum::Json;

use crate::views::content::{self, Stats};

pub async fn stats() -> Json<Stats> {
    Json(content::STATS)
}
