use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_DISPOSITION;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::error::AppError;
use crate::state::SharedState;

/// Serve the configured CV as an attachment. Query parameters are ignored.
pub async fn download_cv(
    State(state): State<SharedState>,
    req: Request,
) -> Result<Response, AppError> {
    let cv = &state.config.cv;

    let mut res = match ServeFile::new(&cv.path).oneshot(req).await {
        Ok(res) => res,
        Err(never) => match never {},
    };

    if res.status().is_success() {
        let disposition = HeaderValue::from_str(&format!(
            "attachment; filename=\"{}\"",
            cv.download_name
        ))
        .map_err(|e| AppError::Internal(format!("Invalid CV download name: {e}")))?;
        res.headers_mut().insert(CONTENT_DISPOSITION, disposition);
    } else {
        tracing::warn!("CV download returned {} for {}", res.status(), cv.path.display());
    }

    Ok(res.map(Body::new).into_response())
}
