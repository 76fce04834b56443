use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};

use crate::error::AppError;
use crate::models::ContactFields;
use crate::state::SharedState;
use crate::submission::workflow::SITE_ROOT;
use crate::submission::{parser, workflow};

pub async fn client_form(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let parsed = if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parser::parse_multipart(&headers, body).await
    } else {
        parser::parse_body(content_type, &body)
    };

    // An unreadable body is treated like an empty form
    let fields = parsed.unwrap_or_else(|e| {
        tracing::debug!("Unparseable contact form body: {e}");
        ContactFields::default()
    });

    let outcome = workflow::run(&state, fields).await?;
    Ok(Redirect::to(outcome.redirect_target()).into_response())
}

pub async fn client_form_page() -> Redirect {
    Redirect::to(SITE_ROOT)
}
