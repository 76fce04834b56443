use uuid::Uuid;

use crate::config::NotifyPolicy;
use crate::error::AppError;
use crate::models::{ContactFields, MissingField, NewSubmission};
use crate::state::AppState;

pub const CONTACT_SECTION: &str = "/#contact-section";
pub const SITE_ROOT: &str = "/";

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A required field was missing. Nothing was stored or sent.
    Incomplete,
    Accepted {
        submission_id: Uuid,
        notified: bool,
    },
}

impl Outcome {
    pub fn redirect_target(&self) -> &'static str {
        match self {
            Outcome::Incomplete => CONTACT_SECTION,
            Outcome::Accepted { .. } => SITE_ROOT,
        }
    }
}

/// Validate, store, then notify the owner.
///
/// A storage failure aborts before anything is sent. A notification failure
/// never removes the stored row; `NotifyPolicy` decides whether the request
/// still succeeds.
#[tracing::instrument(
    name = "Handling contact submission",
    skip(state, form),
    fields(
        submitter_email = form.email.as_deref().unwrap_or_default(),
        subject = form.subject.as_deref().unwrap_or_default()
    )
)]
pub async fn run(state: &AppState, form: ContactFields) -> Result<Outcome, AppError> {
    let new_submission = match NewSubmission::parse(form) {
        Ok(s) => s,
        Err(missing) => {
            let names: Vec<&str> = missing.iter().map(MissingField::as_str).collect();
            tracing::debug!("Incomplete submission, missing: {}", names.join(", "));
            return Ok(Outcome::Incomplete);
        }
    };

    let submission = state.store.save(&new_submission).await?;
    tracing::info!(submission_id = %submission.id, "Submission stored");

    let Some(notifier) = &state.notifier else {
        tracing::warn!(submission_id = %submission.id, "No mailer configured, owner not notified");
        return Ok(Outcome::Accepted {
            submission_id: submission.id,
            notified: false,
        });
    };

    match notifier.notify(&submission).await {
        Ok(()) => {
            tracing::info!(submission_id = %submission.id, "Owner notified");
            Ok(Outcome::Accepted {
                submission_id: submission.id,
                notified: true,
            })
        }
        Err(e) => match state.config.notify_policy {
            NotifyPolicy::BestEffort => {
                tracing::error!(
                    submission_id = %submission.id,
                    transient = e.is_transient(),
                    "Owner notification failed: {e}"
                );
                Ok(Outcome::Accepted {
                    submission_id: submission.id,
                    notified: false,
                })
            }
            NotifyPolicy::Strict => {
                tracing::warn!(
                    submission_id = %submission.id,
                    transient = e.is_transient(),
                    "Submission stored but owner notification failed"
                );
                Err(AppError::Notification(e))
            }
        },
    }
}
