use crate::models::Submission;

/// Plain-text body of the owner alert.
pub fn render_submission_alert(submission: &Submission) -> String {
    let Submission {
        name,
        email,
        subject,
        ..
    } = submission;

    format!(
        "New submit from {name} ({email}). The subject/s required is/are: {subject}\n. Email {email} for more information."
    )
}
