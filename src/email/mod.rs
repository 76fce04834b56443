pub mod templates;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::{SmtpConfig, TlsMode};
use crate::models::Submission;

pub const ALERT_SUBJECT: &str = "POTENTIAL CLIENT OR JOB OPPORTUNITY";

#[derive(Debug)]
pub enum NotifyError {
    /// The email could not be built, e.g. a configured address does not parse.
    Message(String),
    /// The SMTP exchange failed. `transient` is false only for a permanent (5xx) reply.
    Transport { message: String, transient: bool },
}

impl NotifyError {
    /// True when retrying the same send later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, NotifyError::Transport { transient: true, .. })
    }
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyError::Message(msg) => write!(f, "Failed to build email: {msg}"),
            NotifyError::Transport { message, .. } => write!(f, "Failed to send email: {message}"),
        }
    }
}

impl std::error::Error for NotifyError {}

/// Tells the site owner about a new submission.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, submission: &Submission) -> Result<(), NotifyError>;
}

pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipients: Vec<Mailbox>,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| format!("Invalid from address '{}': {e}", config.from))?;

        let recipients = config
            .recipients
            .iter()
            .map(|r| {
                r.parse::<Mailbox>()
                    .map_err(|e| format!("Invalid recipient address '{r}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if recipients.is_empty() {
            return Err("No notification recipients configured".to_string());
        }

        Ok(Self {
            transport: build_transport(config)?,
            from,
            recipients,
        })
    }

    /// Build the alert email for a submission without sending it.
    pub fn build_message(&self, submission: &Submission) -> Result<Message, NotifyError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(ALERT_SUBJECT)
            .header(ContentType::TEXT_PLAIN);

        for recipient in &self.recipients {
            builder = builder.to(recipient.clone());
        }

        builder
            .body(templates::render_submission_alert(submission))
            .map_err(|e| NotifyError::Message(e.to_string()))
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, submission: &Submission) -> Result<(), NotifyError> {
        let message = self.build_message(submission)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport {
                // Only a 5xx reply is final; 4xx, network and timeout errors may clear up
                transient: !e.is_permanent(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}

fn build_transport(config: &SmtpConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>, String> {
    let creds = Credentials::new(config.user.clone(), config.pass.clone());

    let builder = match config.tls {
        TlsMode::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| format!("SMTP relay error: {e}"))?,
        TlsMode::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP starttls error: {e}"))?,
        TlsMode::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
    };

    Ok(builder
        .port(config.port)
        .credentials(creds)
        .timeout(Some(config.timeout))
        .build())
}
