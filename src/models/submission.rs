use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Raw contact form fields as they arrived. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A contact submission with every required field present, ready to store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissingField {
    Name,
    Email,
    Subject,
    Message,
}

impl MissingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingField::Name => "name",
            MissingField::Email => "email",
            MissingField::Subject => "subject",
            MissingField::Message => "message",
        }
    }
}

impl NewSubmission {
    /// Presence check only: a field counts as missing when it is absent or
    /// blank. Values are kept exactly as submitted.
    pub fn parse(fields: ContactFields) -> Result<Self, Vec<MissingField>> {
        let mut missing = Vec::new();

        let name = present(fields.name, MissingField::Name, &mut missing);
        let email = present(fields.email, MissingField::Email, &mut missing);
        let subject = present(fields.subject, MissingField::Subject, &mut missing);
        let message = present(fields.message, MissingField::Message, &mut missing);

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(missing),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn present(
    value: Option<String>,
    field: MissingField,
    missing: &mut Vec<MissingField>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}
