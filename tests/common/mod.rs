#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Response};
use uuid::Uuid;

use portfolio::config::{Config, CvConfig, NotifyPolicy};
use portfolio::db::SubmissionStore;
use portfolio::email::{Notifier, NotifyError};
use portfolio::models::{NewSubmission, Submission};
use portfolio::state::AppState;

pub const CV_BYTES: &[u8] = b"PK\x03\x04 not really a docx";
pub const CV_NAME: &str = "jane_doe_cv.docx";

/// In-memory store that records every saved submission.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Submission>>,
    fail: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn rows(&self) -> Vec<Submission> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn save(&self, submission: &NewSubmission) -> Result<Submission, sqlx::Error> {
        if self.fail {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let row = Submission {
            id: Uuid::now_v7(),
            name: submission.name().to_string(),
            email: submission.email().to_string(),
            subject: submission.subject().to_string(),
            message: submission.message().to_string(),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

/// Notifier that records every attempt and optionally fails it.
#[derive(Default)]
pub struct RecordingNotifier {
    attempts: Mutex<Vec<Submission>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn attempts(&self) -> Vec<Submission> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, submission: &Submission) -> Result<(), NotifyError> {
        self.attempts.lock().unwrap().push(submission.clone());
        if self.fail {
            return Err(NotifyError::Transport {
                message: "connection refused".to_string(),
                transient: true,
            });
        }
        Ok(())
    }
}

pub struct TestOptions {
    pub store: Arc<MemoryStore>,
    pub notifier: Option<Arc<RecordingNotifier>>,
    pub notify_policy: NotifyPolicy,
    pub write_cv: bool,
    pub max_body_size: usize,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            store: Arc::new(MemoryStore::default()),
            notifier: Some(Arc::new(RecordingNotifier::default())),
            notify_policy: NotifyPolicy::BestEffort,
            write_cv: true,
            max_body_size: 65_536,
        }
    }
}

/// A running test server backed by in-memory collaborators.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    pub notifier: Option<Arc<RecordingNotifier>>,
    pub cv_path: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn notifications(&self) -> Vec<Submission> {
        self.notifier
            .as_ref()
            .map(|n| n.attempts())
            .unwrap_or_default()
    }

    /// Post the contact form (form-urlencoded).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url("/client-form"))
            .form(data)
            .send()
            .await
            .expect("submit form failed")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.cv_path);
    }
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(TestOptions::default()).await
}

pub async fn spawn_app_with(options: TestOptions) -> TestApp {
    let cv_path = std::env::temp_dir().join(format!("portfolio_test_cv_{}.docx", Uuid::now_v7()));
    if options.write_cv {
        std::fs::write(&cv_path, CV_BYTES).expect("Failed to write test CV");
    }

    let config = Config {
        database_url: "postgres://unused".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
        max_body_size: options.max_body_size,
        owner_name: "Jane Doe".to_string(),
        cv: CvConfig {
            path: cv_path.clone(),
            download_name: CV_NAME.to_string(),
        },
        notify_policy: options.notify_policy,
        smtp: None,
    };

    let notifier: Option<Arc<dyn Notifier>> = options
        .notifier
        .clone()
        .map(|n| n as Arc<dyn Notifier>);
    let state = AppState::new(config, options.store.clone(), notifier);
    let app = portfolio::build_app(state);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        store: options.store,
        notifier: options.notifier,
        cv_path,
    }
}
