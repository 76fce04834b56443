use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub max_body_size: usize,
    pub owner_name: String,
    pub cv: CvConfig,
    pub notify_policy: NotifyPolicy,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct CvConfig {
    pub path: PathBuf,
    pub download_name: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub tls: TlsMode,
    pub timeout: Duration,
    pub recipients: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TlsMode {
    /// Plain connection upgraded with STARTTLS (usually port 587).
    StartTls,
    /// Implicit TLS from the first byte (usually port 465).
    Tls,
    None,
}

/// What the contact workflow does when the owner notification fails.
/// The stored submission is kept under either policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotifyPolicy {
    BestEffort,
    Strict,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        let database_url = env.required("DATABASE_URL")?;

        let host: IpAddr = env
            .or("PORTFOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_HOST: {e}"))?;

        let port: u16 = env
            .or("PORTFOLIO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_PORT: {e}"))?;

        let log_level = env.or("PORTFOLIO_LOG_LEVEL", "info");

        let max_body_size: usize = env
            .or("PORTFOLIO_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_MAX_BODY_SIZE: {e}"))?;

        let owner_name = env.or("PORTFOLIO_OWNER_NAME", "Portfolio");

        let cv_path = PathBuf::from(env.or("PORTFOLIO_CV_PATH", "static/files/cv.docx"));
        let download_name = match env.get("PORTFOLIO_CV_FILENAME") {
            Some(name) => name,
            None => cv_path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.to_string())
                .ok_or_else(|| {
                    format!("PORTFOLIO_CV_PATH has no file name: {}", cv_path.display())
                })?,
        };
        if !is_plain_filename(&download_name) {
            return Err(format!(
                "Invalid PORTFOLIO_CV_FILENAME {download_name:?}: use printable ASCII without quotes or backslashes"
            ));
        }

        let notify_policy = match env.or("PORTFOLIO_NOTIFY_POLICY", "best-effort").as_str() {
            "best-effort" => NotifyPolicy::BestEffort,
            "strict" => NotifyPolicy::Strict,
            other => return Err(format!("Invalid PORTFOLIO_NOTIFY_POLICY: {other}")),
        };

        let smtp = match env.get("PORTFOLIO_SMTP_HOST") {
            Some(host) => Some(smtp_from(&env, host)?),
            None => None,
        };

        Ok(Config {
            database_url,
            host,
            port,
            log_level,
            max_body_size,
            owner_name,
            cv: CvConfig {
                path: cv_path,
                download_name,
            },
            notify_policy,
            smtp,
        })
    }
}

fn smtp_from<F>(env: &Env<F>, host: String) -> Result<SmtpConfig, String>
where
    F: Fn(&str) -> Option<String>,
{
    let port: u16 = env
        .or("PORTFOLIO_SMTP_PORT", "587")
        .parse()
        .map_err(|e| format!("Invalid PORTFOLIO_SMTP_PORT: {e}"))?;

    let user = env.required("PORTFOLIO_SMTP_USER")?;
    let pass = env.required("PORTFOLIO_SMTP_PASS")?;
    let from = env.required("PORTFOLIO_SMTP_FROM")?;

    let tls = match env.or("PORTFOLIO_SMTP_TLS", "starttls").as_str() {
        "starttls" => TlsMode::StartTls,
        "tls" => TlsMode::Tls,
        "none" => TlsMode::None,
        other => return Err(format!("Invalid PORTFOLIO_SMTP_TLS: {other}")),
    };

    let timeout_secs: u64 = env
        .or("PORTFOLIO_SMTP_TIMEOUT_SECS", "10")
        .parse()
        .map_err(|e| format!("Invalid PORTFOLIO_SMTP_TIMEOUT_SECS: {e}"))?;

    let recipients = split_recipients(&env.or("PORTFOLIO_NOTIFY_RECIPIENTS", &user));
    if recipients.is_empty() {
        return Err("PORTFOLIO_NOTIFY_RECIPIENTS lists no addresses".to_string());
    }

    Ok(SmtpConfig {
        host,
        port,
        user,
        pass,
        from,
        tls,
        timeout: Duration::from_secs(timeout_secs),
        recipients,
    })
}

/// Names that can go into a quoted `Content-Disposition` filename as-is.
fn is_plain_filename(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| (b' '..=b'~').contains(&b) && b != b'"' && b != b'\\')
}

/// Split a comma-separated address list, dropping blank entries.
pub fn split_recipients(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.is_empty())
    }

    fn required(&self, key: &str) -> Result<String, String> {
        self.get(key)
            .ok_or_else(|| format!("Missing required environment variable: {key}"))
    }

    fn or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}
