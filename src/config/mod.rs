//! Configuration handling for the application.
//!
//! Process settings (port, site root, completion provider) come from the
//! environment via `Config::from_env`, with development defaults when a
//! variable is absent. The relevance and completion tuning knobs live in
//! their own structs so tests can build them without touching the
//! environment.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

/// Environment variable names. Public so tests and the binary can refer to
/// them.
pub const ENV_PORT: &str = "PORT";
pub const ENV_SITE_ROOT: &str = "SITE_ROOT";
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const ENV_COMPLETION_TIMEOUT_SECS: &str = "COMPLETION_TIMEOUT_SECS";
pub const ENV_CACHE_REFRESH_SECS: &str = "CACHE_REFRESH_SECS";

/// Default development values used when environment variables are absent.
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SITE_ROOT: &str = "./site";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-5";
const DEFAULT_CACHE_REFRESH_SECS: u64 = 60 * 60;

/// Pages crawled from the site root, in ranking tie-break order.
pub const SOURCE_DOCUMENTS: [&str; 4] = ["index.html", "products.html", "about.html", "contact.html"];

/// Site keywords in Persian and English. Any case-insensitive substring hit
/// marks a question as site-specific.
pub const SITE_KEYWORDS: [&str; 21] = [
    "محصول",
    "قیمت",
    "خدمات",
    "شرکت",
    "نوآوران",
    "سایت",
    "سفارش",
    "خرید",
    "پشتیبانی",
    "تماس",
    "آدرس",
    "product",
    "price",
    "service",
    "company",
    "website",
    "order",
    "buy",
    "support",
    "contact",
    "address",
];

/// Weights and cut-offs for classification, ranking and cache refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceSettings {
    pub site_keywords: Vec<String>,
    /// Keyword-free questions shorter than this (in characters) are small talk.
    pub short_question_chars: usize,
    /// Question tokens must be longer than this to count.
    pub min_token_chars: usize,
    pub title_bonus: u32,
    pub h1_bonus: u32,
    pub h2_bonus: u32,
    pub max_ranked: usize,
    pub max_sources: usize,
    pub refresh_interval: Duration,
}

impl Default for RelevanceSettings {
    fn default() -> Self {
        Self {
            site_keywords: SITE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            short_question_chars: 15,
            min_token_chars: 2,
            title_bonus: 10,
            h1_bonus: 8,
            h2_bonus: 5,
            max_ranked: 5,
            max_sources: 3,
            refresh_interval: Duration::from_secs(DEFAULT_CACHE_REFRESH_SECS),
        }
    }
}

/// Parameters of the chat completion request and of the answer templates.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub max_completion_tokens: u32,
    pub temperature: f32,
    /// Characters of page body embedded per page in the prompt.
    pub context_excerpt_chars: usize,
    /// Characters of the top page quoted in the offline fallback answer.
    pub fallback_excerpt_chars: usize,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_OPENAI_MODEL.to_string(),
            max_completion_tokens: 500,
            temperature: 0.7,
            context_excerpt_chars: 500,
            fallback_excerpt_chars: 300,
        }
    }
}

impl CompletionSettings {
    /// The gpt-5 family rejects custom temperatures, so it is left out up front.
    pub fn sends_temperature(&self) -> bool {
        !self.model.starts_with("gpt-5")
    }
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    port: u16,
    site_root: PathBuf,
    api_key: Option<String>,
    api_base_url: Url,
    completion_timeout: Option<Duration>,
    relevance: RelevanceSettings,
    completion: CompletionSettings,
}

impl Config {
    /// Create a new config explicitly with default tuning.
    pub fn new(port: u16, site_root: impl Into<PathBuf>, api_base_url: Url) -> Self {
        Self {
            port,
            site_root: site_root.into(),
            api_key: None,
            api_base_url,
            completion_timeout: None,
            relevance: RelevanceSettings::default(),
            completion: CompletionSettings::default(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_var(ENV_PORT)?.unwrap_or(DEFAULT_PORT);
        let site_root = env::var(ENV_SITE_ROOT).unwrap_or_else(|_| DEFAULT_SITE_ROOT.to_string());
        let api_key = env::var(ENV_OPENAI_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());
        let base_url =
            env::var(ENV_OPENAI_BASE_URL).unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        let api_base_url = Url::parse(&base_url).map_err(|e| ConfigError::InvalidValue {
            field: ENV_OPENAI_BASE_URL,
            reason: e.to_string(),
        })?;
        let completion_timeout = parse_var::<u64>(ENV_COMPLETION_TIMEOUT_SECS)?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        let refresh_secs =
            parse_var(ENV_CACHE_REFRESH_SECS)?.unwrap_or(DEFAULT_CACHE_REFRESH_SECS);

        let mut completion = CompletionSettings::default();
        if let Ok(model) = env::var(ENV_OPENAI_MODEL)
            && !model.trim().is_empty()
        {
            completion.model = model;
        }

        Ok(Self {
            port,
            site_root: PathBuf::from(site_root),
            api_key,
            api_base_url,
            completion_timeout,
            relevance: RelevanceSettings {
                refresh_interval: Duration::from_secs(refresh_secs),
                ..RelevanceSettings::default()
            },
            completion,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = Some(timeout);
        self
    }

    pub fn with_relevance(mut self, relevance: RelevanceSettings) -> Self {
        self.relevance = relevance;
        self
    }

    pub fn with_completion(mut self, completion: CompletionSettings) -> Self {
        self.completion = completion;
        self
    }

    /// TCP port for the HTTP server.
    pub fn port(&self) -> u16 {
        self.port
    }
    /// Bind address on all interfaces.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
    /// Directory holding the site's HTML and static assets.
    pub fn site_root(&self) -> &Path {
        &self.site_root
    }
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
    /// Base URL of the OpenAI-compatible API, e.g. `https://api.openai.com/v1`.
    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }
    /// `None` means the completion call waits indefinitely.
    pub fn completion_timeout(&self) -> Option<Duration> {
        self.completion_timeout
    }
    pub fn relevance(&self) -> &RelevanceSettings {
        &self.relevance
    }
    pub fn completion(&self) -> &CompletionSettings {
        &self.completion
    }
}

fn parse_var<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: name,
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
