//! Run configuration.
//!
//! - `GeneratorConfig`: How many cards to generate and where to export them
//! - `NamingConfig`: Naming-service credentials, loaded from the environment
//!
//! Both are plain data with builder-style setters. Nothing here performs I/O
//! except `NamingConfig::from_env`.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::NamingError;

/// Default Gemini model used for card names.
pub const DEFAULT_NAMING_MODEL: &str = "gemini-1.5-flash";

/// Default base URL of the Gemini REST API.
pub const DEFAULT_NAMING_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for one generation run.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Seed for the run. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Standalone cards generated per rarity tier.
    pub singles_per_rarity: usize,

    /// Evolution series generated per rarity tier.
    pub series_per_rarity: usize,

    /// Stages per evolution series.
    pub series_length: u32,

    /// Root directory collections are exported into.
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            singles_per_rarity: 3,
            series_per_rarity: 1,
            series_length: 3,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl GeneratorConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the run seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set standalone cards per rarity.
    #[must_use]
    pub fn with_singles_per_rarity(mut self, count: usize) -> Self {
        self.singles_per_rarity = count;
        self
    }

    /// Set evolution series per rarity.
    #[must_use]
    pub fn with_series_per_rarity(mut self, count: usize) -> Self {
        self.series_per_rarity = count;
        self
    }

    /// Set stages per evolution series.
    #[must_use]
    pub fn with_series_length(mut self, length: u32) -> Self {
        self.series_length = length;
        self
    }

    /// Set the export root.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// Naming-service configuration.
#[derive(Clone, Debug)]
pub struct NamingConfig {
    /// API key. Naming is enabled only when this is present.
    pub api_key: Option<String>,

    /// Model identifier.
    pub model: String,

    /// Base API URL.
    pub api_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Attempts per prompt before giving up.
    pub attempts: u32,

    /// Fixed delay between attempts.
    pub retry_delay: Duration,

    /// Candidates requested per prompt.
    pub candidate_count: u32,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_NAMING_MODEL.to_owned(),
            api_url: DEFAULT_NAMING_API_URL.to_owned(),
            timeout: Duration::from_secs(30),
            attempts: 3,
            retry_delay: Duration::from_secs(3),
            candidate_count: 1,
        }
    }
}

impl NamingConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    ///
    /// Variables:
    /// - `GEMINI_API_KEY` -- credential; absent or empty disables naming
    /// - `GEMINI_MODEL` -- model name (default `gemini-1.5-flash`)
    /// - `GEMINI_API_URL` -- base URL
    /// - `NAMING_TIMEOUT_MS` -- request timeout in milliseconds (default 30000)
    /// - `NAMING_CANDIDATES` -- candidates per prompt (default 1)
    pub fn from_env() -> Result<Self, NamingError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value. Same variables and defaults as [`NamingConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NamingError> {
        let defaults = Self::default();

        let api_key = lookup("GEMINI_API_KEY").filter(|key| !key.trim().is_empty());

        let model = lookup("GEMINI_MODEL").unwrap_or(defaults.model);
        let api_url = lookup("GEMINI_API_URL").unwrap_or(defaults.api_url);

        let timeout_ms: u64 = lookup("NAMING_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".to_owned())
            .parse()
            .map_err(|e| NamingError::Config(format!("invalid NAMING_TIMEOUT_MS: {e}")))?;

        let candidate_count: u32 = lookup("NAMING_CANDIDATES")
            .unwrap_or_else(|| "1".to_owned())
            .parse()
            .map_err(|e| NamingError::Config(format!("invalid NAMING_CANDIDATES: {e}")))?;

        Ok(Self {
            api_key,
            model,
            api_url,
            timeout: Duration::from_millis(timeout_ms),
            candidate_count: candidate_count.max(1),
            ..defaults
        })
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the retry policy.
    #[must_use]
    pub fn with_retries(mut self, attempts: u32, delay: Duration) -> Self {
        self.attempts = attempts.max(1);
        self.retry_delay = delay;
        self
    }

    /// Whether a usable credential is configured.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
