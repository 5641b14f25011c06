use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u32(profile: &str, key: &str, default: u32) -> u32 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_u64(profile: &str, key: &str, default: u64) -> u64 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub collection: CollectionConfig,
    pub aws: AwsConfig,
    pub redis: RedisConfig,
    pub announce: AnnounceConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `HARVEST_PROFILE`. When set (e.g. `PROD`), every
    /// key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("HARVEST_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            collection: CollectionConfig::from_env_profiled(p),
            aws: AwsConfig::from_env_profiled(p),
            redis: RedisConfig::from_env_profiled(p),
            announce: AnnounceConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  collection: env={}, root={}, ttl={}d",
            self.collection.environment,
            self.collection.root_prefix,
            self.collection.dedup_ttl_days
        );
        tracing::info!(
            "  aws:        region={}, bucket={}",
            self.aws.region,
            self.aws.s3_bucket.as_deref().unwrap_or("(none)")
        );
        tracing::info!(
            "  redis:      url={}",
            if self.redis.is_configured() { "(set)" } else { "(none)" }
        );
        tracing::info!(
            "  announce:   endpoint={}",
            self.announce.endpoint.as_deref().unwrap_or("(disabled)")
        );
    }
}

// ── Collection ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Deployment environment string; parsed into [`crate::Environment`]
    /// at wiring time so unknown values fail loudly.
    pub environment: String,
    /// Root segment of every storage key.
    pub root_prefix: String,
    /// Default per-candidate fetch timeout; candidates can override via
    /// the `timeout_secs` fetch param.
    pub fetch_timeout_secs: u64,
    /// Dedup registry TTL. After expiry the same bytes are treated as novel
    /// again, bounding registry size.
    pub dedup_ttl_days: u32,
    /// Local object-store root, used when S3 is not configured.
    pub data_dir: PathBuf,
}

impl CollectionConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            environment: profiled_env_or(p, "HARVEST_ENV", "dev"),
            root_prefix: profiled_env_or(p, "COLLECTION_ROOT", "collected"),
            fetch_timeout_secs: profiled_env_u64(p, "FETCH_TIMEOUT_SECS", 30),
            dedup_ttl_days: profiled_env_u32(p, "DEDUP_TTL_DAYS", 365),
            data_dir: PathBuf::from(profiled_env_or(p, "DATA_DIR", "data")),
        }
    }
}

// ── AWS / S3 ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub s3_bucket: Option<String>,
    pub endpoint_url: Option<String>,
}

impl AwsConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            region: profiled_env_or(p, "AWS_REGION", "us-east-1"),
            access_key_id: profiled_env_opt(p, "AWS_ACCESS_KEY_ID"),
            secret_access_key: profiled_env_opt(p, "AWS_SECRET_ACCESS_KEY"),
            session_token: profiled_env_opt(p, "AWS_SESSION_TOKEN"),
            s3_bucket: profiled_env_opt(p, "S3_BUCKET"),
            endpoint_url: profiled_env_opt(p, "AWS_ENDPOINT_URL"),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.access_key_id.is_some() && self.s3_bucket.is_some()
    }
}

// ── Redis (dedup registry) ────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub url: Option<String>,
    pub command_timeout_ms: u64,
}

impl RedisConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            url: profiled_env_opt(p, "REDIS_URL"),
            command_timeout_ms: profiled_env_u64(p, "REDIS_TIMEOUT_MS", 5000),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

// ── Announce (artifact events) ────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnounceConfig {
    /// ZeroMQ endpoint for artifact announcements (e.g. tcp://127.0.0.1:5556).
    /// Unset means announcements are disabled — a legal, silent no-op.
    pub endpoint: Option<String>,
    /// Bind instead of connect (direct PUB/SUB without a broker).
    pub bind: bool,
}

impl AnnounceConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            endpoint: profiled_env_opt(p, "ANNOUNCE_ENDPOINT"),
            bind: profiled_env_or(p, "ANNOUNCE_BIND", "false") == "true",
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}
