//! harvest — run collection passes and administer the dedup registry.
//!
//! Wiring is config-driven: Redis registry when `REDIS_URL` is set (else an
//! in-process one), S3 storage when AWS credentials are configured (else the
//! local data dir), ZeroMQ announcements when `ANNOUNCE_ENDPOINT` is set
//! (else disabled). A run with any failed candidate exits non-zero so
//! schedulers notice, while still completing as much work as possible.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::warn;

use harvest_core::config::{load_dotenv, Config};
use harvest_core::Environment;
use harvest_notify::{Announcer, DisabledAnnouncer, ZmqAnnouncer};
use harvest_pipeline::{CollectionPipeline, RunOptions};
use harvest_registry::{DedupRegistry, MemoryRegistry, Namespace, RedisRegistry};
use harvest_sources::RestSource;
use harvest_store::{ArtifactSink, StorageBackend};

// ── CLI ─────────────────────────────────────────────────────────────

/// Content-addressed collection pipeline.
#[derive(Parser, Debug)]
#[command(name = "harvest", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one collection pass for a source group.
    Run {
        #[arg(long, env = "SOURCE_GROUP")]
        source_group: String,

        /// Partition date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,

        /// Endpoint to collect, as identifier=url. Repeatable.
        #[arg(long = "endpoint", value_parser = parse_pair, required = true)]
        endpoints: Vec<(String, String)>,

        /// Re-download and overwrite even when the registry knows the bytes.
        #[arg(long)]
        force: bool,

        /// Skip the dedup check entirely (testing only).
        #[arg(long)]
        skip_hash_check: bool,

        /// key=value forwarded to candidate generation. Repeatable.
        #[arg(long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,
    },

    /// Administer the dedup registry.
    Registry {
        #[command(subcommand)]
        command: RegistryCommand,
    },
}

#[derive(Subcommand, Debug)]
enum RegistryCommand {
    /// Count live records for a source group (full registry scan).
    Count {
        #[arg(long, env = "SOURCE_GROUP")]
        source_group: String,
    },

    /// Delete one fingerprint record.
    Delete {
        #[arg(long, env = "SOURCE_GROUP")]
        source_group: String,

        #[arg(long)]
        fingerprint: String,
    },
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}

// ── Wiring ──────────────────────────────────────────────────────────

fn build_registry(config: &Config) -> anyhow::Result<Arc<dyn DedupRegistry>> {
    let ttl = Duration::from_secs(u64::from(config.collection.dedup_ttl_days) * 24 * 60 * 60);
    if let Some(url) = &config.redis.url {
        let timeout = Duration::from_millis(config.redis.command_timeout_ms);
        Ok(Arc::new(RedisRegistry::new(url, ttl, timeout)?))
    } else {
        warn!("REDIS_URL not set — using in-process dedup registry, state is lost on exit");
        Ok(Arc::new(MemoryRegistry::new(ttl)))
    }
}

async fn build_announcer(config: &Config) -> anyhow::Result<Arc<dyn Announcer>> {
    match &config.announce.endpoint {
        Some(endpoint) if config.announce.bind => {
            Ok(Arc::new(ZmqAnnouncer::bind(endpoint).await?))
        }
        Some(endpoint) => Ok(Arc::new(ZmqAnnouncer::connect(endpoint).await?)),
        None => Ok(Arc::new(DisabledAnnouncer)),
    }
}

// ── main ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    load_dotenv();
    let config = Config::from_env();
    config.log_summary();

    let environment = Environment::from_str(&config.collection.environment)
        .context("HARVEST_ENV must be one of dev, staging, prod")?;

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            source_group,
            date,
            endpoints,
            force,
            skip_hash_check,
            params,
        } => {
            let registry = build_registry(&config)?;
            let backend = StorageBackend::from_config(&config)?;
            let announcer = build_announcer(&config).await?;

            let pipeline = CollectionPipeline::new(
                registry,
                ArtifactSink::new(backend),
                announcer,
                environment,
                config.collection.root_prefix.clone(),
                Duration::from_secs(config.collection.fetch_timeout_secs),
            );
            let source = RestSource::new(source_group, date, endpoints);
            let options = RunOptions {
                force,
                skip_hash_check,
                params: params.into_iter().collect(),
            };

            let result = pipeline.run(&source, &options).await;
            println!("{}", serde_json::to_string_pretty(&result)?);

            let generation_failed = result.total_candidates == 0 && !result.errors.is_empty();
            if result.failed > 0 || generation_failed {
                std::process::exit(1);
            }
        }

        Command::Registry { command } => {
            let registry = build_registry(&config)?;
            match command {
                RegistryCommand::Count { source_group } => {
                    let namespace = Namespace::new(environment, &source_group)?;
                    let count = registry.count(&namespace).await?;
                    println!(
                        "{}",
                        serde_json::json!({ "namespace": namespace.scope(), "count": count })
                    );
                }
                RegistryCommand::Delete {
                    source_group,
                    fingerprint,
                } => {
                    let namespace = Namespace::new(environment, &source_group)?;
                    let removed = registry.delete(&fingerprint, &namespace).await?;
                    println!(
                        "{}",
                        serde_json::json!({
                            "namespace": namespace.scope(),
                            "fingerprint": fingerprint,
                            "removed": removed,
                        })
                    );
                }
            }
        }
    }

    Ok(())
}
