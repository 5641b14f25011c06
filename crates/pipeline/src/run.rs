//! The shared collection pass: generate → fetch → validate → fingerprint →
//! dedup → store → announce → register.
//!
//! All dependencies arrive by injection at construction time; the pipeline
//! keeps no state across runs beyond what the dedup registry holds.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use harvest_core::{Candidate, Environment};
use harvest_notify::{Announcer, ArtifactEvent};
use harvest_registry::{fingerprint, DedupRegistry, HashRecord, Namespace};
use harvest_store::{build_path, ArtifactSink, COMPRESSION_SUFFIX};

use crate::result::{CandidateOutcome, RunOptions, RunResult};
use crate::source::SourceAdapter;

pub struct CollectionPipeline {
    registry: Arc<dyn DedupRegistry>,
    sink: ArtifactSink,
    announcer: Arc<dyn Announcer>,
    environment: Environment,
    root_prefix: String,
    fetch_timeout: Duration,
}

impl CollectionPipeline {
    pub fn new(
        registry: Arc<dyn DedupRegistry>,
        sink: ArtifactSink,
        announcer: Arc<dyn Announcer>,
        environment: Environment,
        root_prefix: impl Into<String>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            sink,
            announcer,
            environment,
            root_prefix: root_prefix.into(),
            fetch_timeout,
        }
    }

    /// Run one end-to-end collection pass for a source.
    ///
    /// Only a `generate` failure aborts the run; every other error is
    /// isolated to the candidate it occurred on. The announcer is closed on
    /// every exit path.
    pub async fn run(&self, source: &dyn SourceAdapter, options: &RunOptions) -> RunResult {
        let result = self.run_inner(source, options).await;
        if let Err(e) = self.announcer.close().await {
            warn!(error = %e, "announcer close failed");
        }
        result
    }

    async fn run_inner(&self, source: &dyn SourceAdapter, options: &RunOptions) -> RunResult {
        let group = source.source_group();
        let run_id = Uuid::new_v4();
        let mut result = RunResult::default();

        let namespace = match Namespace::new(self.environment, group) {
            Ok(ns) => ns,
            Err(e) => {
                result.errors.push(crate::result::CandidateFailure {
                    candidate_id: group.to_string(),
                    message: e.to_string(),
                });
                return result;
            }
        };

        let candidates = match source.generate(&options.params).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(source_group = %group, error = %e, "candidate generation failed");
                result.errors.push(crate::result::CandidateFailure {
                    candidate_id: group.to_string(),
                    message: format!("candidate generation failed: {e}"),
                });
                return result;
            }
        };

        result.total_candidates = candidates.len();
        info!(
            source_group = %group,
            run_id = %run_id,
            candidates = candidates.len(),
            force = options.force,
            "collection pass started"
        );

        for candidate in &candidates {
            let outcome = self
                .process_candidate(source, candidate, &namespace, options, run_id)
                .await;
            match outcome {
                CandidateOutcome::Collected => {
                    debug!(candidate = %candidate.identifier, "collected");
                    result.collected += 1;
                }
                CandidateOutcome::SkippedDuplicate => {
                    debug!(candidate = %candidate.identifier, "skipped duplicate");
                    result.skipped_duplicate += 1;
                }
                CandidateOutcome::Failed(message) => {
                    warn!(candidate = %candidate.identifier, error = %message, "candidate failed");
                    result.record_failure(&candidate.identifier, message);
                }
            }
        }

        info!(
            source_group = %group,
            run_id = %run_id,
            collected = result.collected,
            skipped_duplicate = result.skipped_duplicate,
            failed = result.failed,
            "collection pass finished"
        );
        result
    }

    async fn process_candidate(
        &self,
        source: &dyn SourceAdapter,
        candidate: &Candidate,
        namespace: &Namespace,
        options: &RunOptions,
        run_id: Uuid,
    ) -> CandidateOutcome {
        if candidate.identifier.is_empty() {
            return CandidateOutcome::Failed("candidate identifier is empty".to_string());
        }

        // Fetch, bounded by the candidate's own timeout when it sets one.
        let timeout = candidate
            .fetch_params
            .get("timeout_secs")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(self.fetch_timeout);
        let content = match tokio::time::timeout(timeout, source.fetch(candidate)).await {
            Err(_) => {
                return CandidateOutcome::Failed(format!(
                    "fetch timed out after {}s",
                    timeout.as_secs()
                ))
            }
            Ok(Err(e)) => return CandidateOutcome::Failed(format!("fetch failed: {e}")),
            Ok(Ok(content)) => content,
        };

        if !source.validate(&content, candidate) {
            return CandidateOutcome::Failed("content validation failed".to_string());
        }

        let content_fingerprint = fingerprint(&content);

        // skip_hash_check short-circuits the dedup check entirely; force
        // bypasses it but still re-registers below.
        if options.skip_hash_check {
            debug!(candidate = %candidate.identifier, "hash check skipped");
        } else if !options.force {
            match self.registry.exists(&content_fingerprint, namespace).await {
                Ok(true) => return CandidateOutcome::SkippedDuplicate,
                Ok(false) => {}
                Err(e) => return CandidateOutcome::Failed(format!("dedup check failed: {e}")),
            }
        }

        let key = build_path(&self.root_prefix, namespace.source_group(), candidate);
        let receipt = match self.sink.put(&content, &key).await {
            Ok(receipt) => receipt,
            Err(e) => return CandidateOutcome::Failed(e.to_string()),
        };

        // Best-effort announce; never changes the candidate's outcome.
        let event = self.build_event(candidate, namespace, &key, &receipt, &content, &content_fingerprint, run_id);
        if let Err(e) = self.announcer.announce(&event).await {
            warn!(
                candidate = %candidate.identifier,
                channel = self.announcer.channel_name(),
                error = %e,
                "artifact announcement failed"
            );
        }

        // Register after the store so a registry outage can never lose
        // already-written content; the cost is a possible duplicate
        // re-store next run.
        let mut extra = candidate.metadata.clone();
        extra.insert("version".to_string(), event.version.clone());
        extra.insert("integrity".to_string(), event.integrity.clone());
        let record = HashRecord::new(&content_fingerprint, namespace, &key, extra);
        if let Err(e) = self.registry.register(record).await {
            warn!(
                candidate = %candidate.identifier,
                fingerprint = %content_fingerprint,
                error = %e,
                "fingerprint registration failed; content is stored and may be re-collected"
            );
        }

        CandidateOutcome::Collected
    }

    #[allow(clippy::too_many_arguments)]
    fn build_event(
        &self,
        candidate: &Candidate,
        namespace: &Namespace,
        key: &str,
        receipt: &harvest_store::PutReceipt,
        content: &[u8],
        content_fingerprint: &str,
        run_id: Uuid,
    ) -> ArtifactEvent {
        let artifact_id = candidate
            .identifier
            .strip_suffix(COMPRESSION_SUFFIX)
            .unwrap_or(&candidate.identifier)
            .to_string();

        let mut metadata = candidate.metadata.clone();
        metadata.insert("collected_at".to_string(), Utc::now().to_rfc3339());
        metadata.insert("run_id".to_string(), run_id.to_string());
        metadata.insert(
            "source_location".to_string(),
            candidate.source_location.clone(),
        );
        metadata.insert("raw_bytes".to_string(), content.len().to_string());
        metadata.insert("fingerprint".to_string(), content_fingerprint.to_string());

        ArtifactEvent {
            source_group: namespace.source_group().to_string(),
            environment: namespace.environment(),
            artifact_id,
            location: key.to_string(),
            version: receipt.version.clone().unwrap_or_default(),
            integrity: receipt.integrity.clone().unwrap_or_default(),
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use harvest_notify::NotifyError;
    use harvest_registry::{MemoryRegistry, RegistryError};
    use harvest_store::{LocalBackend, StorageBackend};

    use crate::error::SourceError;
    use crate::source::GenerateParams;

    // ── Fakes ───────────────────────────────────────────────────────

    struct TestSource {
        group: &'static str,
        candidates: Vec<Candidate>,
        generation_error: Option<String>,
        fail_fetch: HashSet<String>,
        reject: HashSet<String>,
        slow: HashSet<String>,
        content: HashMap<String, Vec<u8>>,
    }

    impl TestSource {
        fn new(group: &'static str, candidates: Vec<Candidate>) -> Self {
            Self {
                group,
                candidates,
                generation_error: None,
                fail_fetch: HashSet::new(),
                reject: HashSet::new(),
                slow: HashSet::new(),
                content: HashMap::new(),
            }
        }
    }

    #[async_trait]
    impl SourceAdapter for TestSource {
        fn source_group(&self) -> &str {
            self.group
        }

        async fn generate(&self, _params: &GenerateParams) -> Result<Vec<Candidate>, SourceError> {
            if let Some(message) = &self.generation_error {
                return Err(SourceError::Generation(message.clone()));
            }
            Ok(self.candidates.clone())
        }

        async fn fetch(&self, candidate: &Candidate) -> Result<Vec<u8>, SourceError> {
            if self.slow.contains(&candidate.identifier) {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            if self.fail_fetch.contains(&candidate.identifier) {
                return Err(SourceError::Other("connection reset".to_string()));
            }
            Ok(self
                .content
                .get(&candidate.identifier)
                .cloned()
                .unwrap_or_else(|| format!("payload for {}", candidate.identifier).into_bytes()))
        }

        fn validate(&self, content: &[u8], candidate: &Candidate) -> bool {
            !content.is_empty() && !self.reject.contains(&candidate.identifier)
        }
    }

    struct CountingRegistry {
        inner: MemoryRegistry,
        exists_calls: AtomicUsize,
        fail_exists: bool,
        fail_register: bool,
    }

    impl CountingRegistry {
        fn new() -> Self {
            Self {
                inner: MemoryRegistry::with_default_ttl(),
                exists_calls: AtomicUsize::new(0),
                fail_exists: false,
                fail_register: false,
            }
        }
    }

    #[async_trait]
    impl DedupRegistry for CountingRegistry {
        async fn exists(
            &self,
            fingerprint: &str,
            namespace: &Namespace,
        ) -> Result<bool, RegistryError> {
            self.exists_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_exists {
                return Err(RegistryError::Timeout(Duration::from_millis(10)));
            }
            self.inner.exists(fingerprint, namespace).await
        }

        async fn register(&self, record: HashRecord) -> Result<(), RegistryError> {
            if self.fail_register {
                return Err(RegistryError::Timeout(Duration::from_millis(10)));
            }
            self.inner.register(record).await
        }

        async fn count(&self, namespace: &Namespace) -> Result<usize, RegistryError> {
            self.inner.count(namespace).await
        }

        async fn delete(
            &self,
            fingerprint: &str,
            namespace: &Namespace,
        ) -> Result<bool, RegistryError> {
            self.inner.delete(fingerprint, namespace).await
        }
    }

    #[derive(Default)]
    struct CapturingAnnouncer {
        events: Mutex<Vec<ArtifactEvent>>,
        closes: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl Announcer for CapturingAnnouncer {
        async fn announce(&self, event: &ArtifactEvent) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError::Transport("broker unreachable".to_string()));
            }
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }

        async fn close(&self) -> Result<(), NotifyError> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn channel_name(&self) -> &str {
            "capturing"
        }
    }

    // ── Helpers ─────────────────────────────────────────────────────

    fn cand(id: &str) -> Candidate {
        Candidate::new(
            id,
            format!("https://api.example.com/{id}"),
            NaiveDate::from_ymd_opt(2025, 12, 3).unwrap(),
        )
    }

    fn pipeline_at(
        dir_name: &str,
        registry: Arc<dyn DedupRegistry>,
        announcer: Arc<dyn Announcer>,
    ) -> (CollectionPipeline, PathBuf) {
        let tmp = std::env::temp_dir().join(dir_name);
        std::fs::remove_dir_all(&tmp).ok();
        std::fs::create_dir_all(&tmp).unwrap();
        let backend = StorageBackend::Local(LocalBackend::new(&tmp).unwrap());
        let pipeline = CollectionPipeline::new(
            registry,
            ArtifactSink::new(backend),
            announcer,
            Environment::Dev,
            "collected",
            Duration::from_secs(5),
        );
        (pipeline, tmp)
    }

    // ── Tests ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn second_identical_run_skips_duplicate() {
        let registry = Arc::new(MemoryRegistry::with_default_ttl());
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) =
            pipeline_at("harvest-pipe-idempotent", registry, announcer.clone());

        let source = TestSource::new("miso_fuel_mix", vec![cand("fuel_mix_20251203_1400.json")]);
        let options = RunOptions::default();

        let first = pipeline.run(&source, &options).await;
        assert_eq!(first.collected, 1);
        assert_eq!(first.skipped_duplicate, 0);
        assert!(first.errors.is_empty());

        let second = pipeline.run(&source, &options).await;
        assert_eq!(second.collected, 0);
        assert_eq!(second.skipped_duplicate, 1);

        // One object on disk, at the deterministic partitioned key.
        let expected = tmp.join(
            "collected/miso_fuel_mix/year=2025/month=12/day=03/fuel_mix_20251203_1400.json.zst",
        );
        assert!(expected.is_file());
        // Only one announcement — the duplicate was never re-announced.
        assert_eq!(announcer.events.lock().unwrap().len(), 1);

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn force_rerun_stores_and_reregisters() {
        let registry = Arc::new(CountingRegistry::new());
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) =
            pipeline_at("harvest-pipe-force", registry.clone(), announcer.clone());

        let source = TestSource::new("grp", vec![cand("a.json")]);
        pipeline.run(&source, &RunOptions::default()).await;

        let forced = pipeline
            .run(
                &source,
                &RunOptions {
                    force: true,
                    ..Default::default()
                },
            )
            .await;
        assert_eq!(forced.collected, 1);
        assert_eq!(forced.skipped_duplicate, 0);

        // Force bypassed the check (only the first run consulted it) but
        // still re-registered: one live record, two announcements.
        assert_eq!(registry.exists_calls.load(Ordering::SeqCst), 1);
        let ns = Namespace::new(Environment::Dev, "grp").unwrap();
        assert_eq!(registry.count(&ns).await.unwrap(), 1);
        assert_eq!(announcer.events.lock().unwrap().len(), 2);

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn skip_hash_check_never_consults_registry() {
        let registry = Arc::new(CountingRegistry::new());
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) =
            pipeline_at("harvest-pipe-skiphash", registry.clone(), announcer);

        let source = TestSource::new("grp", vec![cand("a.json")]);
        let options = RunOptions {
            skip_hash_check: true,
            ..Default::default()
        };

        let first = pipeline.run(&source, &options).await;
        let second = pipeline.run(&source, &options).await;
        assert_eq!(first.collected, 1);
        assert_eq!(second.collected, 1);
        assert_eq!(second.skipped_duplicate, 0);
        assert_eq!(registry.exists_calls.load(Ordering::SeqCst), 0);

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn fetch_failure_is_isolated_to_its_candidate() {
        let registry = Arc::new(MemoryRegistry::with_default_ttl());
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) = pipeline_at("harvest-pipe-isolation", registry, announcer);

        let mut source = TestSource::new(
            "grp",
            vec![cand("a.json"), cand("b.json"), cand("c.json")],
        );
        source.fail_fetch.insert("b.json".to_string());

        let result = pipeline.run(&source, &RunOptions::default()).await;
        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.collected, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].candidate_id, "b.json");
        assert!(result.errors[0].message.contains("fetch failed"));

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn validation_failure_uses_fixed_message() {
        let registry = Arc::new(MemoryRegistry::with_default_ttl());
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) = pipeline_at("harvest-pipe-validate", registry, announcer);

        let mut source = TestSource::new("grp", vec![cand("a.json")]);
        source.reject.insert("a.json".to_string());

        let result = pipeline.run(&source, &RunOptions::default()).await;
        assert_eq!(result.failed, 1);
        assert_eq!(result.errors[0].message, "content validation failed");

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn generation_failure_short_circuits() {
        let registry = Arc::new(MemoryRegistry::with_default_ttl());
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) =
            pipeline_at("harvest-pipe-genfail", registry, announcer.clone());

        let mut source = TestSource::new("grp", vec![cand("a.json")]);
        source.generation_error = Some("upstream index unavailable".to_string());

        let result = pipeline.run(&source, &RunOptions::default()).await;
        assert_eq!(result.total_candidates, 0);
        assert_eq!(result.collected, 0);
        assert_eq!(result.skipped_duplicate, 0);
        assert_eq!(result.failed, 0);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].message.contains("upstream index unavailable"));

        // The announcer is still closed on the abort path.
        assert_eq!(announcer.closes.load(Ordering::SeqCst), 1);

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn announcement_failure_never_fails_the_run() {
        let registry = Arc::new(MemoryRegistry::with_default_ttl());
        let announcer = Arc::new(CapturingAnnouncer {
            fail: true,
            ..Default::default()
        });
        let (pipeline, tmp) = pipeline_at("harvest-pipe-notifyfail", registry, announcer);

        let source = TestSource::new("grp", vec![cand("a.json"), cand("b.json")]);
        let result = pipeline.run(&source, &RunOptions::default()).await;

        assert_eq!(result.collected, 2);
        assert_eq!(result.failed, 0);
        assert!(result.errors.is_empty());

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn registry_outage_on_exists_fails_the_candidate() {
        let registry = Arc::new(CountingRegistry {
            fail_exists: true,
            ..CountingRegistry::new()
        });
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) =
            pipeline_at("harvest-pipe-existsfail", registry, announcer.clone());

        let source = TestSource::new("grp", vec![cand("a.json")]);
        let result = pipeline.run(&source, &RunOptions::default()).await;

        // Outage is surfaced, not treated as "not a duplicate".
        assert_eq!(result.failed, 1);
        assert_eq!(result.collected, 0);
        assert!(result.errors[0].message.contains("dedup check failed"));
        assert!(announcer.events.lock().unwrap().is_empty());

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn register_failure_still_counts_collected() {
        let registry = Arc::new(CountingRegistry {
            fail_register: true,
            ..CountingRegistry::new()
        });
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) = pipeline_at("harvest-pipe-regfail", registry, announcer);

        let source = TestSource::new("grp", vec![cand("a.json")]);
        let result = pipeline.run(&source, &RunOptions::default()).await;

        // Content is durably stored; the failed registry write only risks a
        // future duplicate re-store.
        assert_eq!(result.collected, 1);
        assert_eq!(result.failed, 0);

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn empty_identifier_is_rejected() {
        let registry = Arc::new(MemoryRegistry::with_default_ttl());
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) = pipeline_at("harvest-pipe-emptyid", registry, announcer);

        let source = TestSource::new("grp", vec![cand("")]);
        let result = pipeline.run(&source, &RunOptions::default()).await;
        assert_eq!(result.failed, 1);
        assert!(result.errors[0].message.contains("identifier"));

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn candidate_timeout_is_an_ordinary_failure() {
        let registry = Arc::new(MemoryRegistry::with_default_ttl());
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) = pipeline_at("harvest-pipe-timeout", registry, announcer);

        let mut slow_candidate = cand("slow.json");
        slow_candidate
            .fetch_params
            .insert("timeout_secs".to_string(), "0".to_string());
        let mut source = TestSource::new("grp", vec![slow_candidate, cand("fast.json")]);
        source.slow.insert("slow.json".to_string());

        let result = pipeline.run(&source, &RunOptions::default()).await;
        assert_eq!(result.collected, 1);
        assert_eq!(result.failed, 1);
        assert!(result.errors[0].message.contains("timed out"));

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn identical_bytes_within_one_run_dedupe() {
        let registry = Arc::new(MemoryRegistry::with_default_ttl());
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) = pipeline_at("harvest-pipe-intrarun", registry, announcer);

        let mut source = TestSource::new("grp", vec![cand("a.json"), cand("b.json")]);
        source
            .content
            .insert("a.json".to_string(), b"same bytes".to_vec());
        source
            .content
            .insert("b.json".to_string(), b"same bytes".to_vec());

        let result = pipeline.run(&source, &RunOptions::default()).await;
        assert_eq!(result.collected, 1);
        assert_eq!(result.skipped_duplicate, 1);

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[tokio::test]
    async fn announced_event_carries_pipeline_metadata() {
        let registry = Arc::new(MemoryRegistry::with_default_ttl());
        let announcer = Arc::new(CapturingAnnouncer::default());
        let (pipeline, tmp) =
            pipeline_at("harvest-pipe-event", registry, announcer.clone());

        let candidate = cand("fuel_mix_20251203_1400.json")
            .with_metadata("data_type", "fuel_mix");
        let source = TestSource::new("miso_fuel_mix", vec![candidate]);
        pipeline.run(&source, &RunOptions::default()).await;

        let events = announcer.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.source_group, "miso_fuel_mix");
        assert_eq!(event.artifact_id, "fuel_mix_20251203_1400.json");
        assert_eq!(
            event.message_key(),
            "miso_fuel_mix:fuel_mix_20251203_1400.json"
        );
        assert_eq!(
            event.location,
            "collected/miso_fuel_mix/year=2025/month=12/day=03/fuel_mix_20251203_1400.json.zst"
        );
        // Candidate metadata survives; pipeline fields are added.
        assert_eq!(event.metadata["data_type"], "fuel_mix");
        assert!(event.metadata.contains_key("collected_at"));
        assert!(event.metadata.contains_key("run_id"));
        assert!(event.metadata.contains_key("fingerprint"));
        assert_eq!(
            event.metadata["raw_bytes"],
            "payload for fuel_mix_20251203_1400.json".len().to_string()
        );

        std::fs::remove_dir_all(&tmp).ok();
    }
}
