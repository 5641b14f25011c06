use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::error::RegistryError;
use crate::namespace::Namespace;
use crate::record::HashRecord;
use crate::traits::DedupRegistry;

/// In-process dedup registry with the same TTL semantics as the Redis
/// backend. Used by tests and by local runs without a Redis instance;
/// state does not survive the process.
pub struct MemoryRegistry {
    ttl: Duration,
    records: Mutex<HashMap<String, (HashRecord, Instant)>>,
}

impl MemoryRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Registry with the default 365-day TTL window.
    pub fn with_default_ttl() -> Self {
        Self::new(Duration::from_secs(365 * 24 * 60 * 60))
    }
}

#[async_trait]
impl DedupRegistry for MemoryRegistry {
    async fn exists(
        &self,
        fingerprint: &str,
        namespace: &Namespace,
    ) -> Result<bool, RegistryError> {
        let key = namespace.record_key(fingerprint);
        let mut records = self.records.lock().unwrap();
        match records.get(&key) {
            Some((_, deadline)) if *deadline > Instant::now() => Ok(true),
            Some(_) => {
                // Expired — evict lazily so count() stays honest.
                records.remove(&key);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    async fn register(&self, record: HashRecord) -> Result<(), RegistryError> {
        let key = record.key();
        let deadline = Instant::now() + self.ttl;
        self.records.lock().unwrap().insert(key, (record, deadline));
        Ok(())
    }

    async fn count(&self, namespace: &Namespace) -> Result<usize, RegistryError> {
        let prefix = format!("{}:", namespace.scope());
        let now = Instant::now();
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|(key, (_, deadline))| key.starts_with(&prefix) && *deadline > now)
            .count())
    }

    async fn delete(
        &self,
        fingerprint: &str,
        namespace: &Namespace,
    ) -> Result<bool, RegistryError> {
        let key = namespace.record_key(fingerprint);
        Ok(self.records.lock().unwrap().remove(&key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvest_core::Environment;
    use std::collections::HashMap;

    fn record(ns: &Namespace, fp: &str) -> HashRecord {
        HashRecord::new(fp, ns, "collected/test/key.zst", HashMap::new())
    }

    #[tokio::test]
    async fn register_then_exists() {
        let registry = MemoryRegistry::with_default_ttl();
        let ns = Namespace::new(Environment::Dev, "miso_fuel_mix").unwrap();

        assert!(!registry.exists("fp1", &ns).await.unwrap());
        registry.register(record(&ns, "fp1")).await.unwrap();
        assert!(registry.exists("fp1", &ns).await.unwrap());
    }

    #[tokio::test]
    async fn namespaces_are_isolated() {
        let registry = MemoryRegistry::with_default_ttl();
        let group_a = Namespace::new(Environment::Prod, "group_a").unwrap();
        let group_b = Namespace::new(Environment::Prod, "group_b").unwrap();
        let dev_a = Namespace::new(Environment::Dev, "group_a").unwrap();

        registry.register(record(&group_b, "same_fp")).await.unwrap();

        assert!(registry.exists("same_fp", &group_b).await.unwrap());
        assert!(!registry.exists("same_fp", &group_a).await.unwrap());
        assert!(!registry.exists("same_fp", &dev_a).await.unwrap());
    }

    #[tokio::test]
    async fn expired_records_read_as_novel() {
        let registry = MemoryRegistry::new(Duration::from_millis(20));
        let ns = Namespace::new(Environment::Dev, "grp").unwrap();

        registry.register(record(&ns, "fp")).await.unwrap();
        assert!(registry.exists("fp", &ns).await.unwrap());

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(!registry.exists("fp", &ns).await.unwrap());
        assert_eq!(registry.count(&ns).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reregister_resets_ttl() {
        let registry = MemoryRegistry::new(Duration::from_millis(60));
        let ns = Namespace::new(Environment::Dev, "grp").unwrap();

        registry.register(record(&ns, "fp")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;
        registry.register(record(&ns, "fp")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;

        // 80ms after the first write, but only 40ms after the refresh.
        assert!(registry.exists("fp", &ns).await.unwrap());
    }

    #[tokio::test]
    async fn count_and_delete() {
        let registry = MemoryRegistry::with_default_ttl();
        let ns = Namespace::new(Environment::Staging, "grp").unwrap();

        registry.register(record(&ns, "fp1")).await.unwrap();
        registry.register(record(&ns, "fp2")).await.unwrap();
        assert_eq!(registry.count(&ns).await.unwrap(), 2);

        assert!(registry.delete("fp1", &ns).await.unwrap());
        assert!(!registry.delete("fp1", &ns).await.unwrap());
        assert_eq!(registry.count(&ns).await.unwrap(), 1);
    }
}
