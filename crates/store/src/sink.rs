use bytes::Bytes;
use object_store::path::Path;
use tracing::info;

use crate::backend::StorageBackend;
use crate::error::StoreError;

/// Storage-level tokens returned from a successful write.
#[derive(Debug, Clone)]
pub struct PutReceipt {
    /// Store version token; None when the backing store has no versioning.
    pub version: Option<String>,
    /// Content tag (etag) with wrapping quotes stripped, for downstream
    /// comparability.
    pub integrity: Option<String>,
    pub raw_len: usize,
    pub compressed_len: usize,
}

/// Compressing object-store writer. Every artifact is zstd-compressed and
/// written as a single whole object, so the destination is always either
/// absent, the old content, or the complete new content.
pub struct ArtifactSink {
    backend: StorageBackend,
}

impl ArtifactSink {
    pub fn new(backend: StorageBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &StorageBackend {
        &self.backend
    }

    /// Compress and write `raw` to `key`.
    pub async fn put(&self, raw: &[u8], key: &str) -> Result<PutReceipt, StoreError> {
        let compressed = zstd::encode_all(raw, 3)?;
        let raw_len = raw.len();
        let compressed_len = compressed.len();

        let path = Path::from(key);
        let result = self
            .backend
            .store()
            .put(&path, Bytes::from(compressed).into())
            .await
            .map_err(|source| StoreError::Put {
                key: key.to_string(),
                source,
            })?;

        let ratio = if raw_len > 0 {
            (compressed_len as f64 / raw_len as f64 * 100.0) as u32
        } else {
            100
        };
        info!(
            key = %key,
            raw_bytes = raw_len,
            compressed_bytes = compressed_len,
            ratio_pct = ratio,
            "stored artifact"
        );

        Ok(PutReceipt {
            version: result.version,
            integrity: result.e_tag.map(|tag| tag.trim_matches('"').to_string()),
            raw_len,
            compressed_len,
        })
    }
}
