use sha2::{Digest, Sha256};

/// Compute the content fingerprint of raw fetched bytes.
///
/// SHA-256 hex digest — deterministic across processes and platforms, and
/// collision-resistant enough to serve as the sole dedup admission key.
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
