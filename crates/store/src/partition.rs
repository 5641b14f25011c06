use chrono::Datelike;

use harvest_core::Candidate;

/// Extension appended to every stored object; artifacts are always
/// zstd-compressed before the write.
pub const COMPRESSION_SUFFIX: &str = ".zst";

/// Compute the storage key for a candidate:
/// `{root}/{source_group}/year={YYYY}/month={MM}/day={DD}/{identifier}{.zst}`.
///
/// Pure function of its inputs — no clock access — so re-running a
/// collection for the same candidate always lands on the same key. That
/// determinism is what makes both skip-on-duplicate and force-overwrite
/// well-defined. The suffix is appended only when the identifier does not
/// already carry it.
pub fn build_path(root: &str, source_group: &str, candidate: &Candidate) -> String {
    let date = candidate.partition_date;
    let mut key = if root.is_empty() {
        format!(
            "{}/year={:04}/month={:02}/day={:02}/{}",
            source_group,
            date.year(),
            date.month(),
            date.day(),
            candidate.identifier
        )
    } else {
        format!(
            "{}/{}/year={:04}/month={:02}/day={:02}/{}",
            root,
            source_group,
            date.year(),
            date.month(),
            date.day(),
            candidate.identifier
        )
    };
    if !key.ends_with(COMPRESSION_SUFFIX) {
        key.push_str(COMPRESSION_SUFFIX);
    }
    key
}
