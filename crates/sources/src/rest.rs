use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use harvest_core::Candidate;
use harvest_pipeline::{GenerateParams, SourceAdapter, SourceError};

use crate::http::HttpFetcher;

/// Generic REST source over an explicit endpoint list.
///
/// One instance covers one source group and partition date; each endpoint
/// becomes one candidate. This is the adapter the CLI drives directly and
/// the template a dedicated scraper starts from — real scrapers replace
/// `generate` with their own enumeration and tighten `validate` with their
/// own field checks.
pub struct RestSource {
    source_group: String,
    partition_date: NaiveDate,
    endpoints: Vec<(String, String)>,
    metadata: HashMap<String, String>,
    fetcher: HttpFetcher,
}

impl RestSource {
    /// `endpoints` are `(identifier, url)` pairs, identifiers unique per run.
    pub fn new(
        source_group: impl Into<String>,
        partition_date: NaiveDate,
        endpoints: Vec<(String, String)>,
    ) -> Self {
        Self {
            source_group: source_group.into(),
            partition_date,
            endpoints,
            metadata: HashMap::new(),
            fetcher: HttpFetcher::new(),
        }
    }

    /// Attach a descriptive attribute to every generated candidate.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[async_trait]
impl SourceAdapter for RestSource {
    fn source_group(&self) -> &str {
        &self.source_group
    }

    async fn generate(&self, _params: &GenerateParams) -> Result<Vec<Candidate>, SourceError> {
        Ok(self
            .endpoints
            .iter()
            .map(|(identifier, url)| {
                let mut candidate = Candidate::new(identifier, url, self.partition_date);
                candidate.metadata = self.metadata.clone();
                candidate
            })
            .collect())
    }

    async fn fetch(&self, candidate: &Candidate) -> Result<Vec<u8>, SourceError> {
        self.fetcher.fetch(candidate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> RestSource {
        RestSource::new(
            "miso_fuel_mix",
            NaiveDate::from_ymd_opt(2025, 12, 3).unwrap(),
            vec![
                (
                    "fuel_mix_20251203_1400.json".to_string(),
                    "https://api.example.com/fuel-mix?t=1400".to_string(),
                ),
                (
                    "fuel_mix_20251203_1405.json".to_string(),
                    "https://api.example.com/fuel-mix?t=1405".to_string(),
                ),
            ],
        )
        .with_metadata("data_type", "fuel_mix")
    }

    #[tokio::test]
    async fn generate_maps_endpoints_to_candidates() {
        let source = source();
        let candidates = source.generate(&GenerateParams::new()).await.unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].identifier, "fuel_mix_20251203_1400.json");
        assert_eq!(
            candidates[0].source_location,
            "https://api.example.com/fuel-mix?t=1400"
        );
        assert_eq!(
            candidates[0].partition_date,
            NaiveDate::from_ymd_opt(2025, 12, 3).unwrap()
        );
        assert_eq!(candidates[0].metadata["data_type"], "fuel_mix");
    }

    #[tokio::test]
    async fn default_validation_rejects_only_empty_content() {
        let source = source();
        let candidates = source.generate(&GenerateParams::new()).await.unwrap();

        assert!(!source.validate(b"", &candidates[0]));
        assert!(source.validate(b"{\"rows\":[]}", &candidates[0]));
    }
}
