use std::time::Duration;

use tracing::debug;

use harvest_core::Candidate;
use harvest_pipeline::SourceError;

/// Shared HTTP fetcher used by the REST-backed source adapters.
///
/// Interprets the fetch-param conventions the scrapers share:
/// - `header.<name>` — request header
/// - `query.<name>`  — query-string parameter
/// - `timeout_secs`  — per-request timeout override
///
/// A non-2xx status is a fetch error. An upstream 200 with an explicit
/// "no data available" body is returned as ordinary bytes; whether that is
/// worth storing is the source's validation policy, not ours.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch(&self, candidate: &Candidate) -> Result<Vec<u8>, SourceError> {
        let mut request = self.client.get(&candidate.source_location);

        for (key, value) in &candidate.fetch_params {
            if let Some(name) = key.strip_prefix("header.") {
                request = request.header(name, value.as_str());
            } else if let Some(name) = key.strip_prefix("query.") {
                request = request.query(&[(name, value)]);
            }
        }
        if let Some(secs) = candidate
            .fetch_params
            .get("timeout_secs")
            .and_then(|v| v.parse::<u64>().ok())
        {
            request = request.timeout(Duration::from_secs(secs));
        }

        debug!(url = %candidate.source_location, "fetching candidate");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: candidate.source_location.clone(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}
