use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Aggregate transaction counts as reported by the upstream indexer. Any
/// count field absent from the body decodes as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionCounts {
    pub total: u64,
    pub mint_access_token: u64,
    pub create_course: u64,
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: TransactionCounts,
}

/// One row of the upstream per-hash transaction endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionDetail {
    pub tx_hash: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub submitted_at: String,
}

#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    #[error("upstream unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("upstream returned a malformed response: {0}")]
    Malformed(#[source] reqwest::Error),
}

/// Thin client for the upstream transaction-data API. No retries, no
/// caching; a failed call surfaces immediately to the caller.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .context("failed to build reqwest client")?;
        Ok(Self {
            http,
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_analytics_counts(&self) -> Result<TransactionCounts, UpstreamError> {
        let url = format!("{}/v2/transactions/count", self.base);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(UpstreamError::Unreachable)?;
        let body: CountResponse = resp.json().await.map_err(UpstreamError::Malformed)?;
        Ok(body.count)
    }

    /// A non-success status or an empty decoded list means "not found",
    /// not an error.
    pub async fn fetch_transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionDetail>, UpstreamError> {
        let url = format!("{}/v2/transactions/{}", self.base, hash);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(UpstreamError::Unreachable)?;
        if !resp.status().is_success() {
            return Ok(None);
        }
        let rows: Vec<TransactionDetail> =
            resp.json().await.map_err(UpstreamError::Malformed)?;
        Ok(rows.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_count_response() {
        let body: CountResponse = serde_json::from_str(
            r#"{"count":{"total":100,"mint_access_token":40,"create_course":5}}"#,
        )
        .unwrap();
        assert_eq!(
            body.count,
            TransactionCounts {
                total: 100,
                mint_access_token: 40,
                create_course: 5,
            }
        );
    }

    #[test]
    fn missing_count_fields_default_to_zero() {
        let body: CountResponse = serde_json::from_str(r#"{"count":{"total":7}}"#).unwrap();
        assert_eq!(body.count.total, 7);
        assert_eq!(body.count.mint_access_token, 0);
        assert_eq!(body.count.create_course, 0);

        let body: CountResponse =
            serde_json::from_str(r#"{"count":{"mint_access_token":1}}"#).unwrap();
        assert_eq!(body.count.total, 0);
        assert_eq!(body.count.mint_access_token, 1);

        let body: CountResponse = serde_json::from_str(r#"{"count":{}}"#).unwrap();
        assert_eq!(body.count, TransactionCounts::default());
    }

    #[test]
    fn decodes_transaction_rows() {
        let rows: Vec<TransactionDetail> = serde_json::from_str(
            r#"[{"tx_hash":"abc","types":["Payment","Fee"],"submitted_at":"2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tx_hash, "abc");
        assert_eq!(rows[0].types, vec!["Payment", "Fee"]);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = UpstreamClient::new("http://localhost:9999/").unwrap();
        assert_eq!(client.base, "http://localhost:9999");
    }
}
