//! Data-acquisition seams for the fragments. Handlers depend on these traits
//! only, so swapping a static placeholder source for a live one is a
//! substitution at startup, not a handler rewrite.

use async_trait::async_trait;

use crate::models::{ContributionView, TransactionView};
use crate::upstream::{TransactionCounts, TransactionDetail, UpstreamClient, UpstreamError};

#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    async fn counts(&self) -> Result<TransactionCounts, UpstreamError>;
}

#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn recent(&self) -> Result<Vec<TransactionView>, UpstreamError>;
}

#[async_trait]
pub trait ContributionSource: Send + Sync {
    async fn recent(&self) -> Result<Vec<ContributionView>, UpstreamError>;
}

#[async_trait]
pub trait TransactionLookup: Send + Sync {
    async fn by_hash(&self, hash: &str) -> Result<Option<TransactionDetail>, UpstreamError>;
}

#[async_trait]
impl AnalyticsSource for UpstreamClient {
    async fn counts(&self) -> Result<TransactionCounts, UpstreamError> {
        self.fetch_analytics_counts().await
    }
}

#[async_trait]
impl TransactionLookup for UpstreamClient {
    async fn by_hash(&self, hash: &str) -> Result<Option<TransactionDetail>, UpstreamError> {
        self.fetch_transaction_by_hash(hash).await
    }
}

/// Fixed recent-transactions list; no live feed is wired up for this
/// fragment yet.
pub struct StaticTransactions;

#[async_trait]
impl TransactionSource for StaticTransactions {
    async fn recent(&self) -> Result<Vec<TransactionView>, UpstreamError> {
        Ok(vec![
            TransactionView {
                hash: "8a9b0c1d...".to_string(),
                timestamp: "5 minutes ago".to_string(),
                amount: "1,250.50 ADA".to_string(),
                kinds: vec!["Payment".to_string(), "Fee".to_string()],
            },
            TransactionView {
                hash: "7z8a9b0c...".to_string(),
                timestamp: "8 minutes ago".to_string(),
                amount: "450.00 ADA".to_string(),
                kinds: vec!["Payment".to_string()],
            },
            TransactionView {
                hash: "6y7z8a9b...".to_string(),
                timestamp: "12 minutes ago".to_string(),
                amount: "2,100.25 ADA".to_string(),
                kinds: vec!["Stake".to_string()],
            },
        ])
    }
}

/// Fixed learner-activity list; no live feed is wired up for this fragment
/// yet.
pub struct StaticContributions;

#[async_trait]
impl ContributionSource for StaticContributions {
    async fn recent(&self) -> Result<Vec<ContributionView>, UpstreamError> {
        Ok(vec![
            ContributionView {
                id: "cnt_1".to_string(),
                title: "Completed Module 1".to_string(),
                timestamp: "2 minutes ago".to_string(),
                author: "Student #42".to_string(),
            },
            ContributionView {
                id: "cnt_2".to_string(),
                title: "Submitted Assignment".to_string(),
                timestamp: "15 minutes ago".to_string(),
                author: "Student #88".to_string(),
            },
            ContributionView {
                id: "cnt_3".to_string(),
                title: "Updated Project Info".to_string(),
                timestamp: "1 hour ago".to_string(),
                author: "Project #12".to_string(),
            },
        ])
    }
}
