use std::fmt;

/// Normalized dashboard stats, one per analytics request. Every field is
/// always populated; fields the upstream API cannot provide are filled with
/// the fallback constants in `view`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsView {
    pub total_transactions: u64,
    pub active_addresses: u64,
    pub total_blocks: u64,
    pub network_load: u8,
    pub avg_block_time_secs: u64,
    pub total_value: String,
    pub course_count: u64,
    pub project_count: u64,
}

#[derive(Debug, Clone)]
pub struct TransactionView {
    pub hash: String,
    pub timestamp: String,
    pub amount: String,
    /// Ordered type tags; duplicates allowed.
    pub kinds: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ContributionView {
    pub id: String,
    pub title: String,
    pub timestamp: String,
    pub author: String,
}

/// Entity type a search query resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Transaction,
    Address,
    Block,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Transaction => "transaction",
            EntityKind::Address => "address",
            EntityKind::Block => "block",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified search result.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub kind: EntityKind,
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub details: String,
    pub link: String,
}
