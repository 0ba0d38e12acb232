//! Search query classification and dispatch.
//!
//! The classifier is an ordered first-match rule table over the trimmed
//! query: transaction, then address, then block as the catch-all. The block
//! and address branches never perform a live lookup; they return a fixed
//! placeholder until real lookups exist.

use crate::models::{EntityKind, SearchHit};
use crate::source::TransactionLookup;

/// Predicate over (raw trimmed query, case-folded copy).
type Predicate = fn(&str, &str) -> bool;

fn is_transaction_query(raw: &str, folded: &str) -> bool {
    folded.starts_with("tx_") || raw.len() == 64
}

fn is_address_query(raw: &str, folded: &str) -> bool {
    folded.starts_with("addr") || raw.len() > 50
}

const RULES: [(Predicate, EntityKind); 2] = [
    (is_transaction_query, EntityKind::Transaction),
    (is_address_query, EntityKind::Address),
];

/// First matching rule wins; anything else is treated as a block reference.
pub fn classify(query: &str) -> EntityKind {
    let folded = query.to_lowercase();
    RULES
        .iter()
        .find(|(matches, _)| matches(query, &folded))
        .map(|(_, kind)| *kind)
        .unwrap_or(EntityKind::Block)
}

/// Classifies a non-empty query and runs the matching lookup strategy.
/// Returns zero or one hit; an upstream failure on the transaction branch is
/// logged and treated as no match, never surfaced to the user.
pub async fn run(query: &str, lookup: &dyn TransactionLookup) -> Vec<SearchHit> {
    match classify(query) {
        EntityKind::Transaction => transaction_hits(query, lookup).await,
        EntityKind::Address => vec![address_placeholder(query)],
        EntityKind::Block => vec![block_placeholder()],
    }
}

async fn transaction_hits(query: &str, lookup: &dyn TransactionLookup) -> Vec<SearchHit> {
    match lookup.by_hash(query).await {
        Ok(Some(tx)) => vec![SearchHit {
            kind: EntityKind::Transaction,
            id: tx.tx_hash.clone(),
            title: "Transaction".to_string(),
            subtitle: tx.tx_hash,
            details: format!("{} • {}", tx.types.join(", "), tx.submitted_at),
            link: "#".to_string(),
        }],
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::warn!("transaction lookup failed for {:?}: {}", query, err);
            Vec::new()
        }
    }
}

fn address_placeholder(query: &str) -> SearchHit {
    SearchHit {
        kind: EntityKind::Address,
        id: "addr_001".to_string(),
        title: "Address".to_string(),
        subtitle: query.to_string(),
        details: "Balance: 125,450.75 ADA • 342 transactions".to_string(),
        link: "#".to_string(),
    }
}

fn block_placeholder() -> SearchHit {
    SearchHit {
        kind: EntityKind::Block,
        id: "block_sample".to_string(),
        title: "Block".to_string(),
        subtitle: "#8945234".to_string(),
        details: "245 transactions • 64.5 KB".to_string(),
        link: "#".to_string(),
    }
}
