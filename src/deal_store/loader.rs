//! Snapshot loading and construction-time validation

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{DealError, DealResult};
use crate::types::Deal;

/// Deal table compiled into the binary
pub const BUNDLED_DEALS: &str = include_str!("../../data/deals.jsonl");

/// Parse newline-delimited JSON, one deal per non-empty line
pub fn parse_jsonl(content: &str) -> DealResult<Vec<Deal>> {
    let mut deals = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let deal = serde_json::from_str::<Deal>(line).map_err(|source| DealError::Parse {
            line: index + 1,
            source,
        })?;
        deals.push(deal);
    }

    Ok(deals)
}

/// Read and parse a JSONL file
pub fn read_jsonl_file(path: &Path) -> DealResult<Vec<Deal>> {
    let content = fs::read_to_string(path)?;
    parse_jsonl(&content)
}

/// Check the invariants every query relies on
pub fn validate(deals: &[Deal]) -> DealResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(deals.len());

    for deal in deals {
        if deal.id.trim().is_empty() {
            return Err(DealError::invalid(&deal.id, "id must not be empty"));
        }
        if !seen.insert(deal.id.as_str()) {
            return Err(DealError::DuplicateId(deal.id.clone()));
        }
        if deal.parties.is_empty() {
            return Err(DealError::invalid(&deal.id, "at least one party is required"));
        }
        if let Some(amount) = deal.amount {
            if !amount.is_finite() || amount < 0.0 {
                return Err(DealError::invalid(
                    &deal.id,
                    format!("amount must be a non-negative number, got {}", amount),
                ));
            }
        }
    }

    Ok(())
}
