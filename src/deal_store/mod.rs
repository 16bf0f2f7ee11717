//! Deal Store - Core query engine
//!
//! This module holds the immutable deal snapshot and every read operation
//! over it: accessors, search, the filter pipeline and the aggregator.
//! The store is built once at startup and never mutated, so it can be
//! shared across threads behind a plain `Arc` with no locking.

mod filter;
mod loader;
mod participants;
mod query;
mod stats;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::DealResult;
use crate::types::{
    Deal, DealStats, DealType, FilterCriteria, FilterResult, Participant, ParticipantId,
};
use crate::utils::time::today;

pub use loader::{parse_jsonl, validate, BUNDLED_DEALS};
pub use participants::ParticipantDirectory;
pub use stats::TRAILING_QUARTERS;

/// Immutable, versioned snapshot of deals
#[derive(Debug, Clone)]
pub struct DealStore {
    /// Newest first; equal dates keep their original order
    pub(crate) deals: Vec<Deal>,
    pub(crate) participants: ParticipantDirectory,
    snapshot: String,
}

impl DealStore {
    /// Build a store from already parsed deals
    pub fn new(mut deals: Vec<Deal>) -> DealResult<Self> {
        if let Err(e) = validate(&deals) {
            log::error!("Rejected deal snapshot: {}", e);
            return Err(e);
        }

        deals.sort_by(|a, b| b.date.cmp(&a.date));

        let participants = ParticipantDirectory::build(&deals);
        let snapshot = fingerprint(&deals);

        log::info!(
            "Loaded {} deals ({} participants), snapshot {}",
            deals.len(),
            participants.len(),
            snapshot
        );

        Ok(Self {
            deals,
            participants,
            snapshot,
        })
    }

    /// Build a store from the table compiled into the binary
    pub fn bundled() -> DealResult<Self> {
        Self::from_jsonl(BUNDLED_DEALS)
    }

    /// Build a store from newline-delimited JSON
    pub fn from_jsonl(content: &str) -> DealResult<Self> {
        Self::new(parse_jsonl(content)?)
    }

    /// Build a store from a JSONL file on disk
    pub fn from_file(path: impl AsRef<Path>) -> DealResult<Self> {
        let path = path.as_ref();
        log::info!("Loading deals from {}", path.display());
        Self::new(loader::read_jsonl_file(path)?)
    }

    /// Version fingerprint of the loaded data, valid for this process
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }
}

/// Hex digest of the sorted snapshot contents
///
/// Equal contents give equal digests within one build. `DefaultHasher`
/// output is not guaranteed across Rust releases, so the value must not
/// be persisted or compared between binaries.
fn fingerprint(deals: &[Deal]) -> String {
    let mut hasher = DefaultHasher::new();
    for deal in deals {
        deal.id.hash(&mut hasher);
        deal.date.hash(&mut hasher);
        deal.deal_type.hash(&mut hasher);
        deal.amount.map(f64::to_bits).hash(&mut hasher);
        deal.title.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}

// Re-export methods from submodules by implementing them here
impl DealStore {
    // Accessors (from query.rs)
    pub fn get_all(&self) -> Vec<Deal> {
        query::get_all(self)
    }

    pub fn get_by_type(&self, deal_type: DealType) -> Vec<Deal> {
        query::get_by_type(self, deal_type)
    }

    pub fn get_by_id(&self, id: &str) -> Option<Deal> {
        query::get_by_id(self, id)
    }

    pub fn get_by_participant(&self, identifier: &str) -> Vec<Deal> {
        query::get_by_participant(self, identifier)
    }

    pub fn get_recent(&self, days: u32) -> Vec<Deal> {
        query::get_recent(self, days, today())
    }

    pub fn get_recent_at(&self, days: u32, today: NaiveDate) -> Vec<Deal> {
        query::get_recent(self, days, today)
    }

    pub fn search(&self, query: &str) -> Vec<Deal> {
        query::search(self, query)
    }

    // Filter pipeline (from filter.rs)
    pub fn filter(&self, criteria: &FilterCriteria) -> FilterResult {
        filter::filter(self, criteria)
    }

    // Aggregation (from stats.rs)
    pub fn compute_stats(&self) -> DealStats {
        stats::compute_stats(self, today())
    }

    pub fn compute_stats_at(&self, now: NaiveDate) -> DealStats {
        stats::compute_stats(self, now)
    }

    // Participants (from participants.rs)
    pub fn resolve_participant(&self, name: &str) -> Option<ParticipantId> {
        self.participants.resolve(name)
    }

    pub fn participants(&self) -> Vec<Participant> {
        self.participants.list()
    }
}
