//! Read accessors and free-text search

use chrono::NaiveDate;
use rayon::prelude::*;

use crate::search::matches_text;
use crate::types::{Deal, DealType};
use crate::utils::time::days_before;

use super::DealStore;

/// Threshold for using parallel search (deal count)
const PARALLEL_SEARCH_THRESHOLD: usize = 1000;

pub fn get_all(store: &DealStore) -> Vec<Deal> {
    store.deals.clone()
}

pub fn get_by_type(store: &DealStore, deal_type: DealType) -> Vec<Deal> {
    store
        .deals
        .iter()
        .filter(|d| d.deal_type == deal_type)
        .cloned()
        .collect()
}

pub fn get_by_id(store: &DealStore, id: &str) -> Option<Deal> {
    store.deals.iter().find(|d| d.id == id).cloned()
}

/// Deals involving the participant the identifier resolves to
///
/// Unresolvable identifiers yield an empty list.
pub fn get_by_participant(store: &DealStore, identifier: &str) -> Vec<Deal> {
    let Some(participant) = store.participants.resolve(identifier) else {
        log::debug!("No participant matches '{}'", identifier);
        return Vec::new();
    };

    store
        .deals
        .iter()
        .filter(|d| d.involves(&participant))
        .cloned()
        .collect()
}

/// Deals dated within `[today - days, today]`
pub fn get_recent(store: &DealStore, days: u32, today: NaiveDate) -> Vec<Deal> {
    let cutoff = days_before(today, days);

    store
        .deals
        .iter()
        .filter(|d| d.date >= cutoff && d.date <= today)
        .cloned()
        .collect()
}

/// Case-insensitive search over title, description and party names
///
/// Blank queries return everything. Any other query is matched as
/// given, surrounding whitespace included. Uses rayon for stores larger
/// than the parallel threshold; the result order is the store order
/// either way.
pub fn search(store: &DealStore, query: &str) -> Vec<Deal> {
    if query.trim().is_empty() {
        return get_all(store);
    }
    let query = query.to_lowercase();

    if store.deals.len() > PARALLEL_SEARCH_THRESHOLD {
        store
            .deals
            .par_iter()
            .filter(|d| matches_text(d, &query))
            .cloned()
            .collect()
    } else {
        store
            .deals
            .iter()
            .filter(|d| matches_text(d, &query))
            .cloned()
            .collect()
    }
}
