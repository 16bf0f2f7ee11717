//! Filter pipeline: AND-composed predicates, sort, paginate

use crate::search::{from_criteria, matches_all};
use crate::types::{Deal, FilterCriteria, FilterResult};

use super::DealStore;

pub fn filter(store: &DealStore, criteria: &FilterCriteria) -> FilterResult {
    let predicates = from_criteria(criteria, &store.participants);

    let mut matching: Vec<&Deal> = store
        .deals
        .iter()
        .filter(|d| matches_all(&predicates, d))
        .collect();

    // Stable: equal dates keep snapshot order
    matching.sort_by(|a, b| b.date.cmp(&a.date));

    let total = matching.len();
    let page = criteria.normalized_page();
    let limit = criteria.normalized_limit();
    let total_pages = total.div_ceil(limit).max(1);
    let offset = (page - 1).saturating_mul(limit);

    let deals: Vec<Deal> = matching
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    log::debug!(
        "Filter with {} predicates matched {} deals (page {}/{}, {} returned)",
        predicates.len(),
        total,
        page,
        total_pages,
        deals.len()
    );

    FilterResult {
        deals,
        total,
        page,
        limit,
        total_pages,
    }
}
