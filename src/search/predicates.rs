//! Boolean predicates over a single deal

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::deal_store::ParticipantDirectory;
use crate::types::{Deal, DealType, FilterCriteria, ParticipantId};

/// Single test over one field of a deal
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Exact type match
    Type(DealType),
    /// Lowercased free-text query
    Text(String),
    /// Inclusive amount bounds; a deal with unknown amount never matches
    AmountRange { min: Option<f64>, max: Option<f64> },
    /// Inclusive calendar-date bounds
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    /// Any party resolves to one of these participants
    Participants(BTreeSet<ParticipantId>),
    Verified(bool),
}

impl Predicate {
    /// Build a text predicate; blank queries yield `None` (match everything)
    ///
    /// Non-blank queries are matched as given, surrounding whitespace included.
    pub fn text(query: &str) -> Option<Self> {
        if query.trim().is_empty() {
            None
        } else {
            Some(Predicate::Text(query.to_lowercase()))
        }
    }

    /// Build a participant predicate from the directory's substring match
    ///
    /// Blank fragments yield `None`; a fragment matching nobody yields a
    /// predicate that rejects every deal.
    pub fn participant(directory: &ParticipantDirectory, fragment: &str) -> Option<Self> {
        directory.matching(fragment).map(Predicate::Participants)
    }

    pub fn matches(&self, deal: &Deal) -> bool {
        match self {
            Predicate::Type(deal_type) => deal.deal_type == *deal_type,
            Predicate::Text(query) => matches_text(deal, query),
            Predicate::AmountRange { min, max } => match deal.amount {
                Some(amount) => {
                    min.map_or(true, |min| amount >= min) && max.map_or(true, |max| amount <= max)
                }
                None => false,
            },
            Predicate::DateRange { from, to } => {
                from.map_or(true, |from| deal.date >= from) && to.map_or(true, |to| deal.date <= to)
            }
            Predicate::Participants(ids) => {
                deal.parties.iter().any(|p| ids.contains(&p.participant_id()))
            }
            Predicate::Verified(verified) => deal.verified == *verified,
        }
    }
}

/// Case-insensitive substring match on title, description and party names
///
/// `query_lower` must already be lowercased.
pub fn matches_text(deal: &Deal, query_lower: &str) -> bool {
    deal.title.to_lowercase().contains(query_lower)
        || deal.description.to_lowercase().contains(query_lower)
        || deal
            .parties
            .iter()
            .any(|p| p.company.to_lowercase().contains(query_lower))
}

/// Translate criteria into the predicates they name
///
/// Pagination fields are ignored here.
pub fn from_criteria(criteria: &FilterCriteria, directory: &ParticipantDirectory) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    if let Some(deal_type) = criteria.deal_type {
        predicates.push(Predicate::Type(deal_type));
    }
    if let Some(predicate) = criteria.search.as_deref().and_then(Predicate::text) {
        predicates.push(predicate);
    }
    if criteria.min_amount.is_some() || criteria.max_amount.is_some() {
        predicates.push(Predicate::AmountRange {
            min: criteria.min_amount,
            max: criteria.max_amount,
        });
    }
    if criteria.date_from.is_some() || criteria.date_to.is_some() {
        predicates.push(Predicate::DateRange {
            from: criteria.date_from,
            to: criteria.date_to,
        });
    }
    if let Some(predicate) = criteria
        .participant
        .as_deref()
        .and_then(|fragment| Predicate::participant(directory, fragment))
    {
        predicates.push(predicate);
    }
    if let Some(verified) = criteria.verified {
        predicates.push(Predicate::Verified(verified));
    }

    predicates
}

/// True when every predicate accepts the deal
pub fn matches_all(predicates: &[Predicate], deal: &Deal) -> bool {
    predicates.iter().all(|p| p.matches(deal))
}
