//! Canonical participant resolution

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::types::{slugify, Deal, Participant, ParticipantId};

/// Lookup from names and slugs to canonical participant ids
///
/// Built once from the snapshot; every participant-keyed query goes
/// through [`ParticipantDirectory::resolve`] instead of normalizing
/// strings at the call site.
#[derive(Debug, Clone, Default)]
pub struct ParticipantDirectory {
    entries: BTreeMap<ParticipantId, Participant>,
    by_name: HashMap<String, ParticipantId>,
    /// Lowercased company names seen for each id
    aliases: BTreeMap<ParticipantId, BTreeSet<String>>,
}

impl ParticipantDirectory {
    pub fn build(deals: &[Deal]) -> Self {
        let mut directory = Self::default();

        for deal in deals {
            let mut counted: Vec<ParticipantId> = Vec::new();
            for party in &deal.parties {
                let id = party.participant_id();
                directory
                    .by_name
                    .entry(party.company.trim().to_lowercase())
                    .or_insert_with(|| id.clone());
                directory
                    .aliases
                    .entry(id.clone())
                    .or_default()
                    .insert(party.company.to_lowercase());

                let entry = directory
                    .entries
                    .entry(id.clone())
                    .or_insert_with(|| Participant {
                        id: id.clone(),
                        name: party.company.clone(),
                        deal_count: 0,
                    });

                // A company listed twice on one deal still counts once
                if !counted.contains(&id) {
                    entry.deal_count += 1;
                    counted.push(id);
                }
            }
        }

        directory
    }

    /// Resolve a slug, display name or slugified name to its canonical id
    pub fn resolve(&self, name: &str) -> Option<ParticipantId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let exact = ParticipantId::new(name);
        if self.entries.contains_key(&exact) {
            return Some(exact);
        }

        if let Some(id) = self.by_name.get(&name.to_lowercase()) {
            return Some(id.clone());
        }

        let slug = ParticipantId::new(slugify(name));
        self.entries.contains_key(&slug).then_some(slug)
    }

    /// Substring-tolerant match used by the filter pipeline
    ///
    /// An id matches when it contains the slugified fragment or when any
    /// company name recorded under it contains the fragment, ignoring case.
    /// Blank fragments yield `None`.
    pub fn matching(&self, fragment: &str) -> Option<BTreeSet<ParticipantId>> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return None;
        }

        let slug = slugify(fragment);
        let name = fragment.to_lowercase();

        let ids = self
            .aliases
            .iter()
            .filter(|(id, names)| {
                id.as_str().contains(slug.as_str()) || names.iter().any(|n| n.contains(name.as_str()))
            })
            .map(|(id, _)| id.clone())
            .collect();

        Some(ids)
    }

    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.entries.get(id)
    }

    /// All participants ordered by id
    pub fn list(&self) -> Vec<Participant> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
