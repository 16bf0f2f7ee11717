//! Participant identity types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical key of a company across deals
///
/// Either the company's explicit slug or its name lowercased with whitespace
/// runs replaced by hyphens. Punctuation is left untouched, so "Rocket Lab"
/// and "Rocket Lab, Inc." resolve to different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Wrap an already canonical identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the id from a display name
    pub fn from_name(name: &str) -> Self {
        Self(slugify(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase and join whitespace-separated words with hyphens
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Directory entry for one participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    /// Display name as first seen in the store
    pub name: String,
    #[serde(rename = "dealCount")]
    pub deal_count: usize,
}
