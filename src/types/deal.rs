//! Deal record types

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ParticipantId;

/// Kind of business event a deal records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealType {
    FundingRound,
    Acquisition,
    Ipo,
    Spac,
    ContractWin,
}

impl DealType {
    /// Every deal type, in reporting order
    pub const ALL: [DealType; 5] = [
        DealType::FundingRound,
        DealType::Acquisition,
        DealType::Ipo,
        DealType::Spac,
        DealType::ContractWin,
    ];

    /// Wire name of the type (`funding_round`, `contract_win`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            DealType::FundingRound => "funding_round",
            DealType::Acquisition => "acquisition",
            DealType::Ipo => "ipo",
            DealType::Spac => "spac",
            DealType::ContractWin => "contract_win",
        }
    }
}

impl fmt::Display for DealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DealType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown deal type '{}'. Expected one of: funding_round, acquisition, ipo, spac, contract_win",
                    s
                )
            })
    }
}

/// Role a party plays in a deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    Target,
    Acquirer,
    Recipient,
    Investor,
    Awarder,
}

/// Company taking part in a deal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub company: String,
    #[serde(rename = "companySlug", default, skip_serializing_if = "Option::is_none")]
    pub company_slug: Option<String>,
    pub role: PartyRole,
}

impl Party {
    /// Create a party without a slug
    pub fn new(company: impl Into<String>, role: PartyRole) -> Self {
        Self {
            company: company.into(),
            company_slug: None,
            role,
        }
    }

    /// Create a party with an explicit slug
    pub fn with_slug(company: impl Into<String>, slug: impl Into<String>, role: PartyRole) -> Self {
        Self {
            company: company.into(),
            company_slug: Some(slug.into()),
            role,
        }
    }

    /// Canonical participant key: the slug when present, otherwise the slugified name
    pub fn participant_id(&self) -> ParticipantId {
        match self.company_slug.as_deref() {
            Some(slug) => ParticipantId::new(slug),
            None => ParticipantId::from_name(&self.company),
        }
    }
}

/// One discrete, dated business event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    #[serde(rename = "type")]
    pub deal_type: DealType,
    pub title: String,
    /// USD value; `None` when no figure was disclosed
    #[serde(default)]
    pub amount: Option<f64>,
    pub date: NaiveDate,
    pub parties: Vec<Party>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default)]
    pub source: String,
    #[serde(rename = "sourceUrl", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub description: String,
}

impl Deal {
    /// Create a deal with the required fields; the rest default to empty
    pub fn new(
        id: impl Into<String>,
        deal_type: DealType,
        title: impl Into<String>,
        amount: Option<f64>,
        date: NaiveDate,
        parties: Vec<Party>,
    ) -> Self {
        Self {
            id: id.into(),
            deal_type,
            title: title.into(),
            amount,
            date,
            parties,
            stage: None,
            source: String::new(),
            source_url: None,
            verified: false,
            description: String::new(),
        }
    }

    /// Amount contribution to volume sums (unknown counts as zero)
    pub fn volume(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }

    /// Whether any party resolves to the given participant
    pub fn involves(&self, participant: &ParticipantId) -> bool {
        self.parties.iter().any(|p| &p.participant_id() == participant)
    }
}
