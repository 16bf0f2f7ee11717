//! Filter criteria and paged results

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Deal, DealType};

/// Page size used when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Optional predicates combined with logical AND, plus pagination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub deal_type: Option<DealType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// 1-indexed page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl FilterCriteria {
    /// Criteria matching every deal
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, deal_type: DealType) -> Self {
        self.deal_type = Some(deal_type);
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn with_amount_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn with_participant(mut self, participant: impl Into<String>) -> Self {
        self.participant = Some(participant.into());
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    pub fn with_page(mut self, page: usize, limit: usize) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Page number, with 0 and absent both meaning the first page
    pub fn normalized_page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, falling back to the default for 0 or absent
    pub fn normalized_limit(&self) -> usize {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of filtered deals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    pub deals: Vec<Deal>,
    /// Matching deals before pagination
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    /// Never less than 1, even for an empty result
    pub total_pages: usize,
}
