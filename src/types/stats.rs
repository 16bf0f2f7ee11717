//! Statistics snapshot types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DealType;

/// Count and volume for one deal type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    #[serde(rename = "type")]
    pub deal_type: DealType,
    pub count: usize,
    pub volume: f64,
}

/// Count and volume for one fiscal quarter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterBucket {
    /// "Q<n> <year>"
    pub label: String,
    pub quarter: u32,
    pub year: i32,
    pub count: usize,
    pub volume: f64,
}

/// Count and volume for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearBucket {
    pub year: i32,
    pub count: usize,
    pub volume: f64,
}

/// Aggregate view over the whole store at a reference date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealStats {
    pub as_of: NaiveDate,
    pub total_deals: usize,
    pub total_volume: f64,
    /// Divides by deals with a disclosed amount, not by `total_deals`
    pub avg_deal_size: f64,
    pub deals_this_month: usize,
    pub volume_this_month: f64,
    pub ytd_deal_count: usize,
    pub ytd_volume: f64,
    pub by_type: Vec<TypeBreakdown>,
    pub by_quarter: Vec<QuarterBucket>,
    pub by_year: Vec<YearBucket>,
}

impl DealStats {
    /// Breakdown entry for a type
    pub fn type_breakdown(&self, deal_type: DealType) -> Option<&TypeBreakdown> {
        self.by_type.iter().find(|b| b.deal_type == deal_type)
    }
}
