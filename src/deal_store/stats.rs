//! Aggregate statistics over the full snapshot

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::types::{DealStats, DealType, QuarterBucket, TypeBreakdown, YearBucket};
use crate::utils::time::{quarter_label, quarter_of, start_of_month, start_of_year, trailing_quarters};

use super::DealStore;

/// Quarters reported in the trailing series
pub const TRAILING_QUARTERS: usize = 12;

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    count: usize,
    volume: f64,
}

impl Tally {
    fn add(&mut self, volume: f64) {
        self.count += 1;
        self.volume += volume;
    }
}

/// Compute the statistics snapshot as of `now`
///
/// Ignores any filter state; unknown amounts count toward every count
/// aggregate and add nothing to volumes.
pub fn compute_stats(store: &DealStore, now: NaiveDate) -> DealStats {
    let month_start = start_of_month(now);
    let year_start = start_of_year(now);

    let mut total = Tally::default();
    let mut known_amounts = 0usize;
    let mut this_month = Tally::default();
    let mut ytd = Tally::default();
    let mut by_type: HashMap<DealType, Tally> = HashMap::new();
    let mut by_quarter: HashMap<(u32, i32), Tally> = HashMap::new();
    let mut by_year: BTreeMap<i32, Tally> = BTreeMap::new();

    for deal in &store.deals {
        let volume = deal.volume();

        total.add(volume);
        if deal.amount.is_some() {
            known_amounts += 1;
        }
        if deal.date >= month_start && deal.date <= now {
            this_month.add(volume);
        }
        if deal.date >= year_start && deal.date <= now {
            ytd.add(volume);
        }

        by_type.entry(deal.deal_type).or_default().add(volume);
        by_quarter
            .entry((quarter_of(deal.date), deal.date.year()))
            .or_default()
            .add(volume);
        by_year.entry(deal.date.year()).or_default().add(volume);
    }

    let avg_deal_size = if known_amounts > 0 {
        total.volume / known_amounts as f64
    } else {
        0.0
    };

    let by_type: Vec<TypeBreakdown> = DealType::ALL
        .iter()
        .map(|&deal_type| {
            let tally = by_type.get(&deal_type).copied().unwrap_or_default();
            TypeBreakdown {
                deal_type,
                count: tally.count,
                volume: tally.volume,
            }
        })
        .collect();

    let by_quarter: Vec<QuarterBucket> = trailing_quarters(now, TRAILING_QUARTERS)
        .into_iter()
        .map(|(quarter, year)| {
            let tally = by_quarter.get(&(quarter, year)).copied().unwrap_or_default();
            QuarterBucket {
                label: quarter_label(quarter, year),
                quarter,
                year,
                count: tally.count,
                volume: tally.volume,
            }
        })
        .collect();

    let by_year: Vec<YearBucket> = by_year
        .into_iter()
        .map(|(year, tally)| YearBucket {
            year,
            count: tally.count,
            volume: tally.volume,
        })
        .collect();

    log::debug!(
        "Computed stats as of {}: {} deals, {} with disclosed amounts",
        now,
        total.count,
        known_amounts
    );

    DealStats {
        as_of: now,
        total_deals: total.count,
        total_volume: total.volume,
        avg_deal_size,
        deals_this_month: this_month.count,
        volume_this_month: this_month.volume,
        ytd_deal_count: ytd.count,
        ytd_volume: ytd.volume,
        by_type,
        by_quarter,
        by_year,
    }
}
