//! Utility functions and helpers
//!
//! This module contains calendar helpers used by the aggregator and recency queries.

pub mod time;

pub use time::{
    days_before, quarter_label, quarter_of, quarter_of_month, start_of_month, start_of_year, today,
    trailing_quarters,
};
