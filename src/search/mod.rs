//! Predicate filters and free-text matching
//!
//! This module provides the composable boolean tests the filter pipeline
//! combines:
//! - Type, amount-range, date-range and verification checks
//! - Case-insensitive text search over titles, descriptions and party names
//! - Substring-tolerant participant matching

mod predicates;

pub use predicates::{from_criteria, matches_all, matches_text, Predicate};
