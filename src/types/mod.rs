//! Data types for the deal flow engine
//!
//! This module contains all the core data structures used throughout the application.

mod criteria;
mod deal;
mod participant;
mod stats;

pub use criteria::{FilterCriteria, FilterResult, DEFAULT_PAGE_SIZE};
pub use deal::{Deal, DealType, Party, PartyRole};
pub use participant::{slugify, Participant, ParticipantId};
pub use stats::{DealStats, QuarterBucket, TypeBreakdown, YearBucket};
