//! Deal Flow Engine
//!
//! A read-only query and aggregation engine over a static snapshot of
//! space-industry business events: funding rounds, acquisitions, contract
//! wins, IPOs and SPAC mergers.
//!
//! # Features
//!
//! - **Filter Pipeline**: AND-composed predicates, date-descending sort, pagination
//! - **Search**: Case-insensitive matching over titles, descriptions and party names
//! - **Statistics**: Totals, per-type, trailing-quarter and per-year breakdowns
//! - **Participants**: Canonical company resolution by slug or display name
//! - **REST API**: Axum endpoints for every query
//!
//! # Modules
//!
//! - `types`: Core data structures (Deal, FilterCriteria, DealStats)
//! - `deal_store`: Immutable snapshot with queries and aggregation
//! - `search`: Composable predicates
//! - `api`: HTTP endpoints
//! - `config`: Server configuration
//! - `utils`: Calendar helpers
//!
//! # Example
//!
//! ```no_run
//! use deal_flow::{DealStore, DealType, FilterCriteria};
//!
//! let store = DealStore::bundled().unwrap();
//! let page = store.filter(&FilterCriteria::new().with_type(DealType::FundingRound));
//! println!("{} funding rounds", page.total);
//!
//! let stats = store.compute_stats();
//! println!("Average disclosed deal: ${:.0}", stats.avg_deal_size);
//! ```

pub mod api;
pub mod config;
pub mod deal_store;
pub mod error;
pub mod search;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::ServerConfig;
pub use deal_store::DealStore;
pub use error::{DealError, DealResult};
pub use types::{
    Deal, DealStats, DealType, FilterCriteria, FilterResult, Participant, ParticipantId, Party,
    PartyRole, QuarterBucket, TypeBreakdown, YearBucket,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
