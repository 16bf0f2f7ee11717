//! Integration tests for the Deal Flow Engine

use std::collections::HashSet;
use std::io::Write;

use chrono::NaiveDate;

use deal_flow::types::slugify;
use deal_flow::{
    Deal, DealError, DealStore, DealType, FilterCriteria, Party, PartyRole,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// D1..D4: the four-record reference fixture
fn fixture() -> Vec<Deal> {
    vec![
        Deal::new(
            "D1",
            DealType::FundingRound,
            "Seed round for Orbital Widgets",
            Some(100.0),
            date(2021, 1, 10),
            vec![
                Party::with_slug("Orbital Widgets", "orbital-widgets", PartyRole::Recipient),
                Party::new("Launch Capital", PartyRole::Investor),
            ],
        ),
        Deal::new(
            "D2",
            DealType::Acquisition,
            "Orbital Widgets acquires Tiny Thrusters",
            None,
            date(2021, 4, 5),
            vec![
                Party::with_slug("Orbital Widgets", "orbital-widgets", PartyRole::Acquirer),
                Party::new("Tiny Thrusters", PartyRole::Target),
            ],
        ),
        Deal::new(
            "D3",
            DealType::ContractWin,
            "Tiny Thrusters wins propulsion study",
            Some(50.0),
            date(2022, 1, 20),
            vec![
                Party::new("Tiny Thrusters", PartyRole::Recipient),
                Party::with_slug("NASA", "nasa", PartyRole::Awarder),
            ],
        ),
        Deal::new(
            "D4",
            DealType::FundingRound,
            "Series A for Orbital Widgets",
            Some(200.0),
            date(2022, 6, 15),
            vec![
                Party::with_slug("Orbital Widgets", "orbital-widgets", PartyRole::Recipient),
                Party::new("Launch Capital", PartyRole::Investor),
            ],
        ),
    ]
}

fn setup_store() -> DealStore {
    DealStore::new(fixture()).unwrap()
}

/// Fixture with D1 and D3 marked verified
fn setup_verified_store() -> DealStore {
    let mut deals = fixture();
    for deal in &mut deals {
        deal.verified = matches!(deal.id.as_str(), "D1" | "D3");
    }
    DealStore::new(deals).unwrap()
}

fn ids(deals: &[Deal]) -> Vec<&str> {
    deals.iter().map(|d| d.id.as_str()).collect()
}

#[test]
fn test_get_all_newest_first() {
    let store = setup_store();
    assert_eq!(ids(&store.get_all()), vec!["D4", "D3", "D2", "D1"]);
}

#[test]
fn test_get_by_type() {
    let store = setup_store();
    assert_eq!(ids(&store.get_by_type(DealType::FundingRound)), vec!["D4", "D1"]);
    assert!(store.get_by_type(DealType::Ipo).is_empty());
}

#[test]
fn test_get_by_participant_slug_and_fallback() {
    let store = setup_store();

    assert_eq!(
        ids(&store.get_by_participant("orbital-widgets")),
        vec!["D4", "D2", "D1"]
    );
    // No slug: falls back to the slugified company name
    assert_eq!(ids(&store.get_by_participant("tiny-thrusters")), vec!["D3", "D2"]);
    assert_eq!(ids(&store.get_by_participant("Tiny Thrusters")), vec!["D3", "D2"]);
    assert!(store.get_by_participant("unknown").is_empty());
}

#[test]
fn test_resolve_participant() {
    let store = setup_store();
    assert_eq!(
        store.resolve_participant("Orbital Widgets").map(|id| id.to_string()),
        Some("orbital-widgets".to_string())
    );
    assert_eq!(
        store.resolve_participant("launch capital").map(|id| id.to_string()),
        Some("launch-capital".to_string())
    );
    assert!(store.resolve_participant("Nobody").is_none());
}

#[test]
fn test_filter_by_type() {
    let store = setup_store();
    let result = store.filter(&FilterCriteria::new().with_type(DealType::FundingRound));

    assert_eq!(ids(&result.deals), vec!["D4", "D1"]);
    assert_eq!(result.total, 2);
    assert_eq!(result.page, 1);
    assert_eq!(result.total_pages, 1);
}

#[test]
fn test_filter_min_amount_excludes_unknown() {
    let store = setup_store();
    let result = store.filter(&FilterCriteria::new().with_amount_range(Some(60.0), None));

    // D1 (100) and D4 (200) clear the bound; D2 has no amount
    assert_eq!(ids(&result.deals), vec!["D4", "D1"]);
    assert_eq!(result.total, 2);

    let result = store.filter(&FilterCriteria::new().with_amount_range(None, Some(1000.0)));
    assert_eq!(ids(&result.deals), vec!["D4", "D3", "D1"]);
}

#[test]
fn test_filter_date_range_inclusive() {
    let store = setup_store();
    let criteria =
        FilterCriteria::new().with_date_range(Some(date(2021, 4, 5)), Some(date(2022, 1, 20)));
    let result = store.filter(&criteria);
    assert_eq!(ids(&result.deals), vec!["D3", "D2"]);
}

#[test]
fn test_filter_by_verified() {
    let store = setup_verified_store();

    let verified = store.filter(&FilterCriteria::new().with_verified(true));
    assert_eq!(ids(&verified.deals), vec!["D3", "D1"]);

    let unverified = store.filter(&FilterCriteria::new().with_verified(false));
    assert_eq!(ids(&unverified.deals), vec!["D4", "D2"]);

    let combined = store.filter(
        &FilterCriteria::new()
            .with_verified(true)
            .with_participant("orbital"),
    );
    assert_eq!(ids(&combined.deals), vec!["D1"]);
}

#[test]
fn test_filter_by_participant_fragment() {
    let store = setup_store();

    let result = store.filter(&FilterCriteria::new().with_participant("Tiny"));
    assert_eq!(ids(&result.deals), vec!["D3", "D2"]);

    let result = store.filter(&FilterCriteria::new().with_participant("orbital-wid"));
    assert_eq!(ids(&result.deals), vec!["D4", "D2", "D1"]);

    let result = store.filter(&FilterCriteria::new().with_participant("SpaceX"));
    assert!(result.deals.is_empty());
    assert_eq!(result.total_pages, 1);
}

#[test]
fn test_filter_combines_predicates() {
    let store = setup_store();
    let criteria = FilterCriteria::new()
        .with_search("orbital")
        .with_participant("launch")
        .with_date_range(Some(date(2022, 1, 1)), None);

    let result = store.filter(&criteria);
    assert_eq!(ids(&result.deals), vec!["D4"]);
}

#[test]
fn test_filter_empty_result_has_one_page() {
    let store = setup_store();
    let result = store.filter(&FilterCriteria::new().with_type(DealType::Spac));

    assert!(result.deals.is_empty());
    assert_eq!(result.total, 0);
    assert_eq!(result.total_pages, 1);
}

#[test]
fn test_filter_page_out_of_range_is_empty() {
    let store = setup_store();
    let result = store.filter(&FilterCriteria::new().with_page(9, 2));

    assert!(result.deals.is_empty());
    assert_eq!(result.total, 4);
    assert_eq!(result.total_pages, 2);
    assert_eq!(result.page, 9);
}

#[test]
fn test_pages_concatenate_to_full_result() {
    let store = setup_store();
    let full = store.filter(&FilterCriteria::new().with_page(1, 100));

    for limit in 1..=5 {
        let first = store.filter(&FilterCriteria::new().with_page(1, limit));
        let mut collected = Vec::new();
        for page in 1..=first.total_pages {
            let result = store.filter(&FilterCriteria::new().with_page(page, limit));
            assert_eq!(result.total, full.total);
            collected.extend(result.deals);
        }

        assert_eq!(ids(&collected), ids(&full.deals));
        let unique: HashSet<&str> = ids(&collected).into_iter().collect();
        assert_eq!(unique.len(), collected.len());
    }
}

#[test]
fn test_every_result_satisfies_criteria() {
    let store = setup_verified_store();
    let criteria_list = vec![
        FilterCriteria::new().with_type(DealType::Acquisition),
        FilterCriteria::new().with_amount_range(Some(50.0), Some(150.0)),
        FilterCriteria::new().with_search("thrusters"),
        FilterCriteria::new().with_search("Orbital Widgets "),
        FilterCriteria::new().with_participant("nasa"),
        FilterCriteria::new().with_participant("Launch"),
        FilterCriteria::new().with_date_range(Some(date(2021, 4, 5)), None),
        FilterCriteria::new().with_date_range(None, Some(date(2022, 1, 20))),
        FilterCriteria::new().with_verified(true),
        FilterCriteria::new().with_verified(false),
        FilterCriteria::new()
            .with_type(DealType::FundingRound)
            .with_search("orbital")
            .with_participant("capital")
            .with_amount_range(Some(150.0), None)
            .with_date_range(Some(date(2022, 1, 1)), Some(date(2022, 12, 31)))
            .with_verified(false),
    ];

    for criteria in criteria_list {
        let result = store.filter(&criteria);
        for deal in &result.deals {
            if let Some(deal_type) = criteria.deal_type {
                assert_eq!(deal.deal_type, deal_type);
            }
            if let Some(min) = criteria.min_amount {
                assert!(deal.amount.map_or(false, |a| a >= min));
            }
            if let Some(max) = criteria.max_amount {
                assert!(deal.amount.map_or(false, |a| a <= max));
            }
            if let Some(query) = criteria.search.as_deref() {
                let query = query.to_lowercase();
                let text_hit = deal.title.to_lowercase().contains(&query)
                    || deal.description.to_lowercase().contains(&query)
                    || deal
                        .parties
                        .iter()
                        .any(|p| p.company.to_lowercase().contains(&query));
                assert!(text_hit, "{} does not contain {:?}", deal.id, query);
            }
            if let Some(fragment) = criteria.participant.as_deref() {
                let slug = slugify(fragment);
                let name = fragment.to_lowercase();
                assert!(deal.parties.iter().any(|p| {
                    p.participant_id().as_str().contains(&slug)
                        || p.company.to_lowercase().contains(&name)
                }));
            }
            if let Some(from) = criteria.date_from {
                assert!(deal.date >= from);
            }
            if let Some(to) = criteria.date_to {
                assert!(deal.date <= to);
            }
            if let Some(verified) = criteria.verified {
                assert_eq!(deal.verified, verified);
            }
        }
        assert_eq!(result.total, result.deals.len());
    }
}

#[test]
fn test_search() {
    let store = setup_store();
    assert_eq!(ids(&store.search("TINY")), vec!["D3", "D2"]);
    assert_eq!(ids(&store.search("launch capital")), vec!["D4", "D1"]);
    assert_eq!(store.search("  ").len(), 4);
}

#[test]
fn test_search_keeps_surrounding_whitespace() {
    let store = setup_store();

    assert_eq!(ids(&store.search("orbital widgets")), vec!["D4", "D2", "D1"]);
    // Only D2 has text after "Orbital Widgets"
    assert_eq!(ids(&store.search("orbital widgets ")), vec!["D2"]);

    let result = store.filter(&FilterCriteria::new().with_search("orbital widgets "));
    assert_eq!(ids(&result.deals), vec!["D2"]);
}

#[test]
fn test_compute_stats_fixture_totals() {
    let store = setup_store();
    let stats = store.compute_stats_at(date(2022, 6, 30));

    assert_eq!(stats.total_deals, 4);
    assert_eq!(stats.total_volume, 350.0);
    assert!((stats.avg_deal_size - 350.0 / 3.0).abs() < 1e-9);

    let funding = stats.type_breakdown(DealType::FundingRound).unwrap();
    assert_eq!((funding.count, funding.volume), (2, 300.0));
    let acquisition = stats.type_breakdown(DealType::Acquisition).unwrap();
    assert_eq!((acquisition.count, acquisition.volume), (1, 0.0));
}

#[test]
fn test_compute_stats_breakdowns_sum_to_totals() {
    let store = setup_store();
    let stats = store.compute_stats_at(date(2022, 6, 30));

    assert_eq!(stats.by_type.len(), DealType::ALL.len());
    for deal_type in DealType::ALL {
        assert_eq!(
            stats.by_type.iter().filter(|b| b.deal_type == deal_type).count(),
            1
        );
    }

    let count: usize = stats.by_type.iter().map(|b| b.count).sum();
    let volume: f64 = stats.by_type.iter().map(|b| b.volume).sum();
    assert_eq!(count, stats.total_deals);
    assert_eq!(volume, stats.total_volume);
}

#[test]
fn test_compute_stats_windows() {
    let store = setup_store();
    let stats = store.compute_stats_at(date(2022, 6, 15));

    assert_eq!(stats.deals_this_month, 1);
    assert_eq!(stats.volume_this_month, 200.0);
    assert_eq!(stats.ytd_deal_count, 2);
    assert_eq!(stats.ytd_volume, 250.0);

    // The window ends at the reference date
    let stats = store.compute_stats_at(date(2022, 6, 14));
    assert_eq!(stats.deals_this_month, 0);
    assert_eq!(stats.ytd_deal_count, 1);
}

#[test]
fn test_compute_stats_trailing_quarters() {
    let store = setup_store();
    let stats = store.compute_stats_at(date(2022, 6, 30));

    assert_eq!(stats.by_quarter.len(), 12);
    assert_eq!(stats.by_quarter[0].label, "Q3 2019");
    let last = stats.by_quarter.last().unwrap();
    assert_eq!(last.label, "Q2 2022");
    assert_eq!((last.count, last.volume), (1, 200.0));

    let q2_2021 = stats
        .by_quarter
        .iter()
        .find(|q| q.quarter == 2 && q.year == 2021)
        .unwrap();
    assert_eq!((q2_2021.count, q2_2021.volume), (1, 0.0));

    let ordered: Vec<(i32, u32)> = stats.by_quarter.iter().map(|q| (q.year, q.quarter)).collect();
    let mut sorted = ordered.clone();
    sorted.sort();
    assert_eq!(ordered, sorted);
}

#[test]
fn test_compute_stats_quarters_outside_window_are_dropped() {
    let store = setup_store();
    let stats = store.compute_stats_at(date(2026, 10, 16));

    assert_eq!(stats.by_quarter.len(), 12);
    assert_eq!(stats.by_quarter.last().unwrap().label, "Q4 2026");
    assert!(stats.by_quarter.iter().all(|q| q.count == 0 && q.volume == 0.0));
    // Year series still covers the full data set
    assert_eq!(stats.total_deals, 4);
}

#[test]
fn test_compute_stats_by_year() {
    let store = setup_store();
    let stats = store.compute_stats_at(date(2022, 6, 30));

    let years: Vec<(i32, usize, f64)> = stats
        .by_year
        .iter()
        .map(|y| (y.year, y.count, y.volume))
        .collect();
    assert_eq!(years, vec![(2021, 2, 100.0), (2022, 2, 250.0)]);
}

#[test]
fn test_compute_stats_all_unknown_amounts() {
    let mut deals = fixture();
    for deal in &mut deals {
        deal.amount = None;
    }
    let store = DealStore::new(deals).unwrap();
    let stats = store.compute_stats_at(date(2022, 6, 30));

    assert_eq!(stats.total_deals, 4);
    assert_eq!(stats.total_volume, 0.0);
    assert_eq!(stats.avg_deal_size, 0.0);
}

#[test]
fn test_empty_store() {
    let store = DealStore::new(Vec::new()).unwrap();
    assert!(store.get_all().is_empty());

    let result = store.filter(&FilterCriteria::new());
    assert_eq!((result.total, result.total_pages), (0, 1));

    let stats = store.compute_stats_at(date(2024, 2, 1));
    assert_eq!(stats.total_deals, 0);
    assert_eq!(stats.by_type.len(), 5);
    assert_eq!(stats.by_quarter.len(), 12);
    assert!(stats.by_year.is_empty());
}

#[test]
fn test_duplicate_ids_rejected() {
    let mut deals = fixture();
    deals[3].id = "D1".to_string();
    assert!(matches!(DealStore::new(deals), Err(DealError::DuplicateId(_))));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for deal in fixture() {
        writeln!(file, "{}", serde_json::to_string(&deal).unwrap()).unwrap();
    }

    let store = DealStore::from_file(file.path()).unwrap();
    assert_eq!(ids(&store.get_all()), vec!["D4", "D3", "D2", "D1"]);
    assert_eq!(store.snapshot(), setup_store().snapshot());
}

#[test]
fn test_load_from_missing_file() {
    let result = DealStore::from_file("definitely/not/here.jsonl");
    assert!(matches!(result, Err(DealError::Io(_))));
}
