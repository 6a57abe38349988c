//! End-to-end ingestion of the fixture CSV and the health report over it.

mod common;

use bigbox::domain::list_venues;
use bigbox::ingest::{IngestReport, build_database};
use bigbox::query::{ListRequest, PageRequest, Sort};
use common::{INVALID_ROWS, VALID_ROWS, VenueFixture, venues};

#[test]
fn test_fixture_report() {
    let fixture = VenueFixture::build();
    assert_eq!(fixture.report, IngestReport {
        rows_read: (VALID_ROWS + INVALID_ROWS) as u64,
        skipped: INVALID_ROWS as u64,
        venue_count: VALID_ROWS as u64,
        distinct_chains: 3,
        distinct_dmas: 4,
    });
}

#[test]
fn test_ingested_rows_round_through_the_view() {
    let fixture = VenueFixture::build();
    let store = fixture.open_store();
    assert_eq!(store.record_count(), VALID_ROWS as u64);

    let request = ListRequest {
        page: PageRequest { page: 1, page_size: 100 },
        sort: Sort::default(),
        ..Default::default()
    };
    let listed = list_venues(&store, &request).unwrap();

    for item in &listed.items {
        let expected = venues().into_iter().find(|v| v.entity_id == item.entity_id).unwrap();
        assert_eq!(item.name, expected.name);
        assert_eq!(item.chain_name.as_deref(), expected.chain_name);
        assert_eq!(item.category.as_deref(), Some(expected.category));
        assert_eq!(item.dma, expected.dma);
        assert_eq!(item.city.as_deref(), Some(expected.city));
        assert_eq!(item.state.as_deref(), Some(expected.state));
        assert_eq!(item.visits, expected.visits);
        assert_eq!(item.is_open, expected.is_open);
    }
}

#[test]
fn test_health_report_over_fixture() {
    let fixture = VenueFixture::build();
    let report = fixture.open_store().inspect().unwrap();

    assert_eq!(report.venue_count, VALID_ROWS as u64);
    assert_eq!(report.open_count, venues().iter().filter(|v| v.is_open).count() as u64);
    // Walmart, Target, Costco and the independents.
    assert_eq!(report.distinct_chains, 4);
    assert_eq!(report.top_chains[0].chain_name.as_deref(), Some("Walmart"));
    assert_eq!(report.top_chains[0].venues, 50);
    assert_eq!(report.sample.len(), 5);
    assert!(report.is_healthy());
}

#[test]
fn test_rebuild_is_idempotent() {
    let fixture = VenueFixture::build();
    let again = build_database(&fixture.csv_path, &fixture.db_path).unwrap();
    assert_eq!(again, fixture.report);
}
