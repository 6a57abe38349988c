//! Venue read operations against the record store.
//!
//! These run synchronously on a blocking thread; handlers reach them through
//! [`StoreHandle::read`](crate::store::StoreHandle::read).

use super::types::{FilterOptions, VenuePage, VenueRecord, VenueSummary};
use crate::query::builder::{CATEGORY_OPTIONS_SQL, CHAIN_OPTIONS_SQL, DMA_OPTIONS_SQL};
use crate::query::{ListRequest, VenueFilter, count_query, list_query, summary_query};
use crate::store::{BoundQuery, RecordStore, StoreError};

/// One page of venues plus the unpaginated match count.
pub fn list_venues(store: &RecordStore, request: &ListRequest) -> Result<VenuePage, StoreError> {
    let items = store.query_rows(&list_query(request), VenueRecord::from_row)?;
    let total_count = store.query_one(&count_query(&request.filter), |row| row.get::<_, i64>(0))?;

    tracing::debug!(
        page = request.page.page,
        page_size = request.page.page_size,
        returned = items.len(),
        total_count,
        "listed venues"
    );

    Ok(VenuePage {
        items,
        page: request.page.page,
        page_size: request.page.page_size,
        total_count: total_count.max(0) as u64,
    })
}

/// Count and visit total over every venue matching `filter`.
pub fn summarize(store: &RecordStore, filter: &VenueFilter) -> Result<VenueSummary, StoreError> {
    let (total_venues, total_foot_traffic) = store.query_one(&summary_query(filter), |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
    })?;

    Ok(VenueSummary {
        total_venues: total_venues.max(0) as u64,
        total_foot_traffic,
    })
}

/// Distinct values for populating filter controls.
pub fn filter_options(store: &RecordStore) -> Result<FilterOptions, StoreError> {
    Ok(FilterOptions {
        chain_names: store.query_rows(&BoundQuery::plain(CHAIN_OPTIONS_SQL), |row| row.get(0))?,
        dmas: store.query_rows(&BoundQuery::plain(DMA_OPTIONS_SQL), |row| row.get(0))?,
        categories: store.query_rows(&BoundQuery::plain(CATEGORY_OPTIONS_SQL), |row| row.get(0))?,
    })
}
