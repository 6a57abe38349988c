//! Parameterized SQL for the venue endpoints.
//!
//! A [`VenueFilter`] is turned into a list of typed [`Condition`]s and folded
//! into one [`WhereClause`]. The listing, count and summary queries all embed
//! that same clause, so the count and the aggregates always describe exactly
//! the row set the listing pages through.
//!
//! Filter values only ever travel as named bindings. The text interpolated
//! into SQL is limited to column names from [`FilterColumn`], the sort column
//! and direction from their whitelists, and the numeric LIMIT/OFFSET.

use rusqlite::types::Value;

use super::validate::{ListRequest, OpenState, Sort, SortDirection, SortField, VenueFilter};
use crate::constants::VENUES_VIEW;
use crate::store::BoundQuery;
use crate::store::schema::VIEW_COLUMNS;

/// Columns of `venues_view` that accept an equality filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    ChainName,
    Dma,
    Category,
    City,
    State,
    IsOpen,
}

impl FilterColumn {
    pub fn column(self) -> &'static str {
        match self {
            FilterColumn::ChainName => "chain_name",
            FilterColumn::Dma => "dma",
            FilterColumn::Category => "category",
            FilterColumn::City => "city",
            FilterColumn::State => "state",
            FilterColumn::IsOpen => "is_open",
        }
    }

    /// Named binding for this column's value, `:` prefix included.
    pub fn param(self) -> &'static str {
        match self {
            FilterColumn::ChainName => ":chain_name",
            FilterColumn::Dma => ":dma",
            FilterColumn::Category => ":category",
            FilterColumn::City => ":city",
            FilterColumn::State => ":state",
            FilterColumn::IsOpen => ":is_open",
        }
    }
}

/// One equality predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Case-insensitive text equality.
    Text { column: FilterColumn, value: String },
    /// Exact integer equality.
    Integer { column: FilterColumn, value: i64 },
}

impl Condition {
    fn sql(&self) -> String {
        match self {
            Condition::Text { column, .. } => format!("LOWER({}) = LOWER({})", column.column(), column.param()),
            Condition::Integer { column, .. } => format!("{} = {}", column.column(), column.param()),
        }
    }

    fn binding(&self) -> (String, Value) {
        match self {
            Condition::Text { column, value } => (column.param().to_string(), Value::Text(value.clone())),
            Condition::Integer { column, value } => (column.param().to_string(), Value::Integer(*value)),
        }
    }
}

/// Conditions contributed by each present filter field, in a fixed order.
pub fn conditions(filter: &VenueFilter) -> Vec<Condition> {
    let text = |column, value: &Option<String>| {
        value.as_ref().map(|v| Condition::Text {
            column,
            value: v.clone(),
        })
    };

    let open = match filter.open_state {
        OpenState::All => None,
        OpenState::Open => Some(1),
        OpenState::Closed => Some(0),
    };

    [
        text(FilterColumn::ChainName, &filter.chain_name),
        filter.dma.map(|value| Condition::Integer {
            column: FilterColumn::Dma,
            value,
        }),
        text(FilterColumn::Category, &filter.category),
        text(FilterColumn::City, &filter.city),
        text(FilterColumn::State, &filter.state),
        open.map(|value| Condition::Integer {
            column: FilterColumn::IsOpen,
            value,
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// AND-combined predicate with its bindings. Empty when the filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    sql: String,
    params: Vec<(String, Value)>,
}

impl WhereClause {
    pub fn from_filter(filter: &VenueFilter) -> Self {
        let conditions = conditions(filter);
        if conditions.is_empty() {
            return Self::default();
        }

        let predicates: Vec<String> = conditions.iter().map(Condition::sql).collect();
        Self {
            sql: format!("WHERE {}", predicates.join(" AND ")),
            params: conditions.iter().map(Condition::binding).collect(),
        }
    }

    /// The clause text, including the leading `WHERE`, or empty.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[(String, Value)] {
        &self.params
    }

    fn bind(&self, sql: String) -> BoundQuery {
        BoundQuery {
            sql,
            params: self.params.clone(),
        }
    }
}

/// ORDER BY text for a whitelisted sort. `entity_id` breaks ties so
/// consecutive pages never overlap or skip rows.
pub fn order_by(sort: Sort) -> String {
    let column = match sort.field {
        SortField::Name => "name COLLATE NOCASE",
        SortField::FootTraffic => "visits",
    };
    let direction = match sort.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };
    format!("{column} {direction}, entity_id ASC")
}

/// Page of venue rows.
pub fn list_query(request: &ListRequest) -> BoundQuery {
    let clause = WhereClause::from_filter(&request.filter);
    let offset = request.page.offset().min(i64::MAX as u64);
    clause.bind(format!(
        "SELECT {VIEW_COLUMNS} FROM {VENUES_VIEW} {} ORDER BY {} LIMIT {} OFFSET {offset}",
        clause.sql(),
        order_by(request.sort),
        request.page.page_size,
    ))
}

/// Number of rows matching the filter, ignoring pagination.
pub fn count_query(filter: &VenueFilter) -> BoundQuery {
    let clause = WhereClause::from_filter(filter);
    clause.bind(format!("SELECT COUNT(*) FROM {VENUES_VIEW} {}", clause.sql()))
}

/// Row count and visit total. `COALESCE` keeps the total at 0 for an empty match.
pub fn summary_query(filter: &VenueFilter) -> BoundQuery {
    let clause = WhereClause::from_filter(filter);
    clause.bind(format!(
        "SELECT COUNT(*), COALESCE(SUM(visits), 0) FROM {VENUES_VIEW} {}",
        clause.sql()
    ))
}

/// Distinct non-empty chain names, ascending.
pub const CHAIN_OPTIONS_SQL: &str = "SELECT DISTINCT chain_name FROM venues_view \
     WHERE chain_name IS NOT NULL AND TRIM(chain_name) <> '' ORDER BY chain_name ASC";

/// Distinct DMA codes, ascending.
pub const DMA_OPTIONS_SQL: &str = "SELECT DISTINCT dma FROM venues_view WHERE dma IS NOT NULL ORDER BY dma ASC";

/// Distinct non-empty categories, ascending.
pub const CATEGORY_OPTIONS_SQL: &str = "SELECT DISTINCT category FROM venues_view \
     WHERE category IS NOT NULL AND TRIM(category) <> '' ORDER BY category ASC";
