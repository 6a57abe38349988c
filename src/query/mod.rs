//! Validated requests and the SQL built from them.

pub mod builder;
pub mod validate;

pub use builder::{Condition, FilterColumn, WhereClause, count_query, list_query, summary_query};
pub use validate::{
    ListRequest, OpenState, PageRequest, Sort, SortDirection, SortField, ValidationError, ValidationReason,
    VenueFilter,
};
