//! Request validation for the venue endpoints.
//!
//! Raw query-string parameters come in as a string map and leave as typed
//! filter, sort and page values. Any recognized field that is present but
//! malformed fails the whole request; unrecognized fields are ignored.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Why a request parameter was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("must not be empty")]
    Empty,
    #[error("must be an integer")]
    NotAnInteger,
    #[error("must be a positive integer")]
    NotPositive,
    #[error("must be at most {max}")]
    TooLarge { max: u32 },
    #[error("must be one of: {}", .allowed.join(", "))]
    NotAllowed { allowed: &'static [&'static str] },
}

/// A request parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid `{field}`: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Machine-readable error code reported to API clients.
    pub const CODE: &'static str = "VALIDATION_ERROR";

    fn new(field: &'static str, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

/// Open/closed filter over the derived `is_open` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenState {
    #[default]
    All,
    Open,
    Closed,
}

/// Whitelisted sort keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    #[default]
    FootTraffic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Enumerated request parameters share one parse path.
trait Choice: Sized + Copy + Default {
    const VARIANTS: &'static [&'static str];
    fn from_index(index: usize) -> Self;
}

impl Choice for OpenState {
    const VARIANTS: &'static [&'static str] = &["all", "open", "closed"];
    fn from_index(index: usize) -> Self {
        [Self::All, Self::Open, Self::Closed][index]
    }
}

impl Choice for SortField {
    const VARIANTS: &'static [&'static str] = &["name", "foot_traffic"];
    fn from_index(index: usize) -> Self {
        [Self::Name, Self::FootTraffic][index]
    }
}

impl Choice for SortDirection {
    const VARIANTS: &'static [&'static str] = &["asc", "desc"];
    fn from_index(index: usize) -> Self {
        [Self::Asc, Self::Desc][index]
    }
}

macro_rules! choice_str_impls {
    ($($ty:ty),*) => {$(
        impl $ty {
            /// Wire spelling of this value.
            pub fn as_str(self) -> &'static str {
                <$ty as Choice>::VARIANTS[self as usize]
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as Choice>::VARIANTS
                    .iter()
                    .position(|v| *v == s)
                    .map(<$ty as Choice>::from_index)
                    .ok_or_else(|| format!("expected one of: {}", <$ty as Choice>::VARIANTS.join(", ")))
            }
        }
    )*};
}

choice_str_impls!(OpenState, SortField, SortDirection);

/// Equality filters shared by the list and summary endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VenueFilter {
    pub chain_name: Option<String>,
    pub dma: Option<i64>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub open_state: OpenState,
}

impl VenueFilter {
    /// Validate the filter fields of a request.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationError> {
        Ok(Self {
            chain_name: text(params, "chain_name")?,
            dma: params.get("dma").map(|raw| parse_integer("dma", raw)).transpose()?,
            category: text(params, "category")?,
            city: text(params, "city")?,
            state: text(params, "state")?,
            open_state: choice(params, "is_open")?,
        })
    }

    /// True when no field narrows the result set.
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }
}

/// Page window requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u64,
    pub page_size: u32,
}

impl PageRequest {
    /// Row offset of the first item on this page. Saturates rather than overflowing.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(u64::from(self.page_size))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: u64::from(DEFAULT_PAGE),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

/// A validated list-venues request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListRequest {
    pub filter: VenueFilter,
    pub page: PageRequest,
    pub sort: Sort,
}

impl ListRequest {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let filter = VenueFilter::from_params(params)?;

        let page = match params.get("page") {
            Some(raw) => positive("page", raw)?,
            None => u64::from(DEFAULT_PAGE),
        };
        let page_size = match params.get("page_size") {
            Some(raw) => {
                let size = positive("page_size", raw)?;
                if size > u64::from(MAX_PAGE_SIZE) {
                    return Err(ValidationError::new("page_size", ValidationReason::TooLarge { max: MAX_PAGE_SIZE }));
                }
                size as u32
            }
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            filter,
            page: PageRequest { page, page_size },
            sort: Sort {
                field: choice(params, "sort_by")?,
                direction: choice(params, "sort_dir")?,
            },
        })
    }
}

fn text(params: &HashMap<String, String>, field: &'static str) -> Result<Option<String>, ValidationError> {
    match params.get(field) {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Err(ValidationError::new(field, ValidationReason::Empty))
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
    }
}

fn choice<T: Choice + FromStr>(params: &HashMap<String, String>, field: &'static str) -> Result<T, ValidationError> {
    match params.get(field) {
        None => Ok(T::default()),
        Some(raw) => raw
            .parse()
            .map_err(|_| ValidationError::new(field, ValidationReason::NotAllowed { allowed: T::VARIANTS })),
    }
}

/// Numeric coercion: the trimmed text must be a finite number with no
/// fractional part, so `"3"` and `"3.0"` pass while `"3.5"` and `""` fail.
fn parse_integer(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    let not_integer = || ValidationError::new(field, ValidationReason::NotAnInteger);
    if trimmed.is_empty() {
        return Err(not_integer());
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    let value: f64 = trimmed.parse().map_err(|_| not_integer())?;
    // 2^63 is exactly representable; anything at or beyond it does not fit.
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_223_372_036_854_775_808.0 {
        Ok(value as i64)
    } else {
        Err(not_integer())
    }
}

fn positive(field: &'static str, raw: &str) -> Result<u64, ValidationError> {
    let value = parse_integer(field, raw)?;
    if value > 0 {
        Ok(value as u64)
    } else {
        Err(ValidationError::new(field, ValidationReason::NotPositive))
    }
}
