//! CSV row shape and its coerced database form.

use serde::Deserialize;

use super::coerce::{coerce_foot_traffic, coerce_integer, coerce_number, coerce_text};

/// One CSV record as read, every cell kept as text. Missing columns are `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CsvVenue {
    pub entity_id: Option<String>,
    pub entity_type: Option<String>,
    pub name: Option<String>,
    pub foot_traffic: Option<String>,
    pub sales: Option<String>,
    pub avg_dwell_time_min: Option<String>,
    pub area_sqft: Option<String>,
    pub ft_per_sqft: Option<String>,
    pub geolocation: Option<String>,
    pub country: Option<String>,
    pub state_code: Option<String>,
    pub state_name: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub formatted_city: Option<String>,
    pub street_address: Option<String>,
    pub sub_category: Option<String>,
    pub dma: Option<String>,
    pub cbsa: Option<String>,
    pub chain_id: Option<String>,
    pub chain_name: Option<String>,
    pub store_id: Option<String>,
    pub date_opened: Option<String>,
    pub date_closed: Option<String>,
}

/// A venue ready for insertion into the `venues` table.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueRow {
    pub entity_id: String,
    pub entity_type: String,
    pub name: String,
    pub foot_traffic: i64,
    pub sales: Option<f64>,
    pub avg_dwell_time_min: Option<f64>,
    pub area_sqft: Option<f64>,
    pub ft_per_sqft: Option<f64>,
    pub geolocation: Option<String>,
    pub country: Option<String>,
    pub state_code: Option<String>,
    pub state_name: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub formatted_city: Option<String>,
    pub street_address: Option<String>,
    pub sub_category: Option<String>,
    pub dma: Option<i64>,
    pub cbsa: Option<i64>,
    pub chain_id: Option<String>,
    pub chain_name: Option<String>,
    pub store_id: Option<String>,
    pub date_opened: Option<String>,
    pub date_closed: Option<String>,
}

impl VenueRow {
    /// Coerce a raw record. Returns `None` when `entity_id` or `name` is blank.
    pub fn from_csv(raw: &CsvVenue) -> Option<Self> {
        let text = |v: &Option<String>| coerce_text(v.as_deref());
        let number = |v: &Option<String>| coerce_number(v.as_deref());
        let integer = |v: &Option<String>| coerce_integer(v.as_deref());

        Some(Self {
            entity_id: text(&raw.entity_id)?,
            name: text(&raw.name)?,
            entity_type: text(&raw.entity_type).unwrap_or_else(|| "venue".to_string()),
            foot_traffic: coerce_foot_traffic(raw.foot_traffic.as_deref()),
            sales: number(&raw.sales),
            avg_dwell_time_min: number(&raw.avg_dwell_time_min),
            area_sqft: number(&raw.area_sqft),
            ft_per_sqft: number(&raw.ft_per_sqft),
            geolocation: text(&raw.geolocation),
            country: text(&raw.country),
            state_code: text(&raw.state_code),
            state_name: text(&raw.state_name),
            city: text(&raw.city),
            postal_code: text(&raw.postal_code),
            formatted_city: text(&raw.formatted_city),
            street_address: text(&raw.street_address),
            sub_category: text(&raw.sub_category),
            dma: integer(&raw.dma),
            cbsa: integer(&raw.cbsa),
            chain_id: text(&raw.chain_id),
            chain_name: text(&raw.chain_name),
            store_id: text(&raw.store_id),
            date_opened: text(&raw.date_opened),
            date_closed: text(&raw.date_closed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, name: &str) -> CsvVenue {
        CsvVenue {
            entity_id: Some(id.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_id_or_name_is_rejected() {
        assert!(VenueRow::from_csv(&raw("", "Walmart Supercenter")).is_none());
        assert!(VenueRow::from_csv(&raw("v1", "  ")).is_none());
        assert!(VenueRow::from_csv(&CsvVenue::default()).is_none());
    }

    #[test]
    fn test_defaults_fill_type_and_traffic() {
        let row = VenueRow::from_csv(&raw(" v1 ", "Target")).unwrap();
        assert_eq!(row.entity_id, "v1");
        assert_eq!(row.entity_type, "venue");
        assert_eq!(row.foot_traffic, 0);
        assert_eq!(row.dma, None);
        assert_eq!(row.date_closed, None);
    }

    #[test]
    fn test_numeric_columns_are_coerced() {
        let row = VenueRow::from_csv(&CsvVenue {
            dma: Some("618.0".into()),
            sales: Some("12,000".into()),
            foot_traffic: Some("1500.9".into()),
            area_sqft: Some("180000".into()),
            ..raw("v2", "Costco")
        })
        .unwrap();
        assert_eq!(row.dma, Some(618));
        assert_eq!(row.sales, None);
        assert_eq!(row.foot_traffic, 1500);
        assert_eq!(row.area_sqft, Some(180000.0));
    }
}
