//! SQLite schema for the venue database.
//!
//! `venues` mirrors the CSV snapshot column for column. `venues_view` is the
//! projection every runtime query reads; `is_open` is derived from
//! `date_closed` there and nowhere else.

/// Full schema, applied by the ingestion script to a fresh database file.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS venues (
    entity_id           TEXT PRIMARY KEY NOT NULL,
    entity_type         TEXT NOT NULL DEFAULT 'venue',
    name                TEXT NOT NULL,
    foot_traffic        INTEGER NOT NULL DEFAULT 0 CHECK (foot_traffic >= 0),
    sales               REAL,
    avg_dwell_time_min  REAL,
    area_sqft           REAL,
    ft_per_sqft         REAL,
    geolocation         TEXT,
    country             TEXT,
    state_code          TEXT,
    state_name          TEXT,
    city                TEXT,
    postal_code         TEXT,
    formatted_city      TEXT,
    street_address      TEXT,
    sub_category        TEXT,
    dma                 INTEGER,
    cbsa                INTEGER,
    chain_id            TEXT,
    chain_name          TEXT,
    store_id            TEXT,
    date_opened         TEXT,
    date_closed         TEXT
);

CREATE INDEX IF NOT EXISTS idx_venues_chain_name ON venues (chain_name);
CREATE INDEX IF NOT EXISTS idx_venues_dma ON venues (dma);
CREATE INDEX IF NOT EXISTS idx_venues_sub_category ON venues (sub_category);
CREATE INDEX IF NOT EXISTS idx_venues_state_code ON venues (state_code);

CREATE VIEW IF NOT EXISTS venues_view AS
SELECT
    entity_id,
    name,
    chain_name,
    sub_category AS category,
    dma,
    city,
    state_code AS state,
    foot_traffic AS visits,
    CASE WHEN date_closed IS NULL THEN 1 ELSE 0 END AS is_open
FROM venues;
"#;

/// Columns of `venues_view`, in the order list queries select them.
pub const VIEW_COLUMNS: &str = "entity_id, name, chain_name, category, dma, city, state, visits, is_open";

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::*;

    #[test]
    fn test_view_derives_open_from_closure_date() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA_SQL).unwrap();
        conn.execute_batch(
            "INSERT INTO venues (entity_id, name, foot_traffic, date_closed) VALUES ('a', 'Alpha', 10, NULL);
             INSERT INTO venues (entity_id, name, foot_traffic, date_closed) VALUES ('b', 'Beta', 20, '2022-03-01');",
        )
        .unwrap();

        let mut stmt = conn.prepare("SELECT entity_id, is_open FROM venues_view ORDER BY entity_id").unwrap();
        let rows: Vec<(String, i64)> =
            stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?))).unwrap().collect::<Result<_, _>>().unwrap();

        assert_eq!(rows, vec![("a".to_string(), 1), ("b".to_string(), 0)]);
    }

    #[test]
    fn test_negative_foot_traffic_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA_SQL).unwrap();
        let result = conn.execute("INSERT INTO venues (entity_id, name, foot_traffic) VALUES ('x', 'X', -1)", []);
        assert!(result.is_err());
    }
}
