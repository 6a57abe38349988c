//! Plain-text rendering of dashboard data for the terminal.

use std::fmt::Write as _;

use super::dma::dma_label;
use super::pagination::{PageItem, page_count, page_window};
use crate::constants::PAGE_WINDOW_RADIUS;
use crate::domain::{VenuePage, VenueRecord, VenueSummary};

const HEADERS: [&str; 8] = ["Name", "Chain Name", "Category", "DMA", "City", "State", "Visits", "Open"];

/// `1234567` → `"1,234,567"`.
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Totals line shown above the table.
pub fn summary_strip(summary: &VenueSummary) -> String {
    format!(
        "Total Venues: {}    Total Foot Traffic: {}",
        thousands(i64::try_from(summary.total_venues).unwrap_or(i64::MAX)),
        thousands(summary.total_foot_traffic)
    )
}

fn cells(venue: &VenueRecord) -> [String; 8] {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    [
        venue.name.clone(),
        text(&venue.chain_name),
        text(&venue.category),
        dma_label(venue.dma),
        text(&venue.city),
        text(&venue.state),
        thousands(venue.visits),
        if venue.is_open { "Open" } else { "Closed" }.to_string(),
    ]
}

/// Fixed-width table of venues, or `No results` when the page is empty.
pub fn venue_table(items: &[VenueRecord]) -> String {
    let rows: Vec<[String; 8]> = items.iter().map(cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    if rows.is_empty() {
        out.push_str("No results\n");
    }
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, row: &[String; 8], widths: &[usize; 8]) {
    let padded: Vec<String> = row
        .iter()
        .zip(widths.iter().copied())
        .enumerate()
        // Visits column is right aligned.
        .map(|(i, (cell, w))| if i == 6 { format!("{cell:>w$}") } else { format!("{cell:<w$}") })
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

/// Pagination line, e.g. `« Previous 1 … 4 5 [6] 7 8 … 20 Next »`.
pub fn pagination_line(page: u64, page_size: u32, total_count: u64) -> String {
    let total_pages = page_count(total_count, page_size);
    let mut parts = vec!["« Previous".to_string()];
    parts.extend(page_window(page, total_pages, u64::from(PAGE_WINDOW_RADIUS)).into_iter().map(|item| match item {
        PageItem::Page(p) if p == page => format!("[{p}]"),
        PageItem::Page(p) => p.to_string(),
        PageItem::Ellipsis => "…".to_string(),
    }));
    parts.push("Next »".to_string());
    parts.join(" ")
}

/// Summary strip, table and pagination line for one dashboard view.
pub fn dashboard(summary: &VenueSummary, page: &VenuePage) -> String {
    format!(
        "{}\n\n{}\n{}\n",
        summary_strip(summary),
        venue_table(&page.items),
        pagination_line(page.page, page.page_size, page.total_count)
    )
}
