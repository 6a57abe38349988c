//! Windowed page-number display.

/// One slot in the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u64),
    Ellipsis,
}

/// Number of pages for `total_count` items. Never less than one.
pub fn page_count(total_count: u64, page_size: u32) -> u64 {
    let size = u64::from(page_size.max(1));
    total_count.div_ceil(size).max(1)
}

/// Pages around `current`, plus the first and last page, with an ellipsis
/// wherever two or more pages are hidden. A single hidden page is shown
/// instead of being replaced by an ellipsis.
pub fn page_window(current: u64, total_pages: u64, radius: u64) -> Vec<PageItem> {
    let total = total_pages.max(1);
    let current = current.clamp(1, total);
    let start = current.saturating_sub(radius).max(1);
    let end = current.saturating_add(radius).min(total);

    let mut items = Vec::new();
    if start > 1 {
        items.push(PageItem::Page(1));
        match start - 1 {
            1 => {}
            2 => items.push(PageItem::Page(2)),
            _ => items.push(PageItem::Ellipsis),
        }
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total {
        match total - end {
            1 => {}
            2 => items.push(PageItem::Page(total - 1)),
            _ => items.push(PageItem::Ellipsis),
        }
        items.push(PageItem::Page(total));
    }
    items
}
