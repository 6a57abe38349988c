//! Filter state carried by the client and its query-string form.

use url::form_urlencoded;

use crate::query::{OpenState, SortDirection, SortField};

/// Dashboard filter state. `None` and blank fields are left off the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub chain_name: Option<String>,
    pub dma: Option<i64>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub is_open: Option<OpenState>,
    pub page: Option<u64>,
    pub page_size: Option<u32>,
    pub sort_by: Option<SortField>,
    pub sort_dir: Option<SortDirection>,
}

impl Filters {
    /// Percent-encoded query string, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            out.append_pair(key, &value);
        }
        out.finish()
    }

    /// The same filters with paging and sorting removed, as the summary endpoint takes them.
    pub fn summary_filters(&self) -> Self {
        Self {
            page: None,
            page_size: None,
            sort_by: None,
            sort_dir: None,
            ..self.clone()
        }
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(value) = value {
                pairs.push((key, value));
            }
        };

        push("chain_name", non_blank(&self.chain_name));
        push("dma", self.dma.map(|d| d.to_string()));
        push("category", non_blank(&self.category));
        push("city", non_blank(&self.city));
        push("state", non_blank(&self.state));
        push("is_open", self.is_open.map(|o| o.as_str().to_string()));
        push("page", self.page.map(|p| p.to_string()));
        push("page_size", self.page_size.map(|s| s.to_string()));
        push("sort_by", self.sort_by.map(|f| f.as_str().to_string()));
        push("sort_dir", self.sort_dir.map(|d| d.as_str().to_string()));
        pairs
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}
