//! Keyword search: free text mapped onto filter fields by a fixed rule table.
//!
//! Rules are checked in order against the lowercased question and every
//! match is applied, so a later rule overrides an earlier one that sets the
//! same field. Nothing here is part of the API contract.

use super::filters::Filters;
use crate::query::{OpenState, SortDirection, SortField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    Chain(&'static str),
    Open(OpenState),
    State(&'static str),
    Sort(SortField, SortDirection),
}

struct Rule {
    needle: &'static str,
    effect: Effect,
}

const fn rule(needle: &'static str, effect: Effect) -> Rule {
    Rule { needle, effect }
}

const RULES: &[Rule] = &[
    rule("walmart", Effect::Chain("Walmart")),
    rule("target", Effect::Chain("Target")),
    rule("costco", Effect::Chain("Costco")),
    rule("home depot", Effect::Chain("The Home Depot")),
    rule("lowe's", Effect::Chain("Lowe's")),
    rule("lowes", Effect::Chain("Lowe's")),
    rule("open", Effect::Open(OpenState::Open)),
    rule("closed", Effect::Open(OpenState::Closed)),
    rule("texas", Effect::State("TX")),
    rule("california", Effect::State("CA")),
    rule("new york", Effect::State("NY")),
    rule("florida", Effect::State("FL")),
    rule("high foot traffic", Effect::Sort(SortField::FootTraffic, SortDirection::Desc)),
    rule("busiest", Effect::Sort(SortField::FootTraffic, SortDirection::Desc)),
    rule("low foot traffic", Effect::Sort(SortField::FootTraffic, SortDirection::Asc)),
    rule("quietest", Effect::Sort(SortField::FootTraffic, SortDirection::Asc)),
    rule("alphabetical", Effect::Sort(SortField::Name, SortDirection::Asc)),
];

/// Apply every matching rule to `base` and reset to the first page.
pub fn interpret(question: &str, base: &Filters) -> Filters {
    let question = question.to_lowercase();
    let mut filters = base.clone();

    for rule in RULES.iter().filter(|r| question.contains(r.needle)) {
        match rule.effect {
            Effect::Chain(chain) => filters.chain_name = Some(chain.to_string()),
            Effect::Open(state) => filters.is_open = Some(state),
            Effect::State(code) => filters.state = Some(code.to_string()),
            Effect::Sort(field, direction) => {
                filters.sort_by = Some(field);
                filters.sort_dir = Some(direction);
            }
        }
    }

    filters.page = Some(1);
    filters
}
