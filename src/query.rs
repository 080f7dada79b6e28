//! Filter state for the list page and navigation-parameter extraction for
//! the detail page.

use std::collections::BTreeSet;

use percent_encoding::percent_decode_str;

use crate::models::ProblemSummary;

/// Current filter inputs. Owned by the list page's event handlers; every
/// mutation goes through [`QueryState::apply`] and is followed by a full
/// recomputation of the visible rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub term: String,
    pub tag: String,
}

#[derive(Debug, Clone)]
pub enum QueryEvent {
    TermChanged(String),
    TagSelected(String),
}

impl QueryState {
    pub fn apply(self, event: QueryEvent) -> Self {
        match event {
            QueryEvent::TermChanged(term) => Self { term, ..self },
            QueryEvent::TagSelected(tag) => Self { tag, ..self },
        }
    }

}

fn matches(summary: &ProblemSummary, term: &str, tag: &str) -> bool {
    let hit_text = term.is_empty()
        || summary.title.to_lowercase().contains(term)
        || summary.id.to_lowercase().contains(term);
    let hit_tag = tag.is_empty() || summary.tags.iter().any(|candidate| candidate == tag);
    hit_text && hit_tag
}

/// Selects the rows visible under `state`, preserving the list's order.
pub fn filter_summaries<'a>(
    list: &'a [ProblemSummary],
    state: &QueryState,
) -> Vec<&'a ProblemSummary> {
    let term = state.term.to_lowercase();
    list.iter()
        .filter(|summary| matches(summary, &term, &state.tag))
        .collect()
}

/// Every tag appearing in at least one summary, deduplicated and sorted
/// ascending. Computed once from the full unfiltered list.
pub fn tag_vocabulary(list: &[ProblemSummary]) -> Vec<String> {
    let mut unique = BTreeSet::new();
    for summary in list {
        for tag in &summary.tags {
            if !tag.trim().is_empty() {
                unique.insert(tag.clone());
            }
        }
    }
    unique.into_iter().collect()
}

/// Extracts a query parameter from a `location.search` string.
///
/// Values are percent-decoded; a missing key, missing value, or undecodable
/// value yields the empty string.
pub fn query_param(search: &str, key: &str) -> String {
    for pair in search.trim_start_matches('?').split('&') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        if name == key {
            return percent_decode_str(value)
                .decode_utf8()
                .map(|decoded| decoded.into_owned())
                .unwrap_or_default();
        }
    }
    String::new()
}
