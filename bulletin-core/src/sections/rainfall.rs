//! Rainfall hazard paragraph parsing.
//!
//! A hazard paragraph strings several intensity clauses together:
//!
//!   "Heavy with at times intense rainfall over Cagayan and Isabela.
//!    Moderate to heavy rainfall over the rest of Cagayan Valley."
//!
//! Clauses are cut at the configured intensity markers, the location span of
//! each clause starts after its governing "over"/"over the" preposition, and
//! the span is handed to the free-text scanner — never the structured list
//! parser, since these spans are prose.

use crate::config::ParsingConfig;
use crate::gazetteer::LocationIndex;
use crate::locations::scanner::extract_locations_in_text;
use crate::types::{IslandGroup, IslandGroupBucket};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static OVER_PREPOSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bover\s+(?:the\s+)?").unwrap());

// A sentence terminator or a 2+ whitespace run (column break in the source
// layout) ends the location span
static SPAN_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]|\s{2,}").unwrap());

/// Parse one hazard paragraph into per-intensity, per-island-group buckets.
/// Index 0 holds level 1 (red), index 2 holds level 3 (yellow). Results for
/// the same level are unioned across clauses.
pub fn parse_rainfall_section(
    text: &str,
    index: &LocationIndex,
    config: &ParsingConfig,
) -> [IslandGroupBucket; 3] {
    let haystack = text.to_ascii_lowercase();

    // Cut the paragraph into (marker position, level) clauses. At each scan
    // position the earliest marker occurrence wins; ties go to the marker
    // listed first, which is why compound phrases precede their prefixes in
    // the config.
    let mut clause_starts: Vec<(usize, u8)> = Vec::new();
    let mut pos = 0;
    while pos < haystack.len() {
        let mut earliest: Option<(usize, usize, u8)> = None;
        for marker in &config.rainfall_markers {
            let phrase = marker.phrase.to_ascii_lowercase();
            if let Some(rel) = haystack[pos..].find(&phrase) {
                let start = pos + rel;
                let is_better = earliest.map(|(s, _, _)| start < s).unwrap_or(true);
                if is_better {
                    earliest = Some((start, phrase.len(), marker.level));
                }
            }
        }
        match earliest {
            Some((start, len, level)) => {
                clause_starts.push((start, level));
                pos = start + len;
            }
            None => break,
        }
    }

    let mut per_level: [BTreeMap<IslandGroup, Vec<String>>; 3] = Default::default();
    for (i, (start, level)) in clause_starts.iter().enumerate() {
        let clause_end = clause_starts
            .get(i + 1)
            .map(|next| next.0)
            .unwrap_or(text.len());
        let clause = &text[*start..clause_end];

        let Some(span) = location_span(clause) else {
            continue;
        };

        let found = extract_locations_in_text(span, index);
        let lists = &mut per_level[(*level - 1) as usize];
        for (group, names) in found {
            let entry = lists.entry(group).or_default();
            for name in names {
                if !entry.contains(&name) {
                    entry.push(name);
                }
            }
        }
    }

    std::array::from_fn(|i| {
        let mut bucket = IslandGroupBucket::default();
        for (group, names) in &per_level[i] {
            bucket.set(*group, Some(names.join(", ")));
        }
        bucket
    })
}

/// The location span of a clause: after "over"/"over the", up to the first
/// sentence terminator or whitespace-run column break.
fn location_span(clause: &str) -> Option<&str> {
    let start = OVER_PREPOSITION.find(clause)?.end();
    let rest = &clause[start..];
    let end = SPAN_END.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    let span = rest[..end].trim();
    (!span.is_empty()).then_some(span)
}
