//! Free-text location scanning.
//!
//! The independent engine for narrative text. It only ever emits names the
//! gazetteer knows; prose that matches nothing produces nothing. This is the
//! designed replacement for the legacy behavior of running the structured
//! list parser over sentences, which extracted entire sentence fragments as
//! "locations".

use crate::gazetteer::LocationIndex;
use crate::types::IslandGroup;
use std::collections::BTreeMap;

/// Scan arbitrary prose for gazetteer names and bucket them by island group.
///
/// Matching is case-insensitive, word-bounded, and longest-match-wins at each
/// position ("Quezon City" is never reported as "Quezon"). Emitted strings
/// are the gazetteer's lower-cased keys, in first-seen order per bucket, with
/// exact repeats deduplicated. No comma or parenthesis segmentation happens
/// here; callers with clean enumerations should use
/// [`parse_location_list`](crate::locations::list_parser::parse_location_list)
/// instead. The two entry points never delegate to each other.
pub fn extract_locations_in_text(
    text: &str,
    index: &LocationIndex,
) -> BTreeMap<IslandGroup, Vec<String>> {
    let haystack = text.to_lowercase();

    // Collect every word-bounded occurrence of every known name
    let mut matches: Vec<(usize, usize, &str)> = Vec::new();
    for name in index.names_by_length() {
        let mut from = 0;
        while let Some(rel) = haystack[from..].find(name.as_str()) {
            let start = from + rel;
            let end = start + name.len();
            if word_bounded(&haystack, start, end) {
                matches.push((start, end, name));
            }
            // Advance one whole character so the next slice stays on a boundary
            let step = haystack[start..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            from = start + step;
        }
    }

    // Longest match wins at each position; later overlapping matches drop out
    matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1)));

    let mut buckets: BTreeMap<IslandGroup, Vec<String>> = BTreeMap::new();
    let mut covered_until = 0;
    for (start, end, name) in matches {
        if start < covered_until {
            continue;
        }
        covered_until = end;

        let group = index
            .lookup_island_group(name)
            .unwrap_or(IslandGroup::Other);
        let bucket = buckets.entry(group).or_default();
        if !bucket.iter().any(|n| n == name) {
            bucket.push(name.to_string());
        }
    }

    buckets
}

fn word_bounded(haystack: &str, start: usize, end: usize) -> bool {
    let before_ok = haystack[..start]
        .chars()
        .next_back()
        .map(|c| !c.is_alphanumeric())
        .unwrap_or(true);
    let after_ok = haystack[end..]
        .chars()
        .next()
        .map(|c| !c.is_alphanumeric())
        .unwrap_or(true);
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AdminLevel, GazetteerRecord};

    fn test_index() -> LocationIndex {
        let records = [
            ("Batanes", AdminLevel::Province, IslandGroup::Luzon),
            ("Cagayan", AdminLevel::Province, IslandGroup::Luzon),
            ("Apayao", AdminLevel::Province, IslandGroup::Luzon),
            ("Quezon", AdminLevel::Province, IslandGroup::Luzon),
            ("Quezon City", AdminLevel::City, IslandGroup::Luzon),
            ("Cebu", AdminLevel::Province, IslandGroup::Visayas),
            ("Surigao del Norte", AdminLevel::Province, IslandGroup::Mindanao),
        ];
        LocationIndex::new(
            records
                .iter()
                .map(|(name, level, group)| GazetteerRecord {
                    name: name.to_string(),
                    level: *level,
                    island_group: *group,
                })
                .collect(),
        )
    }

    #[test]
    fn test_prose_yields_only_gazetteer_names() {
        // Regression guard: the legacy parser extracted this whole sentence
        // as one "location with parentheses". The scanner must emit only the
        // three provinces.
        let index = test_index();
        let text = "areas under tropical cyclone wind signal (tcws) #1 may experience \
                    occasional gusts in the next 36 hours. Batanes, Cagayan, Apayao.";
        let buckets = extract_locations_in_text(text, &index);
        assert_eq!(buckets.len(), 1);
        assert_eq!(
            buckets.get(&IslandGroup::Luzon).unwrap(),
            &vec!["batanes".to_string(), "cagayan".to_string(), "apayao".to_string()]
        );
    }

    #[test]
    fn test_longest_match_wins() {
        let index = test_index();
        let buckets =
            extract_locations_in_text("flooding reported in Quezon City overnight", &index);
        assert_eq!(
            buckets.get(&IslandGroup::Luzon).unwrap(),
            &vec!["quezon city".to_string()]
        );
    }

    #[test]
    fn test_word_boundaries_respected() {
        let index = test_index();
        // "Cebuano" must not match "Cebu"
        let buckets = extract_locations_in_text("Cebuano speakers abound", &index);
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_repeats_deduplicated_within_bucket() {
        let index = test_index();
        let buckets = extract_locations_in_text("Cebu, and again Cebu, and also Cebu", &index);
        assert_eq!(
            buckets.get(&IslandGroup::Visayas).unwrap(),
            &vec!["cebu".to_string()]
        );
    }

    #[test]
    fn test_buckets_span_island_groups() {
        let index = test_index();
        let buckets = extract_locations_in_text(
            "heavy rainfall over Cagayan, Cebu, and Surigao del Norte",
            &index,
        );
        assert_eq!(buckets.len(), 3);
        assert_eq!(
            buckets.get(&IslandGroup::Mindanao).unwrap(),
            &vec!["surigao del norte".to_string()]
        );
    }

    #[test]
    fn test_idempotent_over_serialized_buckets() {
        let index = test_index();
        let first = extract_locations_in_text(
            "signal no. 1 over Batanes, Cagayan, Quezon City, and Cebu",
            &index,
        );
        // Re-run the scanner over each bucket's joined string; the assignment
        // must not change
        for (group, names) in &first {
            let rerun = extract_locations_in_text(&names.join(", "), &index);
            assert_eq!(rerun.len(), 1);
            assert_eq!(rerun.get(group).unwrap(), names);
        }
    }
}
