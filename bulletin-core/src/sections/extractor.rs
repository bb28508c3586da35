//! Bulletin section boundary detection.
//!
//! A single left-to-right pass over header anchors: each recognized section's
//! content runs from its anchor to the next recognized anchor (or end of
//! document). A missing header is a missing field, not an error.

use crate::config::ParsingConfig;
use crate::types::SectionKind;
use std::collections::HashMap;

/// Section contents keyed by section kind. Absent sections are simply not
/// present; callers surface that as a missing-field condition.
#[derive(Debug, Default)]
pub struct SectionMap {
    sections: HashMap<SectionKind, String>,
}

impl SectionMap {
    pub fn get(&self, kind: SectionKind) -> Option<&str> {
        self.sections.get(&kind).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Locate every configured section in the bulletin text.
///
/// Anchors match case-insensitively; each section uses the earliest
/// occurrence among its alias anchors. The anchor list is an ordered
/// dispatch table, so adding a section is a config change, not a new branch.
pub fn locate_sections(text: &str, config: &ParsingConfig) -> SectionMap {
    // ASCII lowering keeps byte offsets identical to the original text
    let haystack = text.to_ascii_lowercase();

    let mut found: Vec<(usize, usize, SectionKind)> = Vec::new();
    for anchor_set in &config.section_anchors {
        let mut best: Option<(usize, usize)> = None;
        for anchor in &anchor_set.anchors {
            let needle = anchor.to_ascii_lowercase();
            if let Some(start) = haystack.find(&needle) {
                let candidate = (start, start + needle.len());
                if best.map(|b| candidate.0 < b.0).unwrap_or(true) {
                    best = Some(candidate);
                }
            }
        }
        if let Some((start, end)) = best {
            found.push((start, end, anchor_set.section));
        }
    }
    found.sort_by_key(|entry| entry.0);

    let mut sections = HashMap::new();
    for (i, (_, anchor_end, kind)) in found.iter().enumerate() {
        let content_end = found
            .get(i + 1)
            .map(|next| next.0.max(*anchor_end))
            .unwrap_or(text.len());
        let content = text[*anchor_end..content_end]
            .trim_start_matches([':', ' ', '\t'])
            .trim();
        sections.insert(*kind, content.to_string());
    }

    SectionMap { sections }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Issued at 11:00 AM, 04 December 2025

Location of Center
The center of the typhoon was estimated 125 km East of Virac, Catanduanes.

Present Movement
West northwestward at 15 km/h

Intensity
Maximum sustained winds of 120 km/h near the center

TROPICAL CYCLONE WIND SIGNALS
1 Batanes - - Babuyan Islands

HAZARDS AFFECTING LAND AREAS
Heavy rainfall over Cagayan.
";

    #[test]
    fn test_all_sections_found() {
        let config = ParsingConfig::default();
        let sections = locate_sections(SAMPLE, &config);
        assert_eq!(sections.len(), 6);
        assert!(sections
            .get(SectionKind::IssuedAt)
            .unwrap()
            .starts_with("11:00 AM, 04 December 2025"));
        assert!(sections
            .get(SectionKind::LocationOfCenter)
            .unwrap()
            .contains("Virac"));
        assert!(sections
            .get(SectionKind::WindSignals)
            .unwrap()
            .contains("Batanes"));
        assert!(sections
            .get(SectionKind::Hazards)
            .unwrap()
            .contains("Heavy rainfall"));
    }

    #[test]
    fn test_content_stops_at_next_header() {
        let config = ParsingConfig::default();
        let sections = locate_sections(SAMPLE, &config);
        let movement = sections.get(SectionKind::PresentMovement).unwrap();
        assert!(movement.contains("West northwestward"));
        assert!(!movement.contains("Maximum sustained"));
    }

    #[test]
    fn test_missing_header_is_absent_not_fatal() {
        let config = ParsingConfig::default();
        let sections = locate_sections("Present Movement\nWestward at 10 km/h\n", &config);
        assert_eq!(sections.get(SectionKind::IssuedAt), None);
        assert_eq!(sections.get(SectionKind::WindSignals), None);
        assert!(sections
            .get(SectionKind::PresentMovement)
            .unwrap()
            .contains("Westward"));
    }

    #[test]
    fn test_anchor_aliases_match() {
        let config = ParsingConfig::default();
        let sections = locate_sections("TCWS\n1 Batanes\n", &config);
        assert!(sections
            .get(SectionKind::WindSignals)
            .unwrap()
            .contains("Batanes"));
    }

    #[test]
    fn test_anchor_match_is_case_insensitive() {
        let config = ParsingConfig::default();
        let sections = locate_sections("issued AT 5:00 PM, 01 June 2024\n", &config);
        assert!(sections
            .get(SectionKind::IssuedAt)
            .unwrap()
            .starts_with("5:00 PM"));
    }
}
