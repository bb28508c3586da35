//! Vagueness classification.
//!
//! A "vague" entry names only a broad area or directional qualifier
//! ("northeastern Mindanao", "rest of Central Luzon") rather than a specific
//! administrative unit. Vague entries are kept intact, never decomposed.
//!
//! The keyword set and word-count cutoff are heuristics; both come from
//! `ParsingConfig` so the worked baseline can be extended without touching
//! code.

use crate::config::ParsingConfig;
use crate::gazetteer::{contains_word, normalize_name, LocationIndex};
use crate::locations::tokenizer::split_parenthetical;

const ISLAND_GROUP_WORDS: [&str; 3] = ["luzon", "visayas", "mindanao"];

/// Classify a raw token. A token carrying enumerated sub-locations is always
/// specific, regardless of qualifier wording.
pub fn is_vague(token: &str, index: &LocationIndex, config: &ParsingConfig) -> bool {
    let (main, sub_locations) = split_parenthetical(token);
    if !sub_locations.is_empty() {
        return false;
    }
    phrase_is_vague(&main, index, config)
}

/// Classify a main phrase that has already been stripped of parentheses.
/// Rules apply in order, short-circuiting on the first hit.
pub(crate) fn phrase_is_vague(
    phrase: &str,
    index: &LocationIndex,
    config: &ParsingConfig,
) -> bool {
    let norm = normalize_name(phrase);
    if norm.is_empty() {
        return false;
    }

    let has_group_word = ISLAND_GROUP_WORDS
        .iter()
        .any(|w| contains_word(&norm, w));
    let has_region_ref = has_group_word || index.mentions_named_region(&norm);

    // 1. Vague qualifier + region reference, with no specific place named
    if has_region_ref
        && config
            .vague_keywords
            .iter()
            .any(|kw| contains_word(&norm, &kw.to_lowercase()))
        && !index.has_specific_place(&norm)
    {
        return true;
    }

    // 2. The phrase is an island group or named region by itself
    let bare = norm.strip_prefix("the ").unwrap_or(&norm);
    if ISLAND_GROUP_WORDS.contains(&bare) || index.is_named_region(bare) {
        return true;
    }

    // 3. Short region reference with nothing specific in it
    if norm.split_whitespace().count() <= config.vague_word_count_cutoff
        && has_group_word
        && !index.has_specific_place(&norm)
    {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AdminLevel, GazetteerRecord, IslandGroup};

    fn test_index() -> LocationIndex {
        LocationIndex::new(vec![
            GazetteerRecord {
                name: "Isabela".to_string(),
                level: AdminLevel::Province,
                island_group: IslandGroup::Luzon,
            },
            GazetteerRecord {
                name: "Quezon".to_string(),
                level: AdminLevel::Province,
                island_group: IslandGroup::Luzon,
            },
            GazetteerRecord {
                name: "Cebu".to_string(),
                level: AdminLevel::Province,
                island_group: IslandGroup::Visayas,
            },
        ])
    }

    #[test]
    fn test_directional_island_group_reference_is_vague() {
        let index = test_index();
        let config = ParsingConfig::default();
        assert!(is_vague("northeastern Mindanao", &index, &config));
        assert!(is_vague("most of Luzon", &index, &config));
        assert!(is_vague("the rest of mainland Luzon", &index, &config));
    }

    #[test]
    fn test_named_region_alone_is_vague() {
        let index = test_index();
        let config = ParsingConfig::default();
        assert!(is_vague("Eastern Visayas", &index, &config));
        assert!(is_vague("Luzon", &index, &config));
        assert!(is_vague("the Visayas", &index, &config));
    }

    #[test]
    fn test_sub_locations_override_qualifier_wording() {
        let index = test_index();
        let config = ParsingConfig::default();
        assert!(!is_vague("Isabela (Santo Tomas, Quezon)", &index, &config));
        assert!(!is_vague(
            "the northwestern portion of Isabela (Santo Tomas, Santa Maria)",
            &index,
            &config
        ));
    }

    #[test]
    fn test_specific_place_names_are_not_vague() {
        let index = test_index();
        let config = ParsingConfig::default();
        assert!(!is_vague("Isabela", &index, &config));
        assert!(!is_vague("Cebu", &index, &config));
        // Qualifier plus a recognized province stays specific
        assert!(!is_vague("northern Cebu", &index, &config));
    }

    #[test]
    fn test_short_region_reference_is_vague() {
        let index = test_index();
        let config = ParsingConfig::default();
        // No configured qualifier word, but short and clearly regional
        assert!(is_vague("areas of Mindanao", &index, &config));
        // Over the cutoff the rule no longer fires
        assert!(!is_vague(
            "the many scattered outlying areas of Mindanao today",
            &index,
            &config
        ));
    }
}
