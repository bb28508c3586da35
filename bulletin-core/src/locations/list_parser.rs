//! Structured location-list parsing.

use crate::config::ParsingConfig;
use crate::gazetteer::LocationIndex;
use crate::locations::dedup::Deduplicator;
use crate::locations::resolver::resolve_island_group;
use crate::locations::tokenizer::{split_parenthetical, tokenize};
use crate::locations::vagueness::phrase_is_vague;
use crate::types::LocationEntity;

/// Parse a clean, comma-delimited location enumeration into classified
/// entities, in first-seen order.
///
/// CONTRACT: `text` must be a known location enumeration, optionally with
/// parenthetical sub-locations — never arbitrary prose. Callers that have
/// narrative text (hazard paragraphs, table descriptions) must use
/// [`extract_locations_in_text`](crate::locations::scanner::extract_locations_in_text)
/// instead; this function does not detect prose and will happily classify a
/// sentence fragment as a location named "Other". The two entry points never
/// delegate to each other.
pub fn parse_location_list(
    text: &str,
    index: &LocationIndex,
    config: &ParsingConfig,
) -> Vec<LocationEntity> {
    let mut dedup = Deduplicator::new();
    let mut entities = Vec::new();

    for token in tokenize(text) {
        if token.is_empty() {
            continue;
        }
        let (main_location, sub_locations) = split_parenthetical(&token);
        if main_location.is_empty() && sub_locations.is_empty() {
            continue;
        }

        // Enumerated sub-locations make the entry specific regardless of
        // qualifier wording
        let is_vague = if sub_locations.is_empty() {
            phrase_is_vague(&main_location, index, config)
        } else {
            false
        };
        let island_group = resolve_island_group(&main_location, is_vague, index, config);

        let entity = LocationEntity {
            raw_text: token.clone(),
            main_location,
            sub_locations,
            island_group,
            is_vague,
        };
        if dedup.accept(&entity) {
            entities.push(entity);
        }
    }

    entities
}
