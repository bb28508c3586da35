//! Island group resolution.

use crate::config::ParsingConfig;
use crate::gazetteer::{normalize_name, LocationIndex};
use crate::types::IslandGroup;

/// Resolve a main phrase to its island group.
///
/// Vague phrases are resolved only through the configured exact-phrase table
/// (bare island-group names by default); everything else vague lands in
/// `Other` so broad references never pollute a concrete group's bucket.
/// Specific phrases go through the gazetteer; unknown names are kept verbatim
/// by the caller and bucketed as `Other`, never dropped.
pub fn resolve_island_group(
    main_location: &str,
    is_vague: bool,
    index: &LocationIndex,
    config: &ParsingConfig,
) -> IslandGroup {
    if is_vague {
        let norm = normalize_name(main_location);
        return config
            .vague_group_phrases
            .get(&norm)
            .copied()
            .unwrap_or(IslandGroup::Other);
    }

    index
        .lookup_island_group(main_location)
        .unwrap_or(IslandGroup::Other)
}
