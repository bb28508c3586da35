//! Duplicate suppression within one parse call.

use crate::gazetteer::normalize_name;
use crate::types::{IslandGroup, LocationEntity};
use std::collections::HashSet;

/// Tracks `(normalized main location, island group)` pairs already emitted in
/// the current parse call. Same name in different island groups is kept —
/// "Quezon" the Luzon province and a "Quezon" municipality elsewhere are
/// distinct entries.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<(String, IslandGroup)>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the entity if its `(main location, group)` pair has not been
    /// seen yet; record and return true, or reject with false.
    pub fn accept(&mut self, entity: &LocationEntity) -> bool {
        let key = (normalize_name(&entity.main_location), entity.island_group);
        self.seen.insert(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(main: &str, group: IslandGroup) -> LocationEntity {
        LocationEntity {
            raw_text: main.to_string(),
            main_location: main.to_string(),
            sub_locations: Vec::new(),
            island_group: group,
            is_vague: false,
        }
    }

    #[test]
    fn test_identical_pairs_collapse() {
        let mut dedup = Deduplicator::new();
        assert!(dedup.accept(&entity("Quezon", IslandGroup::Luzon)));
        assert!(!dedup.accept(&entity("Quezon", IslandGroup::Luzon)));
        // Case and spacing differences still collapse
        assert!(!dedup.accept(&entity("  QUEZON ", IslandGroup::Luzon)));
    }

    #[test]
    fn test_same_name_different_groups_both_retained() {
        let mut dedup = Deduplicator::new();
        assert!(dedup.accept(&entity("Quezon", IslandGroup::Luzon)));
        assert!(dedup.accept(&entity("Quezon", IslandGroup::Mindanao)));
    }
}
