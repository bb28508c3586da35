//! Gazetteer index — the only long-lived state in the engine.
//!
//! Built once from externally loaded records, then shared by reference across
//! any number of concurrent parse calls. Nothing here mutates after
//! construction.

use crate::types::{AdminLevel, GazetteerRecord, IslandGroup};
use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// The seventeen named administrative regions. Bulletins reference these
/// directly ("Eastern Visayas", "Caraga") even when the gazetteer file only
/// carries provinces, so the index seeds them at Region priority.
const REGION_MAPPING: &[(&str, IslandGroup)] = &[
    ("Ilocos Region", IslandGroup::Luzon),
    ("Cagayan Valley", IslandGroup::Luzon),
    ("Central Luzon", IslandGroup::Luzon),
    ("CALABARZON", IslandGroup::Luzon),
    ("MIMAROPA", IslandGroup::Luzon),
    ("Bicol Region", IslandGroup::Luzon),
    ("National Capital Region", IslandGroup::Luzon),
    ("NCR", IslandGroup::Luzon),
    ("Cordillera Administrative Region", IslandGroup::Luzon),
    ("CAR", IslandGroup::Luzon),
    ("Western Visayas", IslandGroup::Visayas),
    ("Central Visayas", IslandGroup::Visayas),
    ("Eastern Visayas", IslandGroup::Visayas),
    ("Zamboanga Peninsula", IslandGroup::Mindanao),
    ("Northern Mindanao", IslandGroup::Mindanao),
    ("Davao Region", IslandGroup::Mindanao),
    ("SOCCSKSARGEN", IslandGroup::Mindanao),
    ("Caraga", IslandGroup::Mindanao),
    ("Bangsamoro", IslandGroup::Mindanao),
    ("BARMM", IslandGroup::Mindanao),
];

/// Case-fold a place name and collapse internal whitespace.
pub(crate) fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Read-only gazetteer: place name → (hierarchy level, island group).
pub struct LocationIndex {
    entries: HashMap<String, (AdminLevel, IslandGroup)>,
    /// Lower-cased names at Region level (seeded regions plus any Region
    /// records from the gazetteer file)
    region_names: HashSet<String>,
    /// All lower-cased names, longest first, for longest-match scanning
    names_by_length: Vec<String>,
}

impl LocationIndex {
    /// Build the index from gazetteer records. Duplicate names keep the
    /// highest-priority hierarchy level (Province > Region > City >
    /// Municipality > Barangay).
    pub fn new(records: Vec<GazetteerRecord>) -> Self {
        let mut entries: HashMap<String, (AdminLevel, IslandGroup)> = HashMap::new();
        let mut region_names = HashSet::new();

        for (name, group) in REGION_MAPPING {
            let key = normalize_name(name);
            region_names.insert(key.clone());
            entries.insert(key, (AdminLevel::Region, *group));
        }

        for record in records {
            let key = normalize_name(&record.name);
            if key.is_empty() {
                continue;
            }
            if record.level == AdminLevel::Region {
                region_names.insert(key.clone());
            }
            match entries.get(&key) {
                Some((existing, _)) if existing.priority() >= record.level.priority() => {}
                _ => {
                    entries.insert(key, (record.level, record.island_group));
                }
            }
        }

        let mut names_by_length: Vec<String> = entries.keys().cloned().collect();
        names_by_length.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Self {
            entries,
            region_names,
            names_by_length,
        }
    }

    /// Island group for a place name, or None if the name is unknown.
    pub fn lookup_island_group(&self, name: &str) -> Option<IslandGroup> {
        self.entries
            .get(&normalize_name(name))
            .map(|(_, group)| *group)
    }

    pub fn contains_case_insensitive(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_name(name))
    }

    /// Whether the name is one of the named administrative regions.
    pub fn is_named_region(&self, name: &str) -> bool {
        self.region_names.contains(&normalize_name(name))
    }

    /// Whether the text mentions any specific administrative unit (anything
    /// below Region level) as a whole word.
    pub fn has_specific_place(&self, text: &str) -> bool {
        let haystack = normalize_name(text);
        self.names_by_length.iter().any(|name| {
            let (level, _) = self.entries[name];
            level != AdminLevel::Region && contains_word(&haystack, name)
        })
    }

    /// Whether the text mentions any named administrative region as a whole
    /// word.
    pub fn mentions_named_region(&self, text: &str) -> bool {
        let haystack = normalize_name(text);
        self.region_names
            .iter()
            .any(|name| contains_word(&haystack, name))
    }

    /// All known names, lower-cased, longest first. Order matters for the
    /// free-text scanner's longest-match-wins rule.
    pub fn names_by_length(&self) -> &[String] {
        &self.names_by_length
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whole-word containment check: the needle must not sit inside a longer
/// alphanumeric run.
pub(crate) fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(rel) = haystack[from..].find(needle) {
        let start = from + rel;
        let end = start + needle.len();
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
        if before_ok && after_ok {
            return true;
        }
        // Advance one whole character so the next slice stays on a boundary
        let step = haystack[start..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(1);
        from = start + step;
    }
    false
}

/// Load gazetteer records from a JSON file: an array of
/// `{name, level, island_group}` objects.
pub fn load_gazetteer_file<P: AsRef<Path>>(path: P) -> Result<Vec<GazetteerRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<GazetteerRecord> = serde_json::from_str(&content)?;
    Ok(records)
}
