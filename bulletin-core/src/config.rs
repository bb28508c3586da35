use crate::types::{IslandGroup, SectionKind};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// The vagueness keyword list and word-count cutoff are heuristic and known to
// be incomplete; they live here rather than in code so deployments can extend
// them without a release.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsingConfig {
    /// Qualifier words/phrases that mark a location reference as non-specific
    /// when combined with an island-group or region name
    #[serde(default = "default_vague_keywords")]
    pub vague_keywords: Vec<String>,

    /// Maximum word count for the short region-reference vagueness rule
    #[serde(default = "default_vague_word_count_cutoff")]
    pub vague_word_count_cutoff: usize,

    /// Exact-phrase table mapping vague phrases to an island group.
    /// Phrases not in this table bucket as Other.
    #[serde(default = "default_vague_group_phrases")]
    pub vague_group_phrases: BTreeMap<String, IslandGroup>,

    /// Section header anchors, in document order. Each section matches on any
    /// of its alias anchors, case-insensitively.
    #[serde(default = "default_section_anchors")]
    pub section_anchors: Vec<SectionAnchor>,

    /// Boilerplate prefixes that terminate a signal-table cell; the matching
    /// fragment and everything after it are dropped
    #[serde(default = "default_signal_stoplist")]
    pub signal_stoplist: Vec<String>,

    /// Rainfall intensity phrase markers, in match order (longest phrases
    /// first so "heavy with at times intense" is never read as "heavy")
    #[serde(default = "default_rainfall_markers")]
    pub rainfall_markers: Vec<RainfallMarker>,
}

/// One section's anchor aliases, e.g. WindSignals matching either
/// "TROPICAL CYCLONE WIND SIGNALS" or "TCWS".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionAnchor {
    pub section: SectionKind,
    pub anchors: Vec<String>,
}

/// An intensity phrase and the 1-3 warning level it maps to
/// (1 = red, 2 = orange, 3 = yellow).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RainfallMarker {
    pub phrase: String,
    pub level: u8,
}

fn default_vague_keywords() -> Vec<String> {
    [
        "most of",
        "portions of",
        "rest of",
        "northern",
        "southern",
        "eastern",
        "western",
        "central",
        "northeastern",
        "northwestern",
        "southeastern",
        "southwestern",
        "mainland",
        "extreme northern",
        "extreme southern",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_vague_word_count_cutoff() -> usize {
    4
}

fn default_vague_group_phrases() -> BTreeMap<String, IslandGroup> {
    // Bare island-group names keep their locality; qualified phrases
    // ("northeastern Mindanao", "Eastern Visayas") are not listed and
    // therefore bucket as Other.
    let mut table = BTreeMap::new();
    table.insert("luzon".to_string(), IslandGroup::Luzon);
    table.insert("visayas".to_string(), IslandGroup::Visayas);
    table.insert("the visayas".to_string(), IslandGroup::Visayas);
    table.insert("mindanao".to_string(), IslandGroup::Mindanao);
    table
}

fn default_section_anchors() -> Vec<SectionAnchor> {
    vec![
        SectionAnchor {
            section: SectionKind::IssuedAt,
            anchors: vec![
                "Issued at".to_string(),
                "Issued:".to_string(),
                "Issued as of".to_string(),
            ],
        },
        SectionAnchor {
            section: SectionKind::LocationOfCenter,
            anchors: vec![
                "Location of Center".to_string(),
                "Location of the Center".to_string(),
                "Location of Eye".to_string(),
            ],
        },
        SectionAnchor {
            section: SectionKind::PresentMovement,
            anchors: vec!["Present Movement".to_string(), "Movement".to_string()],
        },
        SectionAnchor {
            section: SectionKind::Intensity,
            anchors: vec![
                "Intensity".to_string(),
                "Maximum sustained winds".to_string(),
            ],
        },
        SectionAnchor {
            section: SectionKind::WindSignals,
            anchors: vec![
                "TROPICAL CYCLONE WIND SIGNALS".to_string(),
                "WIND SIGNALS".to_string(),
                "TCWS".to_string(),
            ],
        },
        SectionAnchor {
            section: SectionKind::Hazards,
            anchors: vec![
                "HAZARDS AFFECTING LAND AREAS".to_string(),
                "Heavy Rainfall Outlook".to_string(),
                "HEAVY RAINFALL".to_string(),
            ],
        },
    ]
}

fn default_signal_stoplist() -> Vec<String> {
    vec![
        "Potential impacts of winds".to_string(),
        "Potential impacts".to_string(),
    ]
}

fn default_rainfall_markers() -> Vec<RainfallMarker> {
    vec![
        RainfallMarker {
            phrase: "heavy with at times intense".to_string(),
            level: 1,
        },
        RainfallMarker {
            phrase: "light to moderate with at times heavy".to_string(),
            level: 3,
        },
        RainfallMarker {
            phrase: "moderate to heavy".to_string(),
            level: 3,
        },
        RainfallMarker {
            phrase: "intense".to_string(),
            level: 1,
        },
        RainfallMarker {
            phrase: "heavy".to_string(),
            level: 2,
        },
    ]
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            vague_keywords: default_vague_keywords(),
            vague_word_count_cutoff: default_vague_word_count_cutoff(),
            vague_group_phrases: default_vague_group_phrases(),
            section_anchors: default_section_anchors(),
            signal_stoplist: default_signal_stoplist(),
            rainfall_markers: default_rainfall_markers(),
        }
    }
}

impl ParsingConfig {
    /// Load config from file path (functional approach)
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ParsingConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|_| {
                eprintln!("⚠️  Failed to load config from {}, using defaults", p);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
