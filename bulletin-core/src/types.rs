use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ===== GEOGRAPHIC CLASSIFICATION TYPES =====
// Every parsed location lands in exactly one island group. "Other" is the
// residual bucket for unmapped names and deliberately non-specific entries —
// nothing is ever dropped for failing a gazetteer lookup.

/// The Philippines' major geographic divisions, plus a residual bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IslandGroup {
    Luzon,
    Visayas,
    Mindanao,
    Other,
}

impl IslandGroup {
    /// All groups in canonical output order.
    pub const ALL: [IslandGroup; 4] = [
        IslandGroup::Luzon,
        IslandGroup::Visayas,
        IslandGroup::Mindanao,
        IslandGroup::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IslandGroup::Luzon => "Luzon",
            IslandGroup::Visayas => "Visayas",
            IslandGroup::Mindanao => "Mindanao",
            IslandGroup::Other => "Other",
        }
    }
}

impl fmt::Display for IslandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrative hierarchy level of a gazetteer entry.
/// Lookup priority is Province > Region > City > Municipality > Barangay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminLevel {
    Barangay,
    Municipality,
    City,
    Region,
    Province,
}

impl AdminLevel {
    /// Numeric lookup priority; higher wins when one name maps to several
    /// hierarchy levels.
    pub fn priority(&self) -> u8 {
        match self {
            AdminLevel::Province => 5,
            AdminLevel::Region => 4,
            AdminLevel::City => 3,
            AdminLevel::Municipality => 2,
            AdminLevel::Barangay => 1,
        }
    }
}

/// One gazetteer row: a place name with its hierarchy level and island group.
/// Loaded by an external collaborator and handed to `LocationIndex::new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GazetteerRecord {
    pub name: String,
    pub level: AdminLevel,
    pub island_group: IslandGroup,
}

// ===== PARSED LOCATION TYPES =====

/// One classified location from a structured enumeration.
///
/// Created fresh per parse call and immutable afterwards. `sub_locations` is
/// non-empty only when `raw_text` carried a top-level parenthetical group,
/// and `is_vague` is never true in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntity {
    /// Verbatim source span this entity was parsed from
    pub raw_text: String,
    /// Trimmed phrase before any parentheses
    pub main_location: String,
    /// Place names enumerated inside the first top-level parenthetical group
    pub sub_locations: Vec<String>,
    pub island_group: IslandGroup,
    /// Names only a broad area or directional qualifier, not a specific place
    pub is_vague: bool,
}

/// Per-island-group location strings for one warning level.
/// Serializes to the `{Luzon, Visayas, Mindanao, Other}` object consumers
/// expect; absent groups are explicit nulls, never missing keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IslandGroupBucket {
    #[serde(rename = "Luzon")]
    pub luzon: Option<String>,
    #[serde(rename = "Visayas")]
    pub visayas: Option<String>,
    #[serde(rename = "Mindanao")]
    pub mindanao: Option<String>,
    #[serde(rename = "Other")]
    pub other: Option<String>,
}

impl IslandGroupBucket {
    pub fn get(&self, group: IslandGroup) -> Option<&str> {
        match group {
            IslandGroup::Luzon => self.luzon.as_deref(),
            IslandGroup::Visayas => self.visayas.as_deref(),
            IslandGroup::Mindanao => self.mindanao.as_deref(),
            IslandGroup::Other => self.other.as_deref(),
        }
    }

    pub fn set(&mut self, group: IslandGroup, value: Option<String>) {
        // Empty strings collapse to null so the output schema stays clean
        let value = value.filter(|v| !v.trim().is_empty());
        match group {
            IslandGroup::Luzon => self.luzon = value,
            IslandGroup::Visayas => self.visayas = value,
            IslandGroup::Mindanao => self.mindanao = value,
            IslandGroup::Other => self.other = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        IslandGroup::ALL.iter().all(|g| self.get(*g).is_none())
    }
}

// ===== BULLETIN SECTIONS =====

/// Recognized bulletin sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    IssuedAt,
    LocationOfCenter,
    PresentMovement,
    Intensity,
    WindSignals,
    Hazards,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::IssuedAt => "issued-at",
            SectionKind::LocationOfCenter => "location-of-center",
            SectionKind::PresentMovement => "present-movement",
            SectionKind::Intensity => "intensity",
            SectionKind::WindSignals => "wind-signals",
            SectionKind::Hazards => "hazards",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== DIAGNOSTICS =====

/// Recoverable extraction problems. These are recorded on the assembler
/// output, never raised — the bulletin record is always complete, with
/// sentinel values standing in for whatever could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDiagnostic {
    #[error("section not found: {section}")]
    MissingSection { section: SectionKind },

    #[error("signal {level} cell split into {parts} region columns, expected at most 3")]
    MalformedTableCell { level: u8, parts: usize },
}

// ===== FINAL RECORD =====

/// Sentinel values for scalar fields that could not be extracted.
/// Downstream consumers rely on these exact strings.
pub const DATETIME_NOT_FOUND: &str = "Datetime not found";
pub const LOCATION_NOT_FOUND: &str = "Location not found";
pub const MOVEMENT_NOT_FOUND: &str = "Movement information not found";
pub const WINDSPEED_NOT_FOUND: &str = "Wind speed not found";

/// The assembled bulletin record. Field names follow the internal model;
/// serde renames produce the wire keys consumers already depend on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletinRecord {
    #[serde(rename = "updated_datetime")]
    pub issued_at: String,
    #[serde(rename = "typhoon_location_text")]
    pub location_text: String,
    #[serde(rename = "typhoon_movement")]
    pub movement: String,
    #[serde(rename = "typhoon_windspeed")]
    pub windspeed: String,
    #[serde(rename = "signal_warning_tags1")]
    pub signal_tags1: IslandGroupBucket,
    #[serde(rename = "signal_warning_tags2")]
    pub signal_tags2: IslandGroupBucket,
    #[serde(rename = "signal_warning_tags3")]
    pub signal_tags3: IslandGroupBucket,
    #[serde(rename = "signal_warning_tags4")]
    pub signal_tags4: IslandGroupBucket,
    #[serde(rename = "signal_warning_tags5")]
    pub signal_tags5: IslandGroupBucket,
    #[serde(rename = "rainfall_warning_tags1")]
    pub rainfall_tags1: IslandGroupBucket,
    #[serde(rename = "rainfall_warning_tags2")]
    pub rainfall_tags2: IslandGroupBucket,
    #[serde(rename = "rainfall_warning_tags3")]
    pub rainfall_tags3: IslandGroupBucket,
}

impl Default for BulletinRecord {
    fn default() -> Self {
        Self {
            issued_at: DATETIME_NOT_FOUND.to_string(),
            location_text: LOCATION_NOT_FOUND.to_string(),
            movement: MOVEMENT_NOT_FOUND.to_string(),
            windspeed: WINDSPEED_NOT_FOUND.to_string(),
            signal_tags1: IslandGroupBucket::default(),
            signal_tags2: IslandGroupBucket::default(),
            signal_tags3: IslandGroupBucket::default(),
            signal_tags4: IslandGroupBucket::default(),
            signal_tags5: IslandGroupBucket::default(),
            rainfall_tags1: IslandGroupBucket::default(),
            rainfall_tags2: IslandGroupBucket::default(),
            rainfall_tags3: IslandGroupBucket::default(),
        }
    }
}

impl BulletinRecord {
    /// Signal tag bucket for a level in 1..=5.
    pub fn signal_tag(&self, level: u8) -> &IslandGroupBucket {
        match level {
            1 => &self.signal_tags1,
            2 => &self.signal_tags2,
            3 => &self.signal_tags3,
            4 => &self.signal_tags4,
            5 => &self.signal_tags5,
            _ => panic!("signal level out of range: {level}"),
        }
    }

    pub fn signal_tag_mut(&mut self, level: u8) -> &mut IslandGroupBucket {
        match level {
            1 => &mut self.signal_tags1,
            2 => &mut self.signal_tags2,
            3 => &mut self.signal_tags3,
            4 => &mut self.signal_tags4,
            5 => &mut self.signal_tags5,
            _ => panic!("signal level out of range: {level}"),
        }
    }

    /// Rainfall tag bucket for a level in 1..=3.
    pub fn rainfall_tag(&self, level: u8) -> &IslandGroupBucket {
        match level {
            1 => &self.rainfall_tags1,
            2 => &self.rainfall_tags2,
            3 => &self.rainfall_tags3,
            _ => panic!("rainfall level out of range: {level}"),
        }
    }

    pub fn rainfall_tag_mut(&mut self, level: u8) -> &mut IslandGroupBucket {
        match level {
            1 => &mut self.rainfall_tags1,
            2 => &mut self.rainfall_tags2,
            3 => &mut self.rainfall_tags3,
            _ => panic!("rainfall level out of range: {level}"),
        }
    }
}

/// Assembler output: the complete record plus whatever recoverable problems
/// were hit along the way.
#[derive(Debug, Clone, Serialize)]
pub struct AssembledBulletin {
    pub record: BulletinRecord,
    #[serde(skip)]
    pub diagnostics: Vec<ParseDiagnostic>,
}
