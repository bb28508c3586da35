//! Top-level bulletin assembly.
//!
//! A pure function of the extracted bulletin text: locate sections, clean the
//! scalar fields, run the signal-table and rainfall parsers, and emit a
//! complete record. Extraction gaps become sentinel values and recorded
//! diagnostics — downstream consumers always see the full schema.

use crate::config::ParsingConfig;
use crate::gazetteer::LocationIndex;
use crate::sections::{locate_sections, parse_cell, parse_rainfall_section};
use crate::types::*;
use chrono::{FixedOffset, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// "11:00 AM, 04 December 2025" and the minor layout variants bulletins use
static ISSUED_DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}:\d{2}\s*[AP]M[,\s]+\d{1,2}\s+[A-Za-z]+\s+\d{4})").unwrap()
});

// Trailing validity/synopsis text that follows the issue timestamp
static ISSUED_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(valid|synopsis)\b").unwrap());

// Thousands-separator-safe windspeed capture: "120 km/h", "1,000 kph"
static WINDSPEED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,3}(?:,\d{3})+|\d+)\s*(?:km/h|km/hr|kph)").unwrap()
});

// A signal row starts with its level: "1 ...", "TCWS No. 2 ...", "#3 ...".
// The digit must stand alone so "120 km/h" or "1,000" never open a row.
static SIGNAL_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:signal\s*)?(?:tcws\s*)?(?:no\.?\s*)?#?\s*([1-5])(?:[.):]+\s*|\s+|$)(.*)$")
        .unwrap()
});

/// Philippine Standard Time, the fixed offset bulletins are issued in.
const PST_OFFSET_SECONDS: i32 = 8 * 3600;

const DATETIME_FORMATS: [&str; 3] = ["%I:%M %p, %d %B %Y", "%I:%M %p %d %B %Y", "%H:%M, %d %B %Y"];

/// Assembles a [`BulletinRecord`] from extracted bulletin page text.
///
/// Holds only borrowed, read-only state; one assembler can serve any number
/// of bulletins, and bulletins can be assembled concurrently without
/// coordination.
pub struct BulletinAssembler<'a> {
    index: &'a LocationIndex,
    config: &'a ParsingConfig,
}

impl<'a> BulletinAssembler<'a> {
    pub fn new(index: &'a LocationIndex, config: &'a ParsingConfig) -> Self {
        Self { index, config }
    }

    /// Parse one bulletin. Never fails: missing or malformed pieces degrade
    /// to sentinels/nulls and a diagnostic.
    pub fn assemble(&self, text: &str) -> AssembledBulletin {
        let mut diagnostics = Vec::new();
        let sections = locate_sections(text, self.config);
        let mut record = BulletinRecord::default();

        record.issued_at = self.extract_issued_at(&sections, &mut diagnostics);
        record.location_text = self.extract_scalar(
            &sections,
            SectionKind::LocationOfCenter,
            LOCATION_NOT_FOUND,
            &mut diagnostics,
        );
        record.movement = self.extract_scalar(
            &sections,
            SectionKind::PresentMovement,
            MOVEMENT_NOT_FOUND,
            &mut diagnostics,
        );
        record.windspeed = self.extract_windspeed(&sections, &mut diagnostics);

        self.extract_signals(&sections, &mut record, &mut diagnostics);
        self.extract_rainfall(&sections, &mut record, &mut diagnostics);

        AssembledBulletin {
            record,
            diagnostics,
        }
    }

    fn extract_scalar(
        &self,
        sections: &crate::sections::SectionMap,
        kind: SectionKind,
        sentinel: &str,
        diagnostics: &mut Vec<ParseDiagnostic>,
    ) -> String {
        match sections.get(kind) {
            Some(content) => {
                let cleaned = collapse_whitespace(content);
                if cleaned.is_empty() {
                    sentinel.to_string()
                } else {
                    cleaned
                }
            }
            None => {
                diagnostics.push(ParseDiagnostic::MissingSection { section: kind });
                sentinel.to_string()
            }
        }
    }

    fn extract_issued_at(
        &self,
        sections: &crate::sections::SectionMap,
        diagnostics: &mut Vec<ParseDiagnostic>,
    ) -> String {
        let content = match sections.get(SectionKind::IssuedAt) {
            Some(content) => content,
            None => {
                diagnostics.push(ParseDiagnostic::MissingSection {
                    section: SectionKind::IssuedAt,
                });
                return DATETIME_NOT_FOUND.to_string();
            }
        };

        let cleaned = collapse_whitespace(content);
        let cleaned = match ISSUED_TAIL.find(&cleaned).map(|tail| tail.start()) {
            Some(tail_start) => cleaned[..tail_start].trim().to_string(),
            None => cleaned,
        };

        let candidate = match ISSUED_DATETIME.find(&cleaned) {
            Some(m) => m.as_str().to_string(),
            None => {
                return if cleaned.is_empty() {
                    DATETIME_NOT_FOUND.to_string()
                } else {
                    cleaned
                };
            }
        };

        // Normalize to ISO-8601 in Philippine Standard Time; keep the raw
        // capture when no known layout matches
        normalize_datetime(&candidate).unwrap_or(candidate)
    }

    fn extract_windspeed(
        &self,
        sections: &crate::sections::SectionMap,
        diagnostics: &mut Vec<ParseDiagnostic>,
    ) -> String {
        let content = match sections.get(SectionKind::Intensity) {
            Some(content) => content,
            None => {
                diagnostics.push(ParseDiagnostic::MissingSection {
                    section: SectionKind::Intensity,
                });
                return WINDSPEED_NOT_FOUND.to_string();
            }
        };

        match WINDSPEED.captures(content) {
            Some(caps) => format!("{} km/h", caps[1].replace(',', "")),
            None => WINDSPEED_NOT_FOUND.to_string(),
        }
    }

    fn extract_signals(
        &self,
        sections: &crate::sections::SectionMap,
        record: &mut BulletinRecord,
        diagnostics: &mut Vec<ParseDiagnostic>,
    ) {
        let section = match sections.get(SectionKind::WindSignals) {
            Some(section) => section,
            None => {
                diagnostics.push(ParseDiagnostic::MissingSection {
                    section: SectionKind::WindSignals,
                });
                return;
            }
        };

        let lowered = section.to_lowercase();
        if lowered.contains("no tropical cyclone wind signal") || lowered.contains("no wind signal")
        {
            return;
        }

        for (level, fragments) in split_signal_rows(section) {
            let fragment_refs: Vec<&str> = fragments.iter().map(|s| s.as_str()).collect();
            let bucket = parse_cell(
                level,
                &fragment_refs,
                IslandGroup::Luzon,
                self.config,
                diagnostics,
            );
            // First row per level wins; later repeats are table noise
            if record.signal_tag(level).is_empty() {
                *record.signal_tag_mut(level) = bucket;
            }
        }
    }

    fn extract_rainfall(
        &self,
        sections: &crate::sections::SectionMap,
        record: &mut BulletinRecord,
        diagnostics: &mut Vec<ParseDiagnostic>,
    ) {
        let section = match sections.get(SectionKind::Hazards) {
            Some(section) => section,
            None => {
                diagnostics.push(ParseDiagnostic::MissingSection {
                    section: SectionKind::Hazards,
                });
                return;
            }
        };

        let buckets = parse_rainfall_section(section, self.index, self.config);
        for (i, bucket) in buckets.into_iter().enumerate() {
            *record.rainfall_tag_mut((i + 1) as u8) = bucket;
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

fn normalize_datetime(candidate: &str) -> Option<String> {
    let offset = FixedOffset::east_opt(PST_OFFSET_SECONDS).expect("valid PST offset");
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(candidate, format) {
            let local = naive.and_local_timezone(offset).single()?;
            return Some(local.to_rfc3339());
        }
    }
    None
}

/// Group a wind-signal section's lines into per-level cell fragments. A line
/// opening with a standalone 1-5 starts that level's row; following lines
/// belong to it until the next row begins.
fn split_signal_rows(section: &str) -> Vec<(u8, Vec<String>)> {
    let mut rows: Vec<(u8, Vec<String>)> = Vec::new();
    let mut current: Option<(u8, Vec<String>)> = None;

    for line in section.lines() {
        if let Some(caps) = SIGNAL_ROW.captures(line) {
            if let Some(row) = current.take() {
                rows.push(row);
            }
            let level: u8 = caps[1].parse().expect("single digit capture");
            let rest = caps[2].trim();
            let fragments = if rest.is_empty() {
                Vec::new()
            } else {
                vec![rest.to_string()]
            };
            current = Some((level, fragments));
        } else if let Some((_, fragments)) = current.as_mut() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                fragments.push(trimmed.to_string());
            }
        }
    }
    if let Some(row) = current.take() {
        rows.push(row);
    }
    rows
}
