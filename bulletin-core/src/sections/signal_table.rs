//! Wind-signal table cell parsing.
//!
//! A cell arrives as ordered raw text fragments (one per extracted line).
//! The table layout uses two different hyphen conventions that must not be
//! confused: `" - -"` is a sentinel meaning "no content in this column" and
//! is removed before any splitting, while a remaining `" - "` separates the
//! Luzon/Visayas/Mindanao region columns of a flattened row.
//!
//! Cell text is preserved verbatim — parenthetical abbreviations like
//! "(Babuyan Is.)" stay as written, and neither the structured list parser
//! nor the free-text scanner ever runs on this text.

use crate::config::ParsingConfig;
use crate::types::{IslandGroup, IslandGroupBucket, ParseDiagnostic};
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Positional order of region columns in a flattened signal row.
const REGION_COLUMNS: [IslandGroup; 3] = [
    IslandGroup::Luzon,
    IslandGroup::Visayas,
    IslandGroup::Mindanao,
];

/// Parse one signal-table cell into its per-region bucket.
///
/// `declared_group` is the region the cell was extracted for; it receives the
/// whole cleaned text when no region separator is present, and serves as the
/// fallback destination when a malformed row splits into more than three
/// columns (recorded as a diagnostic, never an error).
pub fn parse_cell(
    level: u8,
    fragments: &[&str],
    declared_group: IslandGroup,
    config: &ParsingConfig,
    diagnostics: &mut Vec<ParseDiagnostic>,
) -> IslandGroupBucket {
    // Trailing boilerplate lines terminate the cell
    let mut kept: Vec<&str> = Vec::new();
    for fragment in fragments {
        let trimmed = fragment.trim();
        let is_boilerplate = config
            .signal_stoplist
            .iter()
            .any(|stop| trimmed.to_lowercase().starts_with(&stop.to_lowercase()));
        if is_boilerplate {
            break;
        }
        kept.push(fragment);
    }

    let joined = kept.join(" ");

    // Sentinel removal must happen before any delimiter splitting, or the
    // region split below would misread "no content" markers as separators
    let mut cleaned = WHITESPACE
        .replace_all(&joined.replace(" - -", " "), " ")
        .trim()
        .to_string();
    while let Some(rest) = cleaned.strip_prefix("- -") {
        cleaned = rest.trim_start().to_string();
    }

    let mut bucket = IslandGroupBucket::default();
    if is_blank_cell(&cleaned) {
        return bucket;
    }

    if cleaned.contains(" - ") {
        let parts: Vec<&str> = cleaned.split(" - ").collect();
        if parts.len() <= REGION_COLUMNS.len() {
            for (part, group) in parts.iter().zip(REGION_COLUMNS) {
                let part = part.trim();
                if !is_blank_cell(part) {
                    bucket.set(group, Some(part.to_string()));
                }
            }
        } else {
            diagnostics.push(ParseDiagnostic::MalformedTableCell {
                level,
                parts: parts.len(),
            });
            bucket.set(declared_group, Some(cleaned));
        }
    } else {
        bucket.set(declared_group, Some(cleaned));
    }

    bucket
}

fn is_blank_cell(text: &str) -> bool {
    text.is_empty() || text == "-" || text.eq_ignore_ascii_case("none")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_removed_before_joining_columns() {
        let config = ParsingConfig::default();
        let mut diagnostics = Vec::new();
        let bucket = parse_cell(
            1,
            &[
                "Batanes and the northeastern portion of - -",
                "Babuyan Islands (Babuyan Is.)",
            ],
            IslandGroup::Luzon,
            &config,
            &mut diagnostics,
        );
        assert_eq!(
            bucket.get(IslandGroup::Luzon),
            Some("Batanes and the northeastern portion of Babuyan Islands (Babuyan Is.)")
        );
        assert!(bucket.get(IslandGroup::Visayas).is_none());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_region_separator_splits_positionally() {
        let config = ParsingConfig::default();
        let mut diagnostics = Vec::new();
        let bucket = parse_cell(
            2,
            &["Aurora - Northern Samar - Dinagat Islands"],
            IslandGroup::Luzon,
            &config,
            &mut diagnostics,
        );
        assert_eq!(bucket.get(IslandGroup::Luzon), Some("Aurora"));
        assert_eq!(bucket.get(IslandGroup::Visayas), Some("Northern Samar"));
        assert_eq!(bucket.get(IslandGroup::Mindanao), Some("Dinagat Islands"));
    }

    #[test]
    fn test_blank_column_in_split_stays_null() {
        let config = ParsingConfig::default();
        let mut diagnostics = Vec::new();
        let bucket = parse_cell(
            1,
            &["Aurora - none - Dinagat Islands"],
            IslandGroup::Luzon,
            &config,
            &mut diagnostics,
        );
        assert_eq!(bucket.get(IslandGroup::Luzon), Some("Aurora"));
        assert!(bucket.get(IslandGroup::Visayas).is_none());
        assert_eq!(bucket.get(IslandGroup::Mindanao), Some("Dinagat Islands"));
    }

    #[test]
    fn test_too_many_columns_falls_back_to_declared_region() {
        let config = ParsingConfig::default();
        let mut diagnostics = Vec::new();
        let bucket = parse_cell(
            3,
            &["A - B - C - D"],
            IslandGroup::Visayas,
            &config,
            &mut diagnostics,
        );
        assert_eq!(bucket.get(IslandGroup::Visayas), Some("A - B - C - D"));
        assert!(bucket.get(IslandGroup::Luzon).is_none());
        assert_eq!(
            diagnostics,
            vec![ParseDiagnostic::MalformedTableCell { level: 3, parts: 4 }]
        );
    }

    #[test]
    fn test_empty_and_dash_cells_yield_empty_bucket() {
        let config = ParsingConfig::default();
        let mut diagnostics = Vec::new();
        assert!(parse_cell(1, &["-"], IslandGroup::Luzon, &config, &mut diagnostics).is_empty());
        assert!(parse_cell(1, &["none"], IslandGroup::Luzon, &config, &mut diagnostics).is_empty());
        assert!(parse_cell(1, &[" - -"], IslandGroup::Luzon, &config, &mut diagnostics).is_empty());
        assert!(parse_cell(1, &[], IslandGroup::Luzon, &config, &mut diagnostics).is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_trailing_boilerplate_stripped() {
        let config = ParsingConfig::default();
        let mut diagnostics = Vec::new();
        let bucket = parse_cell(
            1,
            &[
                "Batanes",
                "Potential impacts of winds: minimal to minor threat to life and property",
                "this line is also dropped",
            ],
            IslandGroup::Luzon,
            &config,
            &mut diagnostics,
        );
        assert_eq!(bucket.get(IslandGroup::Luzon), Some("Batanes"));
    }

    #[test]
    fn test_parenthetical_abbreviations_preserved_verbatim() {
        let config = ParsingConfig::default();
        let mut diagnostics = Vec::new();
        let bucket = parse_cell(
            1,
            &["Babuyan Islands (Babuyan Is.)"],
            IslandGroup::Luzon,
            &config,
            &mut diagnostics,
        );
        assert_eq!(
            bucket.get(IslandGroup::Luzon),
            Some("Babuyan Islands (Babuyan Is.)")
        );
    }
}
