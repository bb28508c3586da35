// PAGASA Bulletin Core Library
//
// Parses text extracted from PAGASA typhoon bulletins into structured,
// geographically classified records. Two distinct location-parsing entry
// points are exposed and must not be confused: `parse_location_list` for
// clean comma-delimited enumerations, `extract_locations_in_text` for
// narrative prose. Neither falls back on the other.

pub mod assembler;
pub mod config;
pub mod gazetteer;
pub mod locations;
pub mod sections;
pub mod types;

// Re-export main types and functions for easy use
pub use assembler::BulletinAssembler;
pub use config::ParsingConfig;
pub use gazetteer::{load_gazetteer_file, LocationIndex};
pub use locations::{extract_locations_in_text, is_vague, parse_location_list};
pub use types::*;
