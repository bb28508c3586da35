// Bulletin section parsing module - implementations live in:
// - extractor.rs: header-anchor section boundary detection
// - signal_table.rs: wind-signal table cell parsing
// - rainfall.rs: rainfall hazard paragraph parsing

pub mod extractor;
pub mod rainfall;
pub mod signal_table;

pub use extractor::{locate_sections, SectionMap};
pub use rainfall::parse_rainfall_section;
pub use signal_table::parse_cell;
