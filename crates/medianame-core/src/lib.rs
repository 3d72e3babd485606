//! # Medianame Core
//!
//! Extracts structured metadata from media filenames: movie titles and
//! release years, series titles with season/episode or air-date anchors, and
//! resolution/source/codec quality tags. Purely heuristic; no lookups.
//!
//! ## Quick Start
//!
//! ```rust
//! use medianame_core::MediaNameParser;
//!
//! let parser = MediaNameParser::with_defaults().unwrap();
//! let episode = parser.parse_series("Show.Name.S02E05.720p.HEVC.mkv").unwrap();
//!
//! assert_eq!(episode.title, "Show Name");
//! assert_eq!((episode.season, episode.episode), (2, 5));
//! assert_eq!(episode.quality.to_string(), "720p");
//! ```
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use error::{MediaNameError, Result};
pub use parser::{
    MediaNameParser, MovieParser, ParserConfig, QualityClassifier, SeriesParser, classify_quality,
    parse_movie, parse_series,
};
pub use types::{
    IdentifiedBy, MovieRecord, QualityComponent, QualityKind, QualityTag, SeriesRecord,
};
