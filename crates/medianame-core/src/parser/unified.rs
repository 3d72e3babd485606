//! # Unified Parser Interface
//!
//! Bundles the movie and series extractors with a shared quality classifier
//! behind one configurable entry point.

use std::sync::LazyLock;

use chrono::Datelike;

use crate::error::{MediaNameError, Result};
use crate::parser::movie::MovieParser;
use crate::parser::quality::QualityClassifier;
use crate::parser::series::SeriesParser;
use crate::types::{MovieRecord, QualityTag, SeriesRecord};

/// Configuration for the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Latest accepted release year; the current year when `None`
    pub max_year: Option<u16>,
    /// Whether series titles are title-cased
    pub title_case: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_year: None,
            title_case: true,
        }
    }
}

impl ParserConfig {
    /// Create a new parser configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latest year a movie token may be read as.
    pub fn with_max_year(mut self, year: u16) -> Self {
        self.max_year = Some(year);
        self
    }

    /// Enable or disable series title-casing.
    pub fn with_title_case(mut self, enabled: bool) -> Self {
        self.title_case = enabled;
        self
    }

    /// The effective year bound, resolving `None` to the current year.
    pub fn effective_max_year(&self) -> u16 {
        self.max_year.unwrap_or_else(current_year)
    }
}

fn current_year() -> u16 {
    u16::try_from(chrono::Local::now().year()).unwrap_or(u16::MAX)
}

/// Movie and series extraction sharing one set of compiled quality tables.
#[derive(Debug)]
pub struct MediaNameParser {
    config: ParserConfig,
    quality: QualityClassifier,
    movie: MovieParser,
    series: SeriesParser,
}

impl MediaNameParser {
    /// Create a new parser with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `MediaNameError::RegexError` if a pattern fails to compile.
    pub fn new(config: ParserConfig) -> Result<Self> {
        Ok(Self {
            quality: QualityClassifier::new()?,
            movie: MovieParser::new(config.effective_max_year())?,
            series: SeriesParser::new(config.title_case)?,
            config,
        })
    }

    /// Create a new parser with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ParserConfig::default())
    }

    /// Parse a movie filename.
    ///
    /// # Examples
    /// ```
    /// use medianame_core::{MediaNameParser, ParserConfig};
    ///
    /// let parser = MediaNameParser::new(ParserConfig::new().with_max_year(2020)).unwrap();
    /// let movie = parser.parse_movie("Movie.Title.2015.BluRay.x264.mp4");
    ///
    /// assert_eq!(movie.title, "Movie Title");
    /// assert_eq!(movie.year, Some(2015));
    /// ```
    pub fn parse_movie(&self, input: &str) -> MovieRecord {
        self.movie.parse(input, &self.quality)
    }

    /// Parse a series episode filename.
    ///
    /// # Errors
    ///
    /// Fails with `EmptyInput`, `UnwantedPattern` or `NoMatch`; see
    /// [`MediaNameError`].
    pub fn parse_series(&self, input: &str) -> Result<SeriesRecord> {
        self.series.parse(input, &self.quality)
    }

    /// Classify resolution, source and codec in an arbitrary fragment.
    pub fn classify_quality(&self, fragment: &str) -> QualityTag {
        self.quality.classify(fragment)
    }

    /// Get the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

static DEFAULT: LazyLock<std::result::Result<MediaNameParser, MediaNameError>> =
    LazyLock::new(MediaNameParser::with_defaults);

fn default_parser() -> Result<&'static MediaNameParser> {
    DEFAULT.as_ref().map_err(Clone::clone)
}

/// Convenience function to parse a movie name with default settings.
///
/// Unlike [`MediaNameParser::parse_movie`] this returns a `Result`, because
/// the shared default parser is built on first use.
///
/// # Errors
///
/// Only fails if the default parser could not be built; movie parsing
/// itself never fails.
pub fn parse_movie(input: &str) -> Result<MovieRecord> {
    Ok(default_parser()?.parse_movie(input))
}

/// Convenience function to parse a series name with default settings.
///
/// # Errors
///
/// Same as [`MediaNameParser::parse_series`], plus the default parser
/// failing to build.
pub fn parse_series(input: &str) -> Result<SeriesRecord> {
    default_parser()?.parse_series(input)
}

/// Convenience function to classify quality with default settings.
///
/// Unlike [`MediaNameParser::classify_quality`] this returns a `Result`,
/// because the shared default parser is built on first use.
///
/// # Errors
///
/// Only fails if the default parser could not be built; classification
/// itself is total.
pub fn classify_quality(fragment: &str) -> Result<QualityTag> {
    Ok(default_parser()?.classify_quality(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_creation() {
        let parser = MediaNameParser::with_defaults();
        assert!(parser.is_ok());
    }

    #[test]
    fn test_parser_config() {
        let config = ParserConfig::new()
            .with_max_year(2020)
            .with_title_case(false);

        assert_eq!(config.max_year, Some(2020));
        assert_eq!(config.effective_max_year(), 2020);
        assert!(!config.title_case);
    }

    #[test]
    fn test_default_max_year_is_current_year() {
        let config = ParserConfig::default();
        assert!(config.title_case);
        assert!(config.effective_max_year() >= 2024);
    }

    #[test]
    fn test_max_year_reaches_movie_parser() {
        let parser = MediaNameParser::new(ParserConfig::new().with_max_year(2010)).unwrap();
        let movie = parser.parse_movie("Some Movie 2015 720p");
        assert_eq!(movie.year, None);
        assert_eq!(parser.config().max_year, Some(2010));
    }

    #[test]
    fn test_title_case_reaches_series_parser() {
        let parser = MediaNameParser::new(ParserConfig::new().with_title_case(false)).unwrap();
        let series = parser.parse_series("show.name.s01e02.mkv").unwrap();
        assert_eq!(series.title, "show name");
    }

    #[test]
    fn test_shared_quality_classifier() {
        let parser = MediaNameParser::with_defaults().unwrap();
        let tag = parser.classify_quality("1080p WEB-DL");
        assert_eq!(tag.to_string(), "1080p webdl");
    }

    #[test]
    fn test_convenience_functions() {
        let movie = parse_movie("Movie.Title.2015.BluRay.x264.mp4").unwrap();
        assert_eq!(movie.title, "Movie Title");

        let series = parse_series("Show.Name.S02E05.720p.HEVC.mkv").unwrap();
        assert_eq!((series.season, series.episode), (2, 5));

        let tag = classify_quality("720p hdtv").unwrap();
        assert_eq!(tag.to_string(), "720p hdtv");
    }

    #[test]
    fn test_series_errors_pass_through() {
        assert!(matches!(parse_series(""), Err(MediaNameError::EmptyInput)));
        assert!(matches!(
            parse_series("Some.Show.Season.3.Complete.mkv"),
            Err(MediaNameError::UnwantedPattern { .. })
        ));
    }

    #[test]
    fn test_parser_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MediaNameParser>();
    }
}
