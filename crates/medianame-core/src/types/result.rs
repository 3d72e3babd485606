use serde::{Deserialize, Serialize};

use super::episode::IdentifiedBy;
use super::quality::QualityTag;

/// Metadata extracted from a movie filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Cleaned movie title.
    pub title: String,

    /// Release year, when a plausible one was found.
    pub year: Option<u16>,

    /// Resolution/source/codec found anywhere in the name.
    pub quality: QualityTag,

    /// Number of proper/repack markers counted in the name.
    pub proper_count: u32,
}

impl MovieRecord {
    /// Creates a record with only a title set.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            quality: QualityTag::default(),
            proper_count: 0,
        }
    }

    /// Returns `true` if the release was marked as proper or repack.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        self.proper_count > 0
    }
}

impl std::fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)?;
        if let Some(year) = self.year {
            write!(f, " ({year})")?;
        }
        write!(f, " => {}", self.quality)
    }
}

/// Metadata extracted from a series episode (or season pack) filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRecord {
    /// Cleaned, title-cased series name.
    pub title: String,

    /// Season number; 1 when the name carried only an episode marker.
    pub season: u32,

    /// Episode number, 0 for season packs and dated entries.
    pub episode: u32,

    /// Last episode of a multi-episode file, 0 when absent.
    pub end_episode: u32,

    /// Resolution/source/codec found after the anchor.
    pub quality: QualityTag,

    /// Which cascade located the anchor.
    pub identified_by: IdentifiedBy,
}

impl SeriesRecord {
    /// Returns `true` if the record spans more than one episode.
    #[must_use]
    pub fn is_multi_episode(&self) -> bool {
        self.end_episode > self.episode
    }

    /// Returns `true` if the record denotes an entire season.
    #[must_use]
    pub fn is_season_pack(&self) -> bool {
        self.identified_by == IdentifiedBy::SeasonPack
    }
}

impl std::fmt::Display for SeriesRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)?;
        match self.identified_by {
            IdentifiedBy::SeasonPack => write!(f, " (S{:02})", self.season)?,
            IdentifiedBy::Episode => {
                write!(f, " (S{:02}E{:02}", self.season, self.episode)?;
                if self.is_multi_episode() {
                    write!(f, "-E{:02}", self.end_episode)?;
                }
                write!(f, ")")?;
            }
            IdentifiedBy::Date => write!(f, " (dated)")?,
        }
        write!(f, " => {}", self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{QualityComponent, QualityKind};

    fn series(identified_by: IdentifiedBy) -> SeriesRecord {
        SeriesRecord {
            title: "Show Name".into(),
            season: 2,
            episode: 5,
            end_episode: 0,
            quality: QualityTag {
                resolution: Some(QualityComponent {
                    kind: QualityKind::Resolution,
                    label: "720p".into(),
                    priority: 60,
                }),
                ..QualityTag::default()
            },
            identified_by,
        }
    }

    #[test]
    fn new_movie_record_is_bare() {
        let record = MovieRecord::new("Heat");
        assert_eq!(record.title, "Heat");
        assert_eq!(record.year, None);
        assert!(record.quality.is_empty());
        assert!(!record.is_proper());
    }

    #[test]
    fn movie_display() {
        let mut record = MovieRecord::new("Movie Title");
        assert_eq!(record.to_string(), "Movie Title => ");
        record.year = Some(2015);
        assert_eq!(record.to_string(), "Movie Title (2015) => ");
    }

    #[test]
    fn series_display_by_anchor_kind() {
        assert_eq!(
            series(IdentifiedBy::Episode).to_string(),
            "Show Name (S02E05) => 720p"
        );
        assert_eq!(
            series(IdentifiedBy::SeasonPack).to_string(),
            "Show Name (S02) => 720p"
        );
        assert_eq!(
            series(IdentifiedBy::Date).to_string(),
            "Show Name (dated) => 720p"
        );

        let mut double = series(IdentifiedBy::Episode);
        double.end_episode = 6;
        assert!(double.is_multi_episode());
        assert_eq!(double.to_string(), "Show Name (S02E05-E06) => 720p");
    }

    #[test]
    fn season_pack_flag() {
        assert!(series(IdentifiedBy::SeasonPack).is_season_pack());
        assert!(!series(IdentifiedBy::Episode).is_season_pack());
    }

    #[test]
    fn series_record_serializes_to_json() {
        let record = series(IdentifiedBy::Episode);
        let json = serde_json::to_string_pretty(&record).unwrap();
        assert!(json.contains("\"identified_by\": \"Episode\""));
        let back: SeriesRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
