//! # Series title/episode extractor
//!
//! A linear decision tree: reject unwanted shapes, then try the season pack,
//! episode and date cascades in that order. The first cascade that yields a
//! validated match provides the anchor; the title is the text before it and
//! the quality is classified from the text after it.

use regex::Captures;
use tracing::{debug, trace};

use crate::error::{MediaNameError, Result};
use crate::parser::normalize::{
    FoldedName, MatchSpan, clean_title, replace_with_space, strip_extension, title_case,
};
use crate::parser::numbers::resolve_episode;
use crate::parser::patterns::{EpisodeRule, SeriesPatterns, guarded_captures};
use crate::parser::quality::QualityClassifier;
use crate::types::{IdentifiedBy, SeriesRecord};

/// What a winning anchor match means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnchorKind {
    SeasonPack {
        season: u32,
    },
    Episode {
        season: u32,
        episode: u32,
        end_episode: u32,
    },
    Date,
}

#[derive(Debug)]
struct Anchor {
    kind: AnchorKind,
    span: MatchSpan,
    pattern: &'static str,
}

impl Anchor {
    fn identified_by(&self) -> IdentifiedBy {
        match self.kind {
            AnchorKind::SeasonPack { .. } => IdentifiedBy::SeasonPack,
            AnchorKind::Episode { .. } => IdentifiedBy::Episode,
            AnchorKind::Date => IdentifiedBy::Date,
        }
    }
}

/// Extracts series title, season and episode from episode filenames.
#[derive(Debug)]
pub struct SeriesParser {
    patterns: SeriesPatterns,
    title_case: bool,
}

impl SeriesParser {
    /// Constructs a parser with freshly compiled pattern tables.
    ///
    /// # Errors
    ///
    /// Returns `MediaNameError::RegexError` if a pattern fails to compile.
    pub fn new(title_case: bool) -> Result<Self> {
        Ok(Self {
            patterns: SeriesPatterns::new()?,
            title_case,
        })
    }

    /// Parses a series filename.
    ///
    /// # Errors
    ///
    /// - `MediaNameError::EmptyInput` for empty or whitespace-only input.
    /// - `MediaNameError::UnwantedPattern` for disc sets, complete seasons
    ///   and episode-zero markers.
    /// - `MediaNameError::NoMatch` when no season, episode or date is found.
    pub fn parse(&self, input: &str, quality: &QualityClassifier) -> Result<SeriesRecord> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MediaNameError::EmptyInput);
        }

        let name = replace_with_space(strip_extension(trimmed), &['_', ',', '.']);
        let prefixed = self.strip_leading_noise(&name);
        // Length preserving: offsets into `normalized` are valid in `prefixed`.
        let normalized = replace_with_space(prefixed, &['[', ']', '(', ')', ':']);
        let folded = FoldedName::new(&normalized);

        if let Some(pattern) = self.find_unwanted(&folded) {
            debug!(input = trimmed, %pattern, "unwanted pattern");
            return Err(MediaNameError::UnwantedPattern {
                input: trimmed.to_string(),
                pattern,
            });
        }

        let anchor = self
            .find_season_pack(&folded)
            .or_else(|| self.find_episode(&folded))
            .or_else(|| self.find_date(&folded))
            .ok_or_else(|| MediaNameError::NoMatch {
                input: trimmed.to_string(),
            })?;

        debug!(
            pattern = anchor.pattern,
            anchor = anchor.span.anchor(),
            identified_by = %anchor.identified_by(),
            "found a match"
        );

        let start = folded.to_original(anchor.span.offset);
        let title = if start > 1 {
            self.title_before(prefixed, &normalized, start)
        } else {
            debug!(input = trimmed, "anchor at start of name, no title");
            String::new()
        };

        let (season, episode, end_episode) = match anchor.kind {
            AnchorKind::SeasonPack { season } => (season, 0, 0),
            AnchorKind::Episode {
                season,
                episode,
                end_episode,
            } => (season, episode, end_episode),
            AnchorKind::Date => (0, 0, 0),
        };

        Ok(SeriesRecord {
            title,
            season,
            episode,
            end_episode,
            quality: quality.classify(&normalized[start..]),
            identified_by: anchor.identified_by(),
        })
    }

    fn strip_leading_noise<'a>(&self, name: &'a str) -> &'a str {
        match self.patterns.leading_noise.find(name) {
            Some(prefix) => {
                trace!(prefix = prefix.as_str(), "stripped leading noise");
                &name[prefix.end()..]
            }
            None => name,
        }
    }

    fn find_unwanted(&self, name: &FoldedName<'_>) -> Option<String> {
        self.patterns
            .unwanted
            .iter()
            .find_map(|re| re.find(name.lowered()))
            .map(|m| m.as_str().trim().to_string())
    }

    /// A season marker not followed by an episode marker. It must occur
    /// exactly once; several distinct season markers do not make a pack.
    fn find_season_pack(&self, name: &FoldedName<'_>) -> Option<Anchor> {
        let lowered = name.lowered();
        let packs: Vec<Anchor> = self
            .patterns
            .season_pack
            .captures_iter(lowered)
            .filter(|caps| {
                let rest = caps.get(0).map_or("", |m| &lowered[m.end()..]);
                let terminated = rest.is_empty() || rest.starts_with(char::is_whitespace);
                terminated && !self.patterns.pack_episode_marker.is_match(rest)
            })
            .filter_map(|caps| self.season_anchor(name, &caps, "season-pack"))
            .collect();

        match packs.len() {
            1 => packs.into_iter().next(),
            0 => {
                trace!("no season pack marker");
                self.patterns
                    .season_pack_all
                    .captures(lowered)
                    .and_then(|caps| self.season_anchor(name, &caps, "season-all"))
            }
            n => {
                debug!(count = n, "several season markers, not a season pack");
                None
            }
        }
    }

    fn season_anchor(
        &self,
        name: &FoldedName<'_>,
        caps: &Captures<'_>,
        pattern: &'static str,
    ) -> Option<Anchor> {
        let season = caps.name("season")?.as_str().parse().ok()?;
        Some(Anchor {
            kind: AnchorKind::SeasonPack { season },
            span: MatchSpan::from_captures(name, caps)?,
            pattern,
        })
    }

    fn find_episode(&self, name: &FoldedName<'_>) -> Option<Anchor> {
        self.patterns.episodes.iter().find_map(|rule| {
            let found = guarded_captures(&rule.regex, name.lowered())
                .find_map(|caps| self.episode_anchor(name, rule, &caps));
            if found.is_none() {
                trace!(pattern = rule.name, "no episode match");
            }
            found
        })
    }

    /// Validates an episode match: the episode text must resolve to a number.
    fn episode_anchor(
        &self,
        name: &FoldedName<'_>,
        rule: &EpisodeRule,
        caps: &Captures<'_>,
    ) -> Option<Anchor> {
        let text = caps.name("episode")?.as_str();
        let episode = match resolve_episode(text) {
            Ok(episode) => episode,
            Err(err) => {
                debug!(pattern = rule.name, %err, "episode match rejected");
                return None;
            }
        };
        let season = match caps.name("season") {
            Some(m) => m.as_str().parse().ok()?,
            None => 1,
        };
        let end_episode = caps
            .name("end")
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        Some(Anchor {
            kind: AnchorKind::Episode {
                season,
                episode,
                end_episode,
            },
            span: MatchSpan::from_captures(name, caps)?,
            pattern: rule.name,
        })
    }

    fn find_date(&self, name: &FoldedName<'_>) -> Option<Anchor> {
        let lowered = name.lowered();
        self.patterns.dates.iter().find_map(|re| {
            let caps = re.captures(lowered)?;
            Some(Anchor {
                kind: AnchorKind::Date,
                span: MatchSpan::from_captures(name, &caps)?,
                pattern: "date",
            })
        })
    }

    /// Slices the title out of the text before the anchor.
    ///
    /// A second ignorable prefix (`[Group][Tag] Show ...`) is looked up in
    /// `prefixed`, which still has its brackets, and skipped.
    fn title_before(&self, prefixed: &str, normalized: &str, anchor: usize) -> String {
        let from = self
            .patterns
            .leading_noise
            .find(&prefixed[..anchor])
            .map_or(0, |m| m.end());

        let raw = &normalized[from..anchor];
        // Drop the separator right before the anchor.
        let raw = raw
            .char_indices()
            .next_back()
            .map_or(raw, |(idx, _)| &raw[..idx]);

        let title = clean_title(raw);
        if self.title_case {
            title_case(&title)
        } else {
            title
        }
    }
}
