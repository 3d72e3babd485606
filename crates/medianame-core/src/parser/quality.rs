//! # Quality classifier
//!
//! Three independent ranked tables (resolution, source, codec). Each table is
//! scanned in declared order and the first entry whose pattern matches
//! anywhere in the fragment wins, so specific tags must be listed before the
//! generic ones they overlap with.

use regex::Regex;
use tracing::trace;

use crate::error::Result;
use crate::types::{QualityComponent, QualityKind, QualityTag};

/// `(label, priority, pattern)`; a `None` pattern matches the label itself.
type EntrySpec = (&'static str, u16, Option<&'static str>);

const RESOLUTIONS: &[EntrySpec] = &[
    ("360p", 10, None),
    ("368p", 20, Some(r"368p?")),
    ("480p", 30, Some(r"480p?")),
    ("576p", 40, Some(r"576p?")),
    ("hr", 45, None),
    ("720i", 50, None),
    ("720p", 60, Some(r"(?:1280x)?720(?:p|hd)?x?(?:50)?")),
    ("1080i", 70, None),
    ("1080p", 80, Some(r"(?:1920x)?1080p?x?(?:50)?")),
    ("2160p", 90, Some(r"(?:(?:3840x)?2160p?x?(?:50)?)|4k")),
];

const SOURCES: &[EntrySpec] = &[
    ("workprint", 10, None),
    ("cam", 20, Some(r"(?:hd)?cam")),
    ("ts", 30, Some(r"(?:hd)?ts|telesync")),
    ("tc", 40, Some(r"tc|telecine")),
    ("r5", 50, Some(r"r[2-8c]")),
    ("hdrip", 60, Some(r"hd[\W_]?rip")),
    ("ppvrip", 70, Some(r"ppv[\W_]?rip")),
    ("preair", 80, None),
    ("tvrip", 90, Some(r"tv[\W_]?rip")),
    ("dsr", 100, Some(r"dsr|ds[\W_]?rip")),
    ("sdtv", 110, Some(r"(?:[sp]dtv|dvb)(?:[\W_]?rip)?")),
    ("dvdscr", 120, Some(r"(?:(?:dvd|web)[\W_]?)?scr(?:eener)?")),
    ("bdscr", 130, Some(r"bdscr(?:eener)?")),
    ("webrip", 140, Some(r"web[\W_]?rip")),
    ("hdtv", 150, Some(r"a?hdtv(?:[\W_]?rip)?")),
    ("webdl", 160, Some(r"web(?:[\W_]?(?:dl|hd))?")),
    ("dvdrip", 170, Some(r"dvd(?:[\W_]?rip)?")),
    ("remux", 175, None),
    ("bluray", 180, Some(r"b[dr][\W_]?rip|blu[\W_]?ray(?:[\W_]?rip)?")),
];

const CODECS: &[EntrySpec] = &[
    ("divx", 10, None),
    ("xvid", 20, None),
    ("h264", 30, Some(r"[hx].?264")),
    ("vp9", 35, None),
    ("h265", 40, Some(r"[hx].?265|hevc")),
    ("10bit", 50, Some(r"10.?bit|hi10p")),
];

#[derive(Debug)]
struct QualityEntry {
    label: &'static str,
    priority: u16,
    pattern: Regex,
}

/// Ranked pattern table for one quality category.
#[derive(Debug)]
struct QualityTable {
    kind: QualityKind,
    entries: Vec<QualityEntry>,
}

impl QualityTable {
    fn compile(kind: QualityKind, specs: &[EntrySpec]) -> Result<Self> {
        let entries = specs
            .iter()
            .map(|&(label, priority, pattern)| {
                let pattern = match pattern {
                    Some(p) => format!("(?i){p}"),
                    None => format!("(?i){}", regex::escape(label)),
                };
                Ok(QualityEntry {
                    label,
                    priority,
                    pattern: Regex::new(&pattern)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { kind, entries })
    }

    /// First entry, in declared order, whose pattern occurs in `fragment`.
    fn first_match(&self, fragment: &str) -> Option<QualityComponent> {
        let entry = self.entries.iter().find(|entry| {
            let hit = entry.pattern.is_match(fragment);
            trace!(kind = %self.kind, label = entry.label, hit, "quality pattern");
            hit
        })?;

        Some(QualityComponent {
            kind: self.kind,
            label: entry.label.to_string(),
            priority: entry.priority,
        })
    }

    fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.label)
    }
}

/// Classifies resolution, source and codec in a text fragment.
#[derive(Debug)]
pub struct QualityClassifier {
    resolutions: QualityTable,
    sources: QualityTable,
    codecs: QualityTable,
}

impl QualityClassifier {
    /// Compiles the three quality tables.
    ///
    /// # Errors
    ///
    /// Returns `MediaNameError::RegexError` if any pattern fails to compile
    /// (should never happen with the static tables defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            resolutions: QualityTable::compile(QualityKind::Resolution, RESOLUTIONS)?,
            sources: QualityTable::compile(QualityKind::Source, SOURCES)?,
            codecs: QualityTable::compile(QualityKind::Codec, CODECS)?,
        })
    }

    /// Classifies `fragment`. Never fails: categories without a match are
    /// simply left empty.
    pub fn classify(&self, fragment: &str) -> QualityTag {
        let fragment = fragment.to_lowercase();
        QualityTag {
            resolution: self.resolutions.first_match(&fragment),
            source: self.sources.first_match(&fragment),
            codec: self.codecs.first_match(&fragment),
        }
    }

    /// Every label the classifier can emit for `kind`.
    pub fn labels(&self, kind: QualityKind) -> Vec<&'static str> {
        match kind {
            QualityKind::Resolution => self.resolutions.labels().collect(),
            QualityKind::Source => self.sources.labels().collect(),
            QualityKind::Codec => self.codecs.labels().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> QualityClassifier {
        QualityClassifier::new().unwrap()
    }

    #[test]
    fn resolution_variants() {
        let c = classifier();
        for (input, expected) in [
            ("show 720p", "720p"),
            ("show 1280x720", "720p"),
            ("movie 1080p", "1080p"),
            ("movie 1920x1080", "1080p"),
            ("movie 2160p", "2160p"),
            ("movie 4K", "2160p"),
            ("movie 1080i", "1080i"),
            ("old 480", "480p"),
        ] {
            assert_eq!(c.classify(input).resolution_label(), expected, "input: {input}");
        }
    }

    #[test]
    fn source_variants() {
        let c = classifier();
        for (input, expected) in [
            ("name web-dl", "webdl"),
            ("name WEBRip", "webrip"),
            ("name WEB", "webdl"),
            ("name HDTV", "hdtv"),
            ("name BluRay", "bluray"),
            ("name BDRip", "bluray"),
            ("name DVDRip", "dvdrip"),
            ("name DVDSCR", "dvdscr"),
            ("name remux", "remux"),
            ("name hdcam", "cam"),
        ] {
            assert_eq!(c.classify(input).source_label(), expected, "input: {input}");
        }
    }

    #[test]
    fn codec_variants() {
        let c = classifier();
        for (input, expected) in [
            ("x264", "h264"),
            ("H.264", "h264"),
            ("x265", "h265"),
            ("HEVC", "h265"),
            ("XviD", "xvid"),
            ("10bit", "10bit"),
        ] {
            assert_eq!(c.classify(input).codec_label(), expected, "input: {input}");
        }
    }

    #[test]
    fn declared_order_breaks_ties() {
        let c = classifier();
        // "webrip" also matches the later, more generic "web" entry
        assert_eq!(c.classify("webrip").source_label(), "webrip");
        // "hdtv" is listed before the bare "web" pattern
        assert_eq!(c.classify("hdtv web").source_label(), "hdtv");
    }

    #[test]
    fn priorities_follow_table_rank() {
        let c = classifier();
        let tag = c.classify("1080p bluray x264");
        assert_eq!(tag.resolution.as_ref().map(|r| r.priority), Some(80));
        assert_eq!(tag.source.as_ref().map(|s| s.priority), Some(180));
        assert_eq!(tag.codec.as_ref().map(|s| s.kind), Some(QualityKind::Codec));
        assert_eq!(tag.to_string(), "1080p bluray");
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let c = classifier();
        let tag = c.classify("");
        assert!(tag.is_empty());
        assert_eq!(tag.to_string(), "");

        let tag = c.classify("s02e05 hevc");
        assert!(tag.is_empty());
        assert_eq!(tag.codec_label(), "h265");
    }

    #[test]
    fn labels_are_declared_vocabulary() {
        let c = classifier();
        assert_eq!(c.labels(QualityKind::Resolution).len(), RESOLUTIONS.len());
        assert!(c.labels(QualityKind::Source).contains(&"bluray"));
        assert!(c.labels(QualityKind::Codec).contains(&"h265"));
    }
}
