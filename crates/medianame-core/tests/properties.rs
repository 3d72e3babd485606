//! Integration tests for the public parsing API.
//!
//! Tests cover:
//! - Reference filenames for movies, series and quality
//! - Title invariants (no brackets, underscores or doubled spaces)
//! - Re-parsing a title yields the same title
//! - English number words and quality totality
//! - Sharing one parser across threads

use medianame_core::{
    IdentifiedBy, MediaNameError, MediaNameParser, ParserConfig, QualityClassifier, QualityKind,
};

// ========== TEST FIXTURES ==========

fn parser() -> MediaNameParser {
    MediaNameParser::new(ParserConfig::new().with_max_year(2030)).unwrap()
}

const MOVIE_NAMES: &[&str] = &[
    "Movie.Title.2015.BluRay.x264.mp4",
    "[Group] Movie Name (2010) 720p.mkv",
    "The_Movie_Name_2003_DVDRip.avi",
    "Movie Name (Extended) [1080p].mkv",
    "Movie-Name-2015",
    "Just A Title",
];

const SERIES_NAMES: &[&str] = &[
    "Show.Name.S02E05.720p.HEVC.mkv",
    "show.name.1x05.avi",
    "[Group] Show Name - S01E02 - Pilot [720p].mkv",
    "[Group][720p] Show Name - S01E02.mkv",
    "Show_Name_(US)_S01E03.mkv",
    "Documentary Series 3 4 of 6.avi",
    "The.Daily.Show.2015.03.21.HDTV.x264.mp4",
];

fn assert_clean_title(title: &str, input: &str) {
    for c in ['[', ']', '(', ')', '_'] {
        assert!(!title.contains(c), "{c:?} in title {title:?} from {input:?}");
    }
    assert!(!title.contains("  "), "doubled space in {title:?} from {input:?}");
    assert_eq!(
        title,
        title.trim_matches(|c| c == ' ' || c == '-'),
        "untrimmed title from {input:?}"
    );
}

// ========== REFERENCE NAMES ==========

#[test]
fn test_reference_series() {
    let p = parser();

    let r = p.parse_series("Show.Name.S02E05.720p.HEVC.mkv").unwrap();
    assert_eq!(r.title, "Show Name");
    assert_eq!((r.season, r.episode), (2, 5));
    assert_eq!(r.quality.resolution_label(), "720p");

    let r = p.parse_series("show.name.1x05.avi").unwrap();
    assert_eq!((r.season, r.episode), (1, 5));
    assert_eq!(r.identified_by, IdentifiedBy::Episode);
}

#[test]
fn test_reference_unwanted() {
    let err = parser()
        .parse_series("Some.Show.Season.3.Complete.mkv")
        .unwrap_err();
    assert!(matches!(err, MediaNameError::UnwantedPattern { .. }));
}

#[test]
fn test_reference_movie() {
    let r = parser().parse_movie("Movie.Title.2015.BluRay.x264.mp4");
    assert_eq!(r.title, "Movie Title");
    assert_eq!(r.year, Some(2015));
    assert_eq!(r.quality.source_label(), "bluray");
}

#[test]
fn test_parenthesised_country_stays_out_of_title() {
    let r = parser().parse_series("Show_Name_(US)_S01E03.mkv").unwrap();
    assert_eq!(r.title, "Show Name US");
    assert_eq!(r.episode, 3);
}

// ========== TITLE INVARIANTS ==========

#[test]
fn test_movie_titles_are_clean() {
    let p = parser();
    for input in MOVIE_NAMES {
        assert_clean_title(&p.parse_movie(input).title, input);
    }
}

#[test]
fn test_series_titles_are_clean() {
    let p = parser();
    for input in SERIES_NAMES {
        let record = p.parse_series(input).unwrap();
        assert_clean_title(&record.title, input);
    }
}

#[test]
fn test_movie_title_reparse_is_stable() {
    let p = parser();
    for input in MOVIE_NAMES {
        let title = p.parse_movie(input).title;
        assert_eq!(p.parse_movie(&title).title, title, "from {input:?}");
    }
}

#[test]
fn test_series_title_reparse_is_stable() {
    let p = parser();
    for input in SERIES_NAMES {
        let title = p.parse_series(input).unwrap().title;
        let again = p.parse_series(&format!("{title} S01E02")).unwrap();
        assert_eq!(again.title, title, "from {input:?}");
    }
}

// ========== NUMBERS & QUALITY ==========

#[test]
fn test_english_number_words_map_to_rank() {
    let p = parser();
    let words = [
        "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    ];
    for (rank, word) in words.iter().enumerate() {
        let r = p
            .parse_series(&format!("Mini.Series.Part.{word}.avi"))
            .unwrap();
        assert_eq!(r.episode as usize, rank + 1, "word {word}");
        assert_eq!(r.season, 1);
        assert_eq!(r.title, "Mini Series");
    }
}

#[test]
fn test_classify_only_returns_declared_labels() {
    let classifier = QualityClassifier::new().unwrap();
    let resolutions = classifier.labels(QualityKind::Resolution);
    let sources = classifier.labels(QualityKind::Source);
    let codecs = classifier.labels(QualityKind::Codec);

    for fragment in [
        "",
        "no quality here",
        "1080p WEB-DL x264",
        "2160p BluRay REMUX HEVC",
        "DVDSCR XviD",
        "HDTV 720p 10bit",
        "ğüşİ 4K",
    ] {
        let tag = classifier.classify(fragment);
        let res = tag.resolution_label();
        let src = tag.source_label();
        let codec = tag.codec_label();
        let declared = |labels: &[&str], label: &str| labels.iter().any(|l| *l == label);
        assert!(res.is_empty() || declared(&resolutions, res), "{fragment:?}");
        assert!(src.is_empty() || declared(&sources, src), "{fragment:?}");
        assert!(codec.is_empty() || declared(&codecs, codec), "{fragment:?}");
    }
}

// ========== CONCURRENCY ==========

#[test]
fn test_parser_shared_across_threads() {
    let p = parser();
    std::thread::scope(|scope| {
        for input in SERIES_NAMES {
            let p = &p;
            scope.spawn(move || {
                assert!(p.parse_series(input).is_ok(), "{input:?}");
            });
        }
    });
}
