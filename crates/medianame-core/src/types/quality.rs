use std::fmt;

use serde::{Deserialize, Serialize};

/// The independent categories a quality tag is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityKind {
    /// Frame size: `720p`, `1080p`, `2160p`, ...
    Resolution,
    /// Release source: `webdl`, `hdtv`, `bluray`, ...
    Source,
    /// Video codec: `h264`, `h265`, `xvid`, ...
    Codec,
}

impl fmt::Display for QualityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution => write!(f, "resolution"),
            Self::Source => write!(f, "source"),
            Self::Codec => write!(f, "codec"),
        }
    }
}

/// A single classified quality component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualityComponent {
    /// Which table the component came from.
    pub kind: QualityKind,
    /// Canonical label, e.g. `"1080p"` or `"webdl"`.
    pub label: String,
    /// Rank of the entry inside its table (higher is better quality).
    pub priority: u16,
}

/// Resolution, source and codec detected in a filename fragment.
///
/// Any category may be missing; a missing category reads as an empty label.
/// The display form joins resolution and source (codec is kept on the value
/// but not displayed), e.g. `"720p hdtv"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityTag {
    /// Detected resolution.
    pub resolution: Option<QualityComponent>,
    /// Detected source.
    pub source: Option<QualityComponent>,
    /// Detected codec.
    pub codec: Option<QualityComponent>,
}

impl QualityTag {
    /// Resolution label, or `""` when none was found.
    #[must_use]
    pub fn resolution_label(&self) -> &str {
        label_of(self.resolution.as_ref())
    }

    /// Source label, or `""` when none was found.
    #[must_use]
    pub fn source_label(&self) -> &str {
        label_of(self.source.as_ref())
    }

    /// Codec label, or `""` when none was found.
    #[must_use]
    pub fn codec_label(&self) -> &str {
        label_of(self.codec.as_ref())
    }

    /// Returns `true` when neither a resolution nor a source was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolution.is_none() && self.source.is_none()
    }
}

fn label_of(component: Option<&QualityComponent>) -> &str {
    component.map_or("", |c| c.label.as_str())
}

impl fmt::Display for QualityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = format!("{} {}", self.resolution_label(), self.source_label());
        f.write_str(joined.trim())
    }
}
