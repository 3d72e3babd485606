pub mod episode;
pub mod quality;
pub mod result;

pub use episode::IdentifiedBy;
pub use quality::{QualityComponent, QualityKind, QualityTag};
pub use result::{MovieRecord, SeriesRecord};
