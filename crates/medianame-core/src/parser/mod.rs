pub mod movie;
pub mod normalize;
pub mod numbers;
pub mod patterns;
pub mod quality;
pub mod series;
pub mod tokenizer;
pub mod unified;

pub use movie::MovieParser;
pub use quality::QualityClassifier;
pub use series::SeriesParser;
pub use tokenizer::{Token, Tokenizer};
pub use unified::{MediaNameParser, ParserConfig, classify_quality, parse_movie, parse_series};
