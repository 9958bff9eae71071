//! Core domain types

pub mod document;
pub mod embedding;
pub mod error;
pub mod fingerprint;
pub mod stopwords;

pub use document::{DocumentKey, DocumentRecord, RecommendationEntry};
pub use embedding::EmbeddingTable;
pub use error::{Error, Result};
pub use fingerprint::Fingerprint;
pub use stopwords::{is_stop_word, STOP_WORDS};
