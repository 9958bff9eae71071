//! Text to fingerprint to recommendation pipeline

pub mod corpus;
pub mod fingerprint;
pub mod normalize;
pub mod recommend;

pub use corpus::{load_corpus, split_title, Corpus};
pub use fingerprint::{doc2vec, fingerprint};
pub use normalize::{is_stop_word, normalize, normalize_bytes};
pub use recommend::{rank, recommend, RecommendationIndex};
