//! Corpus discovery and table persistence

pub mod discover;
pub mod tables;

pub use discover::{discover, Discovery};
pub use tables::{export_json, find_article, load_articles, load_index, save_articles, save_index, ArticleRow};
