//! Persisted output tables (document table and recommendation index)

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{DocumentKey, DocumentRecord, RecommendationEntry};
use crate::processing::RecommendationIndex;
use crate::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One document as handed to presentation; the fingerprint is dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRow {
	pub topic: String,
	pub name: String,
	pub title: String,
	pub body: String,
}

impl ArticleRow {
	pub fn key(&self) -> DocumentKey {
		DocumentKey::new(self.topic.clone(), self.name.clone())
	}
}

impl From<&DocumentRecord> for ArticleRow {
	fn from(record: &DocumentRecord) -> Self {
		Self {
			topic: record.key.topic.clone(),
			name: record.key.name.clone(),
			title: record.title.clone(),
			body: record.body.clone(),
		}
	}
}

/// Article stored under `key`; the last one wins when keys repeat, as in the index
pub fn find_article<'a>(articles: &'a [ArticleRow], key: &DocumentKey) -> Option<&'a ArticleRow> {
	articles.iter().rfind(|a| &a.key() == key)
}

#[derive(Debug, Serialize, Deserialize)]
struct ArticleTable {
	version: String,
	articles: Vec<ArticleRow>,
}

#[derive(Debug, Serialize, Deserialize)]
struct IndexRow {
	key: DocumentKey,
	recommendations: Vec<RecommendationEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RecommendedTable {
	version: String,
	built_at: DateTime<Utc>,
	limit: usize,
	entries: Vec<IndexRow>,
}

impl RecommendedTable {
	fn from_index(index: &RecommendationIndex) -> Self {
		Self {
			version: VERSION.to_string(),
			built_at: index.built_at(),
			limit: index.limit(),
			entries: index
				.sorted()
				.into_iter()
				.map(|(key, recs)| IndexRow {
					key: key.clone(),
					recommendations: recs.to_vec(),
				})
				.collect(),
		}
	}
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).context("Failed to create data directory")?;
	}
	fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

fn warn_if_outdated(version: &str, path: &Path) {
	if version != VERSION {
		ui::warn(&format!(
			"{} was written by v{} (current v{}), consider rebuilding",
			path.display(),
			version,
			VERSION
		));
	}
}

pub fn save_articles(path: &Path, articles: &[ArticleRow]) -> Result<()> {
	let table = ArticleTable {
		version: VERSION.to_string(),
		articles: articles.to_vec(),
	};
	let bytes = rmp_serde::to_vec(&table).context("Failed to serialize articles")?;
	write_bytes(path, &bytes)
}

pub fn load_articles(path: &Path) -> Result<Vec<ArticleRow>> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let table: ArticleTable = rmp_serde::from_slice(&bytes).context("Failed to deserialize articles")?;
	warn_if_outdated(&table.version, path);
	Ok(table.articles)
}

pub fn save_index(path: &Path, index: &RecommendationIndex) -> Result<()> {
	let bytes = rmp_serde::to_vec(&RecommendedTable::from_index(index))
		.context("Failed to serialize recommendations")?;
	write_bytes(path, &bytes)
}

pub fn load_index(path: &Path) -> Result<RecommendationIndex> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let table: RecommendedTable =
		rmp_serde::from_slice(&bytes).context("Failed to deserialize recommendations")?;
	warn_if_outdated(&table.version, path);

	let entries: HashMap<DocumentKey, Vec<RecommendationEntry>> = table
		.entries
		.into_iter()
		.map(|row| (row.key, row.recommendations))
		.collect();

	Ok(RecommendationIndex::from_parts(entries, table.limit, table.built_at))
}

#[derive(Debug, Serialize)]
struct Export<'a> {
	articles: &'a [ArticleRow],
	recommended: RecommendedTable,
}

/// Write both tables as pretty JSON; `-` means stdout
pub fn export_json(path: &Path, articles: &[ArticleRow], index: &RecommendationIndex) -> Result<()> {
	let export = Export {
		articles,
		recommended: RecommendedTable::from_index(index),
	};
	let json = serde_json::to_string_pretty(&export)?;

	if path.to_str() == Some("-") || path.as_os_str().is_empty() {
		println!("{}", json);
	} else {
		write_bytes(path, json.as_bytes())?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::Fingerprint;

	fn corpus() -> Vec<DocumentRecord> {
		[("tech/1.txt", 0.0f32), ("tech/2.txt", 1.0), ("sport/1.txt", 8.0)]
			.iter()
			.map(|(id, x)| DocumentRecord {
				key: DocumentKey::parse(id).unwrap(),
				identifier: id.to_string(),
				title: format!("Title {}", id),
				body: "Body text".to_string(),
				fingerprint: Fingerprint::new(vec![*x, 0.0]),
			})
			.collect()
	}

	#[test]
	fn articles_survive_a_round_trip() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("articles.msgpack");
		let rows: Vec<ArticleRow> = corpus().iter().map(ArticleRow::from).collect();

		save_articles(&path, &rows).unwrap();
		assert_eq!(load_articles(&path).unwrap(), rows);
	}

	#[test]
	fn index_survives_a_round_trip() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("recommended.msgpack");
		let corpus = corpus();
		let index = RecommendationIndex::build(&corpus, 1);

		save_index(&path, &index).unwrap();
		let loaded = load_index(&path).unwrap();

		assert_eq!(loaded.len(), 3);
		assert_eq!(loaded.limit(), 1);
		assert_eq!(loaded.built_at(), index.built_at());
		for doc in &corpus {
			assert_eq!(loaded.get(&doc.key), index.get(&doc.key));
		}
		let first = loaded.get(&DocumentKey::new("tech", "1.txt")).unwrap();
		assert_eq!(first[0].name, "2.txt");
	}

	#[test]
	fn export_writes_json() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("export.json");
		let corpus = corpus();
		let rows: Vec<ArticleRow> = corpus.iter().map(ArticleRow::from).collect();

		export_json(&path, &rows, &RecommendationIndex::build(&corpus, 2)).unwrap();

		let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(value["articles"].as_array().unwrap().len(), 3);
		assert_eq!(value["recommended"]["limit"], 2);
		assert_eq!(value["recommended"]["entries"][0]["key"]["topic"], "sport");
	}

	#[test]
	fn repeated_key_resolves_to_last_article() {
		let mut rows: Vec<ArticleRow> = corpus().iter().map(ArticleRow::from).collect();
		rows.push(ArticleRow {
			topic: "tech".to_string(),
			name: "1.txt".to_string(),
			title: "Later copy".to_string(),
			body: "Replacement body".to_string(),
		});

		let key = DocumentKey::new("tech", "1.txt");
		assert_eq!(find_article(&rows, &key).unwrap().title, "Later copy");
		assert_eq!(find_article(&rows, &DocumentKey::new("tech", "2.txt")).unwrap().title, "Title tech/2.txt");
		assert!(find_article(&rows, &DocumentKey::new("world", "1.txt")).is_none());
	}

	#[test]
	fn missing_table_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		assert!(load_articles(&dir.path().join("absent.msgpack")).is_err());
	}
}
