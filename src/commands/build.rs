//! Build command - fingerprint a corpus and precompute recommendations

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::cli::Encoding;
use crate::config;
use crate::core::EmbeddingTable;
use crate::processing::{self, Corpus, RecommendationIndex};
use crate::storage::{self, ArticleRow};
use crate::ui;

/// Load the embedding table, then read and fingerprint the corpus.
/// Embedding failures abort; unreadable or malformed documents are skipped.
pub fn load_inputs(embeddings: &Path, corpus_dir: &Path, encoding: Encoding) -> Result<(EmbeddingTable, Corpus)> {
	ui::info(&format!("Loading embeddings from {}", ui::path_link(embeddings, 60)));
	let load_start = Instant::now();
	let table = EmbeddingTable::load(embeddings)
		.with_context(|| format!("Failed to load embeddings from {}", embeddings.display()))?;
	ui::success(&format!(
		"Loaded {} vectors ({}D) in {:.1}s",
		table.len(),
		table.dim(),
		load_start.elapsed().as_secs_f32()
	));

	ui::info(&format!("Reading articles from {}", ui::path_link(corpus_dir, 60)));
	let discovery = storage::discover(corpus_dir, encoding)?;
	for error in &discovery.errors {
		ui::warn(error);
	}

	let corpus = processing::load_corpus(&discovery.documents, &table);
	for (identifier, error) in &corpus.skipped {
		ui::warn(&format!("Skipped {}: {}", identifier, error));
	}

	let degenerate = corpus.degenerate_count();
	if degenerate > 0 {
		ui::warn(&format!(
			"{} articles have no words in the embedding table and will not be recommended",
			degenerate
		));
	}
	ui::debug(&format!("Fingerprinted {} articles", corpus.records.len()));

	Ok((table, corpus))
}

pub fn run(
	embeddings: &Path,
	corpus_dir: &Path,
	count: usize,
	encoding: Encoding,
	export: Option<&Path>,
) -> Result<()> {
	let start = Instant::now();

	let (_table, corpus) = load_inputs(embeddings, corpus_dir, encoding)?;

	if corpus.records.is_empty() {
		ui::warn("No articles found. Expected <corpus>/<topic>/<name>.txt");
		return Ok(());
	}

	ui::success(&format!("Loaded {} articles", corpus.records.len()));
	ui::info(&format!("Ranking {} articles, keeping {} each", corpus.records.len(), count));

	let rank_start = Instant::now();
	let index = RecommendationIndex::build(&corpus.records, count);
	ui::debug(&format!("Ranking took {:.2}s", rank_start.elapsed().as_secs_f32()));

	if index.collisions() > 0 {
		ui::warn(&format!(
			"{} articles share a topic/name with a later one; the later one was kept",
			index.collisions()
		));
	}

	let rows: Vec<ArticleRow> = corpus.records.iter().map(ArticleRow::from).collect();

	let articles_path = config::articles_path();
	let recommended_path = config::recommended_path();
	storage::save_articles(&articles_path, &rows)?;
	storage::save_index(&recommended_path, &index)?;
	ui::debug(&format!("Wrote {}", articles_path.display()));
	ui::debug(&format!("Wrote {}", recommended_path.display()));

	if let Some(export_path) = export {
		storage::export_json(export_path, &rows, &index)?;
		if export_path.to_str() != Some("-") {
			ui::success(&format!("Exported to {}", export_path.display()));
		}
	}

	println!();
	ui::success(&format!(
		"Built recommendations for {} articles in {:.1}s",
		index.len(),
		start.elapsed().as_secs_f32()
	));
	ui::info(&format!("Tables saved to {}", ui::path_link(&config::data_dir(), 60)));

	Ok(())
}
