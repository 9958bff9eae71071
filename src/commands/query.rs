//! Query command - rank articles by closeness to free text

use std::path::Path;

use anyhow::Result;

use crate::cli::Encoding;
use crate::processing;
use crate::ui;

pub fn run(text: &str, embeddings: &Path, corpus_dir: &Path, limit: usize, encoding: Encoding) -> Result<()> {
	let (table, corpus) = super::build::load_inputs(embeddings, corpus_dir, encoding)?;

	if corpus.records.is_empty() {
		ui::warn("No articles found. Expected <corpus>/<topic>/<name>.txt");
		return Ok(());
	}

	ui::info(&format!("Searching for: \"{}\"", text));
	let query = processing::doc2vec(text, &table);
	if query.is_degenerate() {
		ui::warn("None of the query words are in the embedding table");
		return Ok(());
	}

	let results = processing::rank(&query, &corpus.records, limit);
	if results.is_empty() {
		ui::warn("No matches found");
		return Ok(());
	}

	ui::header("Closest articles");
	for (i, (distance, entry)) in results.iter().enumerate() {
		println!(
			"{}",
			ui::ranked_entry(i + 1, &entry.key().to_string(), &entry.title, Some(*distance))
		);
	}
	println!();
	Ok(())
}
