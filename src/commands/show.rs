//! Show command - one article with its recommendations

use anyhow::{bail, Result};
use colored::*;

use crate::config;
use crate::core::DocumentKey;
use crate::storage;
use crate::ui;

const EXCERPT_CHARS: usize = 400;

pub fn run(topic: &str, name: &str, full: bool) -> Result<()> {
	let articles_path = config::articles_path();
	let recommended_path = config::recommended_path();
	if !articles_path.exists() || !recommended_path.exists() {
		ui::warn("No tables found. Run 'centroid build' first.");
		return Ok(());
	}

	let key = DocumentKey::new(topic, name);
	let articles = storage::load_articles(&articles_path)?;
	let Some(article) = storage::find_article(&articles, &key) else {
		bail!("No article {}", key);
	};

	let index = storage::load_index(&recommended_path)?;
	ui::debug(&format!(
		"Index built {} with up to {} recommendations",
		index.built_at().to_rfc3339(),
		index.limit()
	));

	ui::header(&article.title);
	println!("{}", key.to_string().dimmed());
	println!();
	let body = if full {
		article.body.clone()
	} else {
		ui::excerpt(&article.body, EXCERPT_CHARS)
	};
	println!("{}", body);

	ui::header("Recommended");
	match index.get(&key) {
		Some(recs) if !recs.is_empty() => {
			for (i, rec) in recs.iter().enumerate() {
				println!("{}", ui::ranked_entry(i + 1, &rec.key().to_string(), &rec.title, None));
			}
		}
		_ => ui::warn("No recommendations for this article"),
	}

	println!();
	Ok(())
}
