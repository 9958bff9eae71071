//! List command - article titles grouped by topic

use anyhow::Result;
use colored::*;

use crate::config;
use crate::storage;
use crate::ui;

pub fn run(topic: Option<&str>) -> Result<()> {
	let path = config::articles_path();
	if !path.exists() {
		ui::warn("No article table found. Run 'centroid build' first.");
		return Ok(());
	}

	let mut articles = storage::load_articles(&path)?;
	if let Some(topic) = topic {
		articles.retain(|a| a.topic == topic);
	}

	if articles.is_empty() {
		ui::warn("No matching articles");
		return Ok(());
	}

	articles.sort_by(|a, b| a.key().cmp(&b.key()));

	let mut current = None;
	for article in &articles {
		if current != Some(&article.topic) {
			ui::header(&article.topic);
			current = Some(&article.topic);
		}
		println!("  {} {}", article.name.dimmed(), article.title.bright_white());
	}

	println!();
	ui::success(&format!("{} articles", articles.len()));
	Ok(())
}
