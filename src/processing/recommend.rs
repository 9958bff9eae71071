//! Exhaustive nearest-neighbor ranking over document fingerprints

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::core::{DocumentKey, DocumentRecord, Fingerprint, RecommendationEntry};

/// Ascending order with NaN after every real number
fn nan_last(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
		(false, true) => Ordering::Less,
		(true, false) => Ordering::Greater,
		(true, true) => Ordering::Equal,
	}
}

/// Candidates sorted by distance from `query`, ties kept in corpus order.
/// Degenerate candidates (NaN distance) are dropped.
fn ranked<'a, F>(query: &Fingerprint, corpus: &'a [DocumentRecord], keep: F) -> Vec<(f32, &'a DocumentRecord)>
where
	F: Fn(&DocumentRecord) -> bool,
{
	let mut distances: Vec<(f32, &DocumentRecord)> = corpus
		.iter()
		.filter(|&doc| keep(doc))
		.map(|doc| (query.distance(&doc.fingerprint), doc))
		.collect();

	distances.sort_by(|a, b| nan_last(a.0, b.0));
	distances.retain(|(d, _)| !d.is_nan());
	distances
}

/// The `n` documents closest to `target`, never including `target` itself
pub fn recommend(target: &DocumentRecord, corpus: &[DocumentRecord], n: usize) -> Vec<RecommendationEntry> {
	if n == 0 {
		return Vec::new();
	}

	ranked(&target.fingerprint, corpus, |doc| doc.key != target.key)
		.into_iter()
		.take(n)
		.map(|(_, doc)| doc.entry())
		.collect()
}

/// The `n` documents closest to an arbitrary fingerprint, with distances
pub fn rank(query: &Fingerprint, corpus: &[DocumentRecord], n: usize) -> Vec<(f32, RecommendationEntry)> {
	ranked(query, corpus, |_| true)
		.into_iter()
		.take(n)
		.map(|(d, doc)| (d, doc.entry()))
		.collect()
}

/// Precomputed recommendations for every document of a corpus
#[derive(Debug, Clone)]
pub struct RecommendationIndex {
	entries: HashMap<DocumentKey, Vec<RecommendationEntry>>,
	limit: usize,
	built_at: DateTime<Utc>,
	collisions: usize,
}

impl RecommendationIndex {
	/// Rank the whole corpus against each document, O(M²) distances.
	/// When two records share a key the later one wins.
	pub fn build(corpus: &[DocumentRecord], n: usize) -> Self {
		let lists: Vec<(DocumentKey, Vec<RecommendationEntry>)> = corpus
			.par_iter()
			.map(|doc| (doc.key.clone(), recommend(doc, corpus, n)))
			.collect();

		let mut entries = HashMap::with_capacity(lists.len());
		let mut collisions = 0;
		for (key, list) in lists {
			if entries.insert(key, list).is_some() {
				collisions += 1;
			}
		}

		Self {
			entries,
			limit: n,
			built_at: Utc::now(),
			collisions,
		}
	}

	/// Reassemble an index read back from storage
	pub fn from_parts(
		entries: HashMap<DocumentKey, Vec<RecommendationEntry>>,
		limit: usize,
		built_at: DateTime<Utc>,
	) -> Self {
		Self {
			entries,
			limit,
			built_at,
			collisions: 0,
		}
	}

	pub fn get(&self, key: &DocumentKey) -> Option<&[RecommendationEntry]> {
		self.entries.get(key).map(Vec::as_slice)
	}

	/// Entries sorted by key
	pub fn sorted(&self) -> Vec<(&DocumentKey, &[RecommendationEntry])> {
		let mut items: Vec<_> = self.entries.iter().map(|(k, v)| (k, v.as_slice())).collect();
		items.sort_by(|a, b| a.0.cmp(b.0));
		items
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Maximum list length requested at build time
	pub fn limit(&self) -> usize {
		self.limit
	}

	pub fn built_at(&self) -> DateTime<Utc> {
		self.built_at
	}

	/// Documents dropped because a later record reused their key
	pub fn collisions(&self) -> usize {
		self.collisions
	}
}
