//! Corpus loading: raw documents to fingerprinted records

use rayon::prelude::*;

use crate::core::{DocumentKey, DocumentRecord, EmbeddingTable, Error, Result};

use super::fingerprint::fingerprint;
use super::normalize::normalize;

/// Records built from a batch of raw documents
///
/// Documents whose identifier cannot be parsed are skipped rather than
/// aborting the batch; they are kept in `skipped` for the caller to report.
#[derive(Debug, Default)]
pub struct Corpus {
	pub records: Vec<DocumentRecord>,
	pub skipped: Vec<(String, Error)>,
}

impl Corpus {
	/// Records whose body has no embeddable word
	pub fn degenerate_count(&self) -> usize {
		self.records.iter().filter(|r| r.fingerprint.is_degenerate()).count()
	}
}

/// First line is the title, the remaining lines form the body
pub fn split_title(text: &str) -> (String, String) {
	let mut lines = text.split('\n');
	let title = lines.next().unwrap_or_default();
	let title = title.strip_suffix('\r').unwrap_or(title);
	let body = lines.collect::<Vec<_>>().join("\n");
	(title.to_string(), body.trim_matches(['\n', '\r']).to_string())
}

impl DocumentRecord {
	/// Build a record from one raw document. Only the body is fingerprinted.
	pub fn from_raw(identifier: &str, text: &str, table: &EmbeddingTable) -> Result<Self> {
		let key = DocumentKey::parse(identifier)?;
		let (title, body) = split_title(text);
		let fingerprint = fingerprint(&normalize(&body), table);

		Ok(Self {
			key,
			identifier: identifier.to_string(),
			title,
			body,
			fingerprint,
		})
	}
}

/// Fingerprint every `(identifier, text)` pair, keeping input order
pub fn load_corpus(documents: &[(String, String)], table: &EmbeddingTable) -> Corpus {
	let results: Vec<(String, Result<DocumentRecord>)> = documents
		.par_iter()
		.map(|(identifier, text)| (identifier.clone(), DocumentRecord::from_raw(identifier, text, table)))
		.collect();

	let mut corpus = Corpus::default();
	for (identifier, result) in results {
		match result {
			Ok(record) => corpus.records.push(record),
			Err(e) => corpus.skipped.push((identifier, e)),
		}
	}
	corpus
}

#[cfg(test)]
mod tests {
	use super::*;

	fn table() -> EmbeddingTable {
		EmbeddingTable::from_reader("economy 1 0\ngrowth 0 1\nfootball 5 5\n".as_bytes()).unwrap()
	}

	fn doc(id: &str, text: &str) -> (String, String) {
		(id.to_string(), text.to_string())
	}

	#[test]
	fn splits_title_from_body() {
		let (title, body) = split_title("Economy grows\n\nGrowth was strong.\nMore growth.\n");
		assert_eq!(title, "Economy grows");
		assert_eq!(body, "Growth was strong.\nMore growth.");
	}

	#[test]
	fn title_only_document_has_empty_body() {
		assert_eq!(split_title("Headline"), ("Headline".to_string(), String::new()));
		assert_eq!(split_title("Headline\r\n"), ("Headline".to_string(), String::new()));
	}

	#[test]
	fn title_is_not_fingerprinted() {
		let record = DocumentRecord::from_raw("business/001.txt", "Football\n\neconomy growth", &table()).unwrap();
		assert_eq!(record.key, DocumentKey::new("business", "001.txt"));
		assert_eq!(record.title, "Football");
		assert_eq!(record.fingerprint.as_slice(), &[0.5, 0.5]);
	}

	#[test]
	fn empty_body_gives_degenerate_record() {
		let record = DocumentRecord::from_raw("sport/002.txt", "Football\n\nthe and of", &table()).unwrap();
		assert!(record.fingerprint.is_degenerate());
	}

	#[test]
	fn skips_malformed_identifiers_and_keeps_order() {
		let documents = vec![
			doc("business/001.txt", "A\n\neconomy"),
			doc("orphan.txt", "B\n\ngrowth"),
			doc("sport/001.txt", "C\n\nfootball"),
			doc("business/001.txt", "D\n\ngrowth"),
		];
		let corpus = load_corpus(&documents, &table());

		let titles: Vec<&str> = corpus.records.iter().map(|r| r.title.as_str()).collect();
		assert_eq!(titles, vec!["A", "C", "D"]);
		assert_eq!(corpus.skipped.len(), 1);
		assert_eq!(corpus.skipped[0].0, "orphan.txt");
		assert!(matches!(corpus.skipped[0].1, Error::MalformedIdentifier(_)));
	}

	#[test]
	fn counts_degenerate_records() {
		let documents = vec![doc("a/1", "T\n\neconomy"), doc("a/2", "T\n\nnothing known")];
		assert_eq!(load_corpus(&documents, &table()).degenerate_count(), 1);
	}
}
