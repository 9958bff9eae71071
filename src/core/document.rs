//! Corpus documents and recommendation entries

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::fingerprint::Fingerprint;

/// `(topic, name)` composite key, e.g. `tech/001.txt` -> `("tech", "001.txt")`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentKey {
	pub topic: String,
	pub name: String,
}

impl DocumentKey {
	pub fn new(topic: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			topic: topic.into(),
			name: name.into(),
		}
	}

	/// Split an identifier at its first `/`: topic before, name after
	pub fn parse(identifier: &str) -> Result<Self> {
		let (topic, name) = identifier
			.split_once('/')
			.ok_or_else(|| Error::MalformedIdentifier(identifier.to_string()))?;
		Ok(Self::new(topic, name))
	}
}

impl fmt::Display for DocumentKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.topic, self.name)
	}
}

/// One article with its fingerprint
#[derive(Debug, Clone)]
pub struct DocumentRecord {
	pub key: DocumentKey,
	pub identifier: String,
	pub title: String,
	pub body: String,
	pub fingerprint: Fingerprint,
}

impl DocumentRecord {
	pub fn entry(&self) -> RecommendationEntry {
		RecommendationEntry {
			topic: self.key.topic.clone(),
			name: self.key.name.clone(),
			title: self.title.clone(),
		}
	}
}

/// A recommended article as shown to readers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
	pub topic: String,
	pub name: String,
	pub title: String,
}

impl RecommendationEntry {
	pub fn key(&self) -> DocumentKey {
		DocumentKey::new(self.topic.clone(), self.name.clone())
	}
}
