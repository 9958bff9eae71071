//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Text ===
pub const MIN_TOKEN_LEN: usize = 3;
pub const DOCUMENT_EXTENSION: &str = "txt";

// === Recommendations ===
pub const DEFAULT_RECOMMENDATIONS: usize = 5;
pub const DEFAULT_QUERY_LIMIT: usize = 10;

// === Storage ===
pub const ARTICLES_FILE: &str = "articles.msgpack";
pub const RECOMMENDED_FILE: &str = "recommended.msgpack";
pub const DATA_DIR_ENV: &str = "CENTROID_DATA_DIR";

pub fn set_data_dir(path: PathBuf) {
	let _ = CUSTOM_DATA_DIR.set(path);
}

/// Where the tables live: --data-dir, then CENTROID_DATA_DIR, then ~/data
pub fn data_dir() -> PathBuf {
	if let Some(custom) = CUSTOM_DATA_DIR.get() {
		crate::ui::debug(&format!("Using custom data dir: {}", custom.display()));
		return custom.clone();
	}

	if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
		if !env_path.is_empty() {
			crate::ui::debug(&format!("Using {}: {}", DATA_DIR_ENV, env_path));
			return PathBuf::from(env_path);
		}
	}

	dirs::home_dir()
		.map(|home| home.join("data"))
		.unwrap_or_else(|| PathBuf::from("data"))
}

pub fn articles_path() -> PathBuf {
	data_dir().join(ARTICLES_FILE)
}

pub fn recommended_path() -> PathBuf {
	data_dir().join(RECOMMENDED_FILE)
}
