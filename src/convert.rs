//! Dataset serialization and JSON persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::parse;
use crate::types::{ConvertError, Dataset};

/// To JSON
///
/// Render a dataset as human-readable JSON with 2-space indentation. Record
/// field order and dataset order are preserved exactly as parsed, and every
/// value stays a string.
pub fn to_json(dataset: &Dataset) -> Result<String, ConvertError> {
	serde_json::to_string_pretty(dataset).map_err(|err| {
		log::debug!("Serialization failed: {}", err);
		ConvertError::ConversionFailed
	})
}

/// Text To JSON
///
/// The full pure pipeline: parse raw text content and serialize the result.
pub fn text_to_json(content: &str) -> Result<String, ConvertError> {
	to_json(&parse::parse(content)?)
}

/// JSON Filename
///
/// Derive the output name for a converted file: the input name with its
/// extension replaced by `.json`. Also accepts a full path, keeping the
/// directory part intact.
pub fn json_filename(name: impl AsRef<Path>) -> PathBuf {
	name.as_ref().with_extension("json")
}

/// Save JSON
///
/// Persist converted JSON next to the input file under the derived name,
/// returning the path written to.
pub fn save_json(input: &Path, json: &str) -> io::Result<PathBuf> {
	let target = json_filename(input);
	fs::write(&target, format!("{}\n", json))?;
	Ok(target)
}
