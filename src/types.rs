//! Global type definitions.

use std::fs;
use std::io;
use std::path::Path;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Extensions the converter advertises support for. Excel files are listed for
/// parity with the upload hint, but they are read as plain text like everything
/// else; a real `.xlsx` will fail UTF-8 decoding and surface as a conversion
/// error.
pub static ACCEPTED_EXTENSIONS: [&str; 4] = ["xlsx", "xls", "csv", "txt"];

/// Advertised upper bound on input size (10MB). Advisory only, never enforced.
pub const ADVERTISED_MAX_SIZE: u64 = 10 * 1024 * 1024;

/// Ordered field names taken from the first input line.
pub type Header = Vec<String>;

/// A user-selected input file: its name and size. The content is obtained
/// separately by the platform read capability (see [`crate::state`]).
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
	pub name: String,
	pub size: u64,
}

impl SourceFile {
	pub fn new(name: impl Into<String>, size: u64) -> Self {
		Self {
			name: name.into(),
			size,
		}
	}

	/// Build a `SourceFile` from filesystem metadata.
	pub fn from_path(path: &Path) -> io::Result<Self> {
		let meta = fs::metadata(path)?;
		let name = match path.file_name() {
			Some(name) => name.to_string_lossy().into_owned(),
			None => path.display().to_string(),
		};
		Ok(Self::new(name, meta.len()))
	}

	/// Whether the file name carries one of the advertised extensions.
	/// Informational only; selection is never rejected on this basis.
	pub fn has_accepted_extension(&self) -> bool {
		Path::new(&self.name)
			.extension()
			.and_then(|ext| ext.to_str())
			.map_or(false, |ext| {
				ACCEPTED_EXTENSIONS
					.iter()
					.any(|accepted| accepted.eq_ignore_ascii_case(ext))
			})
	}
}

/// One parsed row: field names mapped to trimmed cell values, in header order.
/// All values are strings; no type inference is performed.
///
/// Duplicate header names keep the position of their first occurrence but take
/// the value of the last, matching plain object assignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(Vec<(String, String)>);

impl Record {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a field, overwriting the value in place if the name is already
	/// present.
	pub fn insert(&mut self, field: String, value: String) {
		match self.0.iter_mut().find(|(name, _)| *name == field) {
			Some((_, existing)) => *existing = value,
			None => self.0.push((field, value)),
		}
	}

	pub fn get(&self, field: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(name, _)| name == field)
			.map(|(_, value)| value.as_str())
	}

	/// Field names in insertion (header) order.
	pub fn fields(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|(name, _)| name.as_str())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Serialize for Record {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (field, value) in &self.0 {
			map.serialize_entry(field, value)?;
		}
		map.end()
	}
}

/// All parsed rows, one per non-header input line, in input line order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset(pub Vec<Record>);

impl Dataset {
	pub fn records(&self) -> &[Record] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// The two user-visible failures. Underlying causes are logged at debug level
/// and never surfaced in the message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
	#[error("Please select a file to convert.")]
	NoFileSelected,
	#[error("Error converting file. Please ensure it's a valid CSV or text file.")]
	ConversionFailed,
}
