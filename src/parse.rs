//! Tabular text parsing.
//!
//! Splits raw text into lines, derives the header from line 0, and maps each
//! subsequent line to a [`Record`]. Lines are tokenized with quote support, so
//! a comma inside a double-quoted field stays within its cell.

use csv::Trim;

use crate::types::{ConvertError, Dataset, Header, Record};

/// Parse
///
/// Transform raw text content into a `Dataset`. Line 0 supplies the header;
/// every later line becomes exactly one record, in input order. Ragged rows
/// are padded with empty strings rather than rejected, and tokens beyond the
/// header width are dropped. An empty trailing line still yields an (all
/// empty) record. Any tokenizer failure collapses into the generic
/// `ConversionFailed` error.
pub fn parse(content: &str) -> Result<Dataset, ConvertError> {
	parse_lines(content).map_err(|err| {
		log::debug!("Parse failed: {}", err);
		ConvertError::ConversionFailed
	})
}

fn parse_lines(content: &str) -> Result<Dataset, csv::Error> {
	let mut lines = content.split('\n');
	// `split` always yields at least one item, so a header line always exists
	// (possibly empty).
	let header: Header = match lines.next() {
		Some(line) => split_line(line)?,
		None => Vec::new(),
	};

	let mut records = Vec::new();
	for line in lines {
		records.push(to_record(&header, split_line(line)?));
	}
	Ok(Dataset(records))
}

/// Split Line
///
/// Tokenize a single line on commas, honoring double quotes and trimming
/// surrounding whitespace from each token. Each line gets its own reader so
/// lines stay independent of one another (no multi-line quoted fields, no
/// blank-line skipping). Only `'\n'` terminates a record: a carriage return
/// in the middle of a line stays inside its cell, while the trailing `'\r'`
/// of a CRLF ending is removed by the trim.
fn split_line(line: &str) -> Result<Vec<String>, csv::Error> {
	let mut rdr = csv::ReaderBuilder::new()
		.has_headers(false)
		.flexible(true)
		.terminator(csv::Terminator::Any(b'\n'))
		.trim(Trim::All)
		.from_reader(line.as_bytes());
	match rdr.records().next() {
		Some(record) => Ok(record?.iter().map(String::from).collect()),
		// An empty line yields no record at all; `to_record` pads it out.
		None => Ok(Vec::new()),
	}
}

/// To Record
///
/// Pair each header with the token at the same position, or an empty string
/// when the row is shorter than the header. Duplicate header names collapse
/// into a single field holding the last value (see `Record::insert`).
fn to_record(header: &Header, tokens: Vec<String>) -> Record {
	let mut record = Record::new();
	for (index, field) in header.iter().enumerate() {
		let value = tokens.get(index).cloned().unwrap_or_default();
		record.insert(field.clone(), value);
	}
	record
}
