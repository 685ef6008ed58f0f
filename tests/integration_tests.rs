use std::fs;
use std::path::Path;

use anyhow::Result;
use file2json::convert;
use file2json::state::Converter;
use file2json::types::{ConvertError, SourceFile};

static EXAMPLES: [(&str, Option<&str>); 5] = [
	("tests/data/simple.csv", Some("tests/data/simple.json")),
	("tests/data/quoted.csv", Some("tests/data/quoted.json")),
	("tests/data/ragged.csv", Some("tests/data/ragged.json")),
	(
		"tests/data/trailing-newline.csv",
		Some("tests/data/trailing-newline.json"),
	),
	("tests/data/does-not-exist.csv", None),
];

#[test]
fn test_all_examples() -> Result<()> {
	for (input_path, expected_path) in EXAMPLES.iter() {
		test_example_file(input_path, expected_path)?;
	}
	Ok(())
}

/// Drive the full select → convert → read → display flow for one fixture. A
/// `None` expectation means the read must fail and surface the generic
/// conversion error.
fn test_example_file(input_path: &str, expected_path: &Option<&str>) -> Result<()> {
	let path = Path::new(input_path);
	let mut converter = Converter::new();
	converter.select_file(source_file(path));
	let ticket = converter.convert().unwrap();
	converter.complete_read(ticket, fs::read_to_string(path));

	if let Some(expected_path) = expected_path {
		let expected = fs::read_to_string(expected_path)?;
		assert_eq!(converter.json(), Some(expected.as_str()), "{}", input_path);
		assert_eq!(converter.error(), None);
	} else {
		assert_eq!(
			converter.error(),
			Some(&ConvertError::ConversionFailed),
			"{}",
			input_path
		);
		assert_eq!(converter.json(), None);
	}
	Ok(())
}

fn source_file(path: &Path) -> SourceFile {
	// Metadata lookup fails for the intentionally missing fixture; the size is
	// advisory anyway.
	SourceFile::from_path(path).unwrap_or_else(|_| SourceFile::new(path.display().to_string(), 0))
}

#[test]
fn test_save_writes_json_next_to_the_input() -> Result<()> {
	let dir = std::env::temp_dir().join("file2json-save-test");
	fs::create_dir_all(&dir)?;
	let input = dir.join("people.csv");
	fs::write(&input, "Name,Age\nJohn,30")?;

	let json =
		convert::text_to_json(&fs::read_to_string(&input)?).map_err(|err| anyhow::anyhow!(err))?;
	let target = convert::save_json(&input, &json)?;

	assert_eq!(target, dir.join("people.json"));
	let written = fs::read_to_string(&target)?;
	assert_eq!(written.trim_end(), json);

	fs::remove_dir_all(&dir)?;
	Ok(())
}
