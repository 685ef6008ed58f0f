//! Program entrypoint and argument parsing.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

use file2json::convert;
use file2json::state::{Converter, ViewState};
use file2json::types::{SourceFile, ADVERTISED_MAX_SIZE};

static USAGE: &str = "Usage: file2json <FILE> [--save]\n\n\
	Convert a comma-delimited CSV/TXT file to formatted JSON on stdout.\n\
	With --save, write the output next to the input as <name>.json instead.";

struct Opts {
	input: PathBuf,
	save: bool,
}

/// Parse Args
///
/// Parse a single positional argument (the input file) plus an optional
/// `--save` flag, returning an error if anything else is present. (Skipping a
/// dependency on `Clap` or equivalent given how simple this is).
fn parse_args() -> Result<Opts> {
	let mut input = None;
	let mut save = false;
	for arg in env::args().skip(1) {
		match arg.as_str() {
			"--save" => save = true,
			_ if input.is_none() => input = Some(PathBuf::from(arg)),
			_ => bail!(USAGE), // Reject any unexpected args, just to be sure
		}
	}
	Ok(Opts {
		input: input.ok_or(anyhow!(USAGE))?,
		save,
	})
}

fn main() -> Result<()> {
	env_logger::init();
	let opts = parse_args()?;

	let file = SourceFile::from_path(&opts.input)?;
	if !file.has_accepted_extension() {
		log::warn!(
			"'{}' is not an advertised file type; trying anyway",
			file.name
		);
	}
	if file.size > ADVERTISED_MAX_SIZE {
		log::warn!("'{}' exceeds the advertised 10MB limit", file.name);
	}

	let mut converter = Converter::new();
	converter.select_file(file);
	let ticket = converter.convert().ok_or(anyhow!("No file selected"))?;
	converter.complete_read(ticket, fs::read_to_string(&opts.input));

	match converter.state() {
		ViewState::Converted { json, .. } => {
			if opts.save {
				let target = convert::save_json(&opts.input, json)?;
				println!("Wrote {}", target.display());
			} else {
				println!("{}", json);
			}
			Ok(())
		}
		ViewState::Errored { error, .. } => bail!("{}", error),
		_ => bail!("Conversion did not complete"),
	}
}
