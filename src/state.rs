//! Selection and conversion state.
//!
//! The view state is a tagged union, so a converted result and an error can
//! never be populated at the same time. File reads are modeled as tickets:
//! the caller performs the (possibly asynchronous) read and reports back, and
//! a ticket superseded by a newer selection is dropped on completion so a
//! stale read can never overwrite newer state.

use std::io;

use crate::convert;
use crate::types::{ConvertError, SourceFile};

/// The four states of the converter, exactly one of which holds at any time.
#[derive(Debug)]
pub enum ViewState {
	NoFileSelected,
	FileSelected(SourceFile),
	Converted { file: SourceFile, json: String },
	Errored {
		// Absent only when conversion was requested with no selection.
		file: Option<SourceFile>,
		error: ConvertError,
	},
}

/// Proof of the single live pending read. Not `Clone`: completing a read
/// consumes the ticket, and only the most recently issued ticket is honored.
#[derive(Debug)]
pub struct ReadTicket {
	generation: u64,
}

/// Drives the select → convert → display flow.
pub struct Converter {
	state: ViewState,
	generation: u64,
}

impl Converter {
	pub fn new() -> Self {
		Self {
			state: ViewState::NoFileSelected,
			generation: 0,
		}
	}

	pub fn state(&self) -> &ViewState {
		&self.state
	}

	/// The converted JSON, if the last conversion succeeded.
	pub fn json(&self) -> Option<&str> {
		match &self.state {
			ViewState::Converted { json, .. } => Some(json),
			_ => None,
		}
	}

	/// The displayed error, if the last conversion failed.
	pub fn error(&self) -> Option<&ConvertError> {
		match &self.state {
			ViewState::Errored { error, .. } => Some(error),
			_ => None,
		}
	}

	pub fn selected_file(&self) -> Option<&SourceFile> {
		match &self.state {
			ViewState::NoFileSelected => None,
			ViewState::FileSelected(file) => Some(file),
			ViewState::Converted { file, .. } => Some(file),
			ViewState::Errored { file, .. } => file.as_ref(),
		}
	}

	/// Select File
	///
	/// Move to `FileSelected` from any state, clearing any previous result or
	/// error and superseding any pending read.
	pub fn select_file(&mut self, file: SourceFile) {
		self.generation += 1;
		self.state = ViewState::FileSelected(file);
	}

	/// Convert
	///
	/// Request conversion of the selected file. Returns a ticket the caller
	/// uses to perform the read and report back via [`Self::complete_read`].
	/// With no file selected this moves straight to `Errored` and returns
	/// `None` (the guarded transition).
	pub fn convert(&mut self) -> Option<ReadTicket> {
		self.generation += 1;
		match self.take_file() {
			Some(file) => {
				log::debug!("Reading '{}' ({} bytes)", file.name, file.size);
				self.state = ViewState::FileSelected(file);
				Some(ReadTicket {
					generation: self.generation,
				})
			}
			None => {
				self.state = ViewState::Errored {
					file: None,
					error: ConvertError::NoFileSelected,
				};
				None
			}
		}
	}

	/// Complete Read
	///
	/// Finish a pending read with the decoded text (or the read failure) and
	/// run parse + serialize. A stale ticket is dropped without touching
	/// state.
	pub fn complete_read(&mut self, ticket: ReadTicket, outcome: io::Result<String>) {
		if ticket.generation != self.generation {
			log::debug!(
				"Dropping stale read (ticket {}, current {})",
				ticket.generation,
				self.generation
			);
			return;
		}
		let Some(file) = self.take_file() else {
			// Unreachable through the public API: a live ticket implies a
			// selected file. Ignore rather than panic.
			log::debug!("Ignoring read completion with no selected file");
			return;
		};
		self.state = match outcome.map_err(|err| {
			log::debug!("Read failed for '{}': {}", file.name, err);
			ConvertError::ConversionFailed
		}) {
			Ok(content) => match convert::text_to_json(&content) {
				Ok(json) => ViewState::Converted { file, json },
				Err(error) => ViewState::Errored {
					file: Some(file),
					error,
				},
			},
			Err(error) => ViewState::Errored {
				file: Some(file),
				error,
			},
		};
	}

	/// Pull the selected file out of the current state, leaving
	/// `NoFileSelected` behind for the caller to replace.
	fn take_file(&mut self) -> Option<SourceFile> {
		match std::mem::replace(&mut self.state, ViewState::NoFileSelected) {
			ViewState::NoFileSelected => None,
			ViewState::FileSelected(file) => Some(file),
			ViewState::Converted { file, .. } => Some(file),
			ViewState::Errored { file, .. } => file,
		}
	}
}

impl Default for Converter {
	fn default() -> Self {
		Self::new()
	}
}
