//! Convert comma-delimited CSV/TXT files to formatted JSON.
//!
//! Three stages: a reader supplies the decoded text of a user-selected file,
//! the parser maps it to an ordered dataset of records keyed by the header
//! line, and the serializer renders the dataset as 2-space-indented JSON.
//! [`state::Converter`] ties the stages together behind the selection and
//! conversion state machine; [`convert::text_to_json`] is the pure pipeline
//! on its own.

pub mod convert;
pub mod parse;
pub mod state;
pub mod types;
