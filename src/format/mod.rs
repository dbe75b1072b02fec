//! The plain-text document format: a line-oriented grammar of
//! `Polygon:` headers and `Segment:` coordinate groups, with positional
//! error reporting. Parsing and serialization are pure functions over
//! shape lists; applying a parse result to a document (and to history)
//! is the editor's job.

mod parser;
mod writer;

pub use parser::{ParseError, parse};
pub use writer::serialize;
