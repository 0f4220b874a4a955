//! Low-level text access shared by the declaration parser.

mod parser;

pub use parser::{is_identifier, is_identifier_char, is_identifier_start, Parser};
