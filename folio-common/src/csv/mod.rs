//! Permissive CSV parsing for hand-edited source tables

pub mod reader;
pub mod tokenizer;

pub use reader::{load_table, parse_table, Record};
pub use tokenizer::{tokenize_line, ParseError};
