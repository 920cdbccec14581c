pub mod default_parser;
pub use default_parser::*;

pub mod parse_error;
pub use parse_error::*;

pub mod word_comparer;
pub use word_comparer::*;

pub mod literal_parsers;

pub mod default_literal;
pub use default_literal::*;
