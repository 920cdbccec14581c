use crate::parser::{literal_parsers::Literal, DefaultParser, ParseError};

pub struct NullParser;

impl NullParser {
    pub fn is_null(parser: &DefaultParser) -> bool {
        parser.null_keyword.compare(parser)
    }

    pub fn parse(parser: &mut DefaultParser) -> Result<Literal, ParseError> {
        if parser.null_keyword.compare(parser) {
            parser.jump(parser.null_keyword.length);
            return Ok(Literal::Null)
        }

        ParseError::new("Invalid null", parser.position, parser).err()
    }
}
