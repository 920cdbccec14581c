use crate::parser::{literal_parsers::Literal, DefaultParser, ParseError};

/// Quoted string literal, delimited by `'` or `"`.
///
/// Inside the literal a doubled delimiter stands for one delimiter
/// character; the other quote character has no special meaning. The
/// closing delimiter must end the token.
pub struct StringParser;

impl StringParser {
    pub fn is_string_delimiter(parser: &DefaultParser) -> bool {
        matches!(parser.current(), '\'' | '"')
    }

    pub fn parse(parser: &mut DefaultParser) -> Result<Literal, ParseError> {
        let pivot = parser.position;

        if !StringParser::is_string_delimiter(parser) {
            return ParseError::new("Invalid string value", pivot, parser).err();
        }
        let delimiter = parser.current();
        parser.next();

        let mut value = String::new();
        loop {
            if parser.eof() {
                return ParseError::new("Unterminated string", pivot, parser).err();
            }

            let current = parser.current();
            if current == delimiter {
                if parser.peek(1) == delimiter {
                    value.push(delimiter);
                    parser.jump(2);
                    continue;
                }
                parser.next();
                break;
            }

            value.push(current);
            parser.next();
        }

        if !parser.eof() {
            return ParseError::new("Unexpected text after string", pivot, parser).err();
        }

        Ok(Literal::String(value))
    }
}
