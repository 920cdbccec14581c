use crate::parser::{literal_parsers::Literal, DefaultParser, ParseError};

/// Boolean defaults are stored as the integers `1` and `0`.
pub struct BoolParser;

impl BoolParser {
    pub fn is_bool(parser: &DefaultParser) -> bool {
        matches!(parser.current(), '1' | '0') && parser.position + 1 == parser.length
    }

    pub fn parse(parser: &mut DefaultParser) -> Result<Literal, ParseError> {
        if !BoolParser::is_bool(parser) {
            return ParseError::new("Invalid boolean", parser.position, parser).err();
        }

        let value = parser.current() == '1';
        parser.next();

        Ok(Literal::Bool(value))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{literal_parsers::{BoolParser, Literal}, DefaultParser};

    #[test]
    pub fn test_bool_parser_true() {
        let mut parser = DefaultParser::new("1");

        match BoolParser::parse(&mut parser) {
            Ok(Literal::Bool(value)) => assert!(value),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_bool_parser_false() {
        let mut parser = DefaultParser::new(" 0 ");

        match BoolParser::parse(&mut parser) {
            Ok(Literal::Bool(value)) => assert!(!value),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_bool_parser_only_single_digit() {
        for text in ["10", "01", "1.0", "-1", "2", "true", "FALSE", "'1'"] {
            let mut parser = DefaultParser::new(text);
            assert!(BoolParser::parse(&mut parser).is_err(), "{text} must not be a boolean");
        }
    }

    #[test]
    pub fn test_bool_parser_wrong() {
        let mut parser = DefaultParser::new("11");

        match BoolParser::parse(&mut parser) {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.text, "1");
                assert_eq!(err.start, 0);
                assert_eq!(err.end, 0);
            },
        }
    }
}
