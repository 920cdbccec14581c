use ordered_float::NotNan;

use crate::parser::{literal_parsers::Literal, DefaultParser, ParseError};

/// SQL numeric literal: `-? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
///
/// `42.` and `.42` are both accepted; the value is always an `f64`.
pub struct NumberParser;

impl NumberParser {
    pub fn is_number(parser: &DefaultParser) -> bool {
        let current = parser.current();
        current.is_ascii_digit() || current == '-' || current == '.'
    }

    pub fn parse(parser: &mut DefaultParser) -> Result<Literal, ParseError> {
        let pivot = parser.position;

        if !NumberParser::is_number(parser) {
            return ParseError::new("Invalid number value", pivot, parser).err();
        }

        if parser.current() == '-' {
            parser.next();
        }

        let mut mantissa_digits = parser.skip_digits();
        if parser.current() == '.' {
            parser.next();
            mantissa_digits += parser.skip_digits();
        }
        if mantissa_digits == 0 {
            return ParseError::new("Number without digits", pivot, parser).err();
        }

        if matches!(parser.current(), 'e' | 'E') {
            parser.next();
            if matches!(parser.current(), '+' | '-') {
                parser.next();
            }
            if parser.skip_digits() == 0 {
                return ParseError::new("Exponent without digits", pivot, parser).err();
            }
        }

        if !parser.eof() {
            return ParseError::new("Invalid number value", pivot, parser).err();
        }

        let number = parser.text_from_pivot(pivot);
        let value = number.parse::<f64>()
            .map_err(|_| ParseError::new("Invalid number", pivot, parser))?;
        let value = NotNan::new(value)
            .map_err(|_| ParseError::new("Invalid number", pivot, parser))?;

        Ok(Literal::Number(value))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{literal_parsers::{Literal, NumberParser}, DefaultParser};

    fn parse_number(text: &str) -> f64 {
        let mut parser = DefaultParser::new(text);

        match NumberParser::parse(&mut parser) {
            Ok(Literal::Number(value)) => value.into_inner(),
            other => panic!("expected a number for {text}, got {other:?}"),
        }
    }

    fn rejects(text: &str) -> bool {
        let mut parser = DefaultParser::new(text);
        NumberParser::parse(&mut parser).is_err()
    }

    #[test]
    pub fn test_number_parser_int() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("0"), 0.0);
    }

    #[test]
    pub fn test_number_parser_negative() {
        assert_eq!(parse_number("-42"), -42.0);
    }

    #[test]
    pub fn test_number_parser_fraction() {
        assert_eq!(parse_number("42.69"), 42.69);
    }

    #[test]
    pub fn test_number_parser_trailing_dot() {
        assert_eq!(parse_number("42."), 42.0);
    }

    #[test]
    pub fn test_number_parser_leading_dot() {
        assert_eq!(parse_number(".42"), 0.42);
    }

    #[test]
    pub fn test_number_parser_exponent() {
        assert_eq!(parse_number("42e3"), 42000.0);
        assert_eq!(parse_number("42E3"), 42000.0);
        assert_eq!(parse_number("42.511e3"), 42511.0);
        assert_eq!(parse_number("42e-1"), 4.2);
        assert_eq!(parse_number("42e+1"), 420.0);
    }

    #[test]
    pub fn test_number_parser_exponent_after_trailing_dot() {
        assert_eq!(parse_number("42.e3"), 42000.0);
        assert_eq!(parse_number("-42.e3"), -42000.0);
    }

    #[test]
    pub fn test_number_parser_wrong_value() {
        let mut parser = DefaultParser::new("42a");

        match NumberParser::parse(&mut parser) {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.text, "42a");
                assert_eq!(err.start, 0);
                assert_eq!(err.end, 2);
            },
        }
    }

    #[test]
    pub fn test_number_parser_rejects_malformed() {
        assert!(rejects("."));
        assert!(rejects("-"));
        assert!(rejects("-."));
        assert!(rejects("e3"));
        assert!(rejects("42e"));
        assert!(rejects("42e+"));
        assert!(rejects("4 2"));
        assert!(rejects("1.2.3"));
        assert!(rejects("--1"));
        assert!(rejects("+42"));
        assert!(rejects("0x1F"));
        assert!(rejects("'42'"));
    }
}
