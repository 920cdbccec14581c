use crate::parser::{literal_parsers::Literal, DefaultParser, ParseError};

/// Recognizes `( ... )` defaults. The content is never evaluated.
pub struct ExpressionParser;

impl ExpressionParser {
    pub fn is_expression(parser: &DefaultParser) -> bool {
        parser.current() == '('
    }

    pub fn parse(parser: &mut DefaultParser) -> Result<Literal, ParseError> {
        if !ExpressionParser::is_expression(parser) {
            return ParseError::new("Invalid expression", parser.position, parser).err();
        }

        let expression = parser.rest();
        parser.jump(parser.length);

        Ok(Literal::Expression(expression))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{literal_parsers::{ExpressionParser, Literal}, DefaultParser};

    #[test]
    pub fn test_expression_parser_arithmetic() {
        let mut parser = DefaultParser::new("(1 + 2)");

        match ExpressionParser::parse(&mut parser) {
            Ok(Literal::Expression(text)) => {
                assert_eq!(text, "(1 + 2)");
                assert!(parser.eof());
            },
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_expression_parser_function_call() {
        let mut parser = DefaultParser::new("(datetime('now'))");

        match ExpressionParser::parse(&mut parser) {
            Ok(Literal::Expression(text)) => assert_eq!(text, "(datetime('now'))"),
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_expression_parser_unbalanced_still_expression() {
        let mut parser = DefaultParser::new("(1 + ");

        assert!(matches!(ExpressionParser::parse(&mut parser), Ok(Literal::Expression(_))));
    }

    #[test]
    pub fn test_expression_parser_bare_word() {
        let mut parser = DefaultParser::new("now()");

        assert!(!ExpressionParser::is_expression(&parser));
        assert!(ExpressionParser::parse(&mut parser).is_err());
    }
}
