use tracing::trace;

use crate::{
    parser::{
        literal_parsers::{BoolParser, ExpressionParser, Literal, NullParser, NumberParser, StringParser},
        DefaultParser,
        ParseError,
    },
    DefaultValue,
    TypeCategory,
};

/// Turns a raw `DEFAULT` token into a typed value for a column category.
///
/// Recognizers run in a fixed order and the first one whose probe matches
/// decides the outcome: `NULL`, parenthesized expression, quoted string, then
/// the category's own literal form (numbers for `Numeric`, `1`/`0` for
/// `Boolean`). `Textual` and `Temporal` have no unquoted literal form.
pub struct DefaultLiteral;

impl DefaultLiteral {
    /// An absent token is `Null`. Anything that is not a literal of the
    /// column's category is `Unresolved`.
    pub fn parse(category: TypeCategory, raw_default: Option<&str>) -> DefaultValue {
        let Some(raw_default) = raw_default else {
            return DefaultValue::Null;
        };

        let mut parser = DefaultParser::new(raw_default);
        match DefaultLiteral::recognize(category, &mut parser) {
            Ok(literal) => DefaultLiteral::coerce(category, literal),
            Err(err) => {
                trace!(%category, %err, "default literal rejected");
                DefaultValue::Unresolved
            }
        }
    }

    pub fn recognize(category: TypeCategory, parser: &mut DefaultParser) -> Result<Literal, ParseError> {
        if NullParser::is_null(parser) {
            return NullParser::parse(parser);
        }
        if ExpressionParser::is_expression(parser) {
            return ExpressionParser::parse(parser);
        }
        if StringParser::is_string_delimiter(parser) {
            return StringParser::parse(parser);
        }

        match category {
            TypeCategory::Numeric => NumberParser::parse(parser),
            TypeCategory::Boolean => BoolParser::parse(parser),
            TypeCategory::Textual | TypeCategory::Temporal =>
                ParseError::new("No unquoted literal for category", parser.position, parser).err(),
        }
    }

    fn coerce(category: TypeCategory, literal: Literal) -> DefaultValue {
        match (category, literal) {
            (_, Literal::Null) => DefaultValue::Null,
            (TypeCategory::Textual, Literal::String(value)) => DefaultValue::Text(value),
            (TypeCategory::Numeric, Literal::Number(value)) => DefaultValue::Number(value),
            (TypeCategory::Boolean, Literal::Bool(value)) => DefaultValue::Bool(value),
            (category, literal) => {
                trace!(%category, %literal, "literal does not fit the column category");
                DefaultValue::Unresolved
            }
        }
    }
}
