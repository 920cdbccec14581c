use crate::parser::DefaultParser;

/// Case-insensitive keyword matcher anchored at the parser position.
#[derive(Debug, Default)]
pub struct WordComparer {
    pub length: usize,
    pub word: Vec<char>,
    eof: bool,
}

impl WordComparer {
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.to_uppercase().chars().collect();
        Self {
            length: word.len(),
            word,
            eof: false,
        }
    }

    /// Only match when the keyword is the last thing in the token.
    pub fn with_eof(mut self) -> Self { self.eof = true; self }

    pub fn reach_eof(&self, parser: &DefaultParser) -> bool {
        parser.position + self.length >= parser.length
    }

    pub fn compare(&self, parser: &DefaultParser) -> bool {
        let mut position = 0;
        while position < self.length {
            if (parser.position + position) >= parser.length ||
                self.word[position] != parser.text_v[parser.position + position].to_ascii_uppercase() {
                return false;
            }
            position += 1;
        }

        !self.eof || self.reach_eof(parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_any_case() {
        let comparer = WordComparer::new("null");
        assert!(comparer.compare(&DefaultParser::new("NULL")));
        assert!(comparer.compare(&DefaultParser::new("Null")));
        assert!(comparer.compare(&DefaultParser::new("nullable")));
        assert!(!comparer.compare(&DefaultParser::new("nul")));
    }

    #[test]
    fn test_compare_with_eof() {
        let comparer = WordComparer::new("NULL").with_eof();
        assert!(comparer.compare(&DefaultParser::new("null")));
        assert!(comparer.compare(&DefaultParser::new("  null  ")));
        assert!(!comparer.compare(&DefaultParser::new("nullable")));
        assert!(!comparer.compare(&DefaultParser::new("null + 1")));
    }
}
