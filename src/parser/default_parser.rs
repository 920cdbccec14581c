use crate::parser::WordComparer;

/// Character cursor over a single raw default-value token.
///
/// The token is trimmed on construction; recognizers advance `position`
/// and read slices back with `text_from_pivot`.
#[derive(Debug, Default)]
pub struct DefaultParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub text: String,

    pub null_keyword: WordComparer,
}

impl DefaultParser {
    pub fn new(raw_default: &str) -> Self {
        let text = raw_default.trim();
        let text_v: Vec<char> = text.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            text: text.to_string(),
            null_keyword: WordComparer::new("NULL").with_eof(),
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        if self.position < self.length {
            return self.text_v[self.position];
        }

        '\0'
    }

    pub fn peek(&self, ahead: usize) -> char {
        if self.position + ahead < self.length {
            return self.text_v[self.position + ahead];
        }

        '\0'
    }

    pub fn next(&mut self) {
        if self.position < self.length {
            self.position += 1;
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position = (self.position + ahead).min(self.length);
    }

    /// Advance over consecutive ASCII digits and return how many were consumed.
    pub fn skip_digits(&mut self) -> usize {
        let pivot = self.position;
        while self.current().is_ascii_digit() {
            self.next();
        }
        self.position - pivot
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        let start = start.min(end);
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    pub fn rest(&self) -> String {
        self.text_from_range(self.position, self.length)
    }
}
