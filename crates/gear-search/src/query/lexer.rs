//! Lexer (tokenizer) for search queries.

use std::iter::Peekable;
use std::str::Chars;

/// Error encountered during lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    /// The character that could not be tokenized.
    pub character: char,
    /// The position (0-indexed byte offset) where the error occurred.
    pub position: usize,
}

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unexpected character '{}' at position {}",
            self.character, self.position
        )
    }
}

impl std::error::Error for LexerError {}

/// Result of tokenizing a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerResult {
    /// The tokens successfully parsed, with their positions.
    pub tokens: Vec<PositionedToken>,
    /// Any errors encountered (dangling negation).
    pub errors: Vec<LexerError>,
}

/// A token with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken {
    /// The token.
    pub token: QueryToken,
    /// The byte position where the token starts (0-indexed).
    pub position: usize,
}

/// A token in a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    /// A `keyword:value` pair. Both halves are lowercased.
    Clause {
        /// The keyword before the colon.
        keyword: String,
        /// The value after the colon, unquoted.
        value: String,
    },

    /// A bare free-text word or quoted phrase.
    Text(String),

    /// The `-` negation prefix.
    Not,

    /// The `or` connective.
    Or,

    /// The `and` connective (same as juxtaposition).
    And,
}

/// Lexer for tokenizing search queries.
///
/// Terms are separated by whitespace or commas.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    /// Current byte position in the input string.
    position: usize,
    /// Errors encountered during tokenization.
    errors: Vec<LexerError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: 0,
            errors: Vec::new(),
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    /// Consumes and returns the next character, updating position.
    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(ch) = c {
            self.position += ch.len_utf8();
        }
        c
    }

    fn is_separator(c: char) -> bool {
        c.is_whitespace() || c == ','
    }

    /// Skips whitespace and commas.
    fn skip_separators(&mut self) {
        while let Some(&c) = self.peek() {
            if Self::is_separator(c) {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Reads a quoted string (single or double quotes).
    fn read_quoted_string(&mut self, quote_char: char) -> String {
        // Consume the opening quote
        self.next_char();

        let mut result = String::new();
        while let Some(c) = self.next_char() {
            if c == quote_char {
                break;
            }
            if c == '\\' {
                if let Some(escaped) = self.next_char() {
                    result.push(escaped);
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    /// Reads until a separator, stopping early at `stop` if given.
    fn read_bare(&mut self, stop: Option<char>) -> String {
        let mut word = String::new();
        while let Some(&c) = self.peek() {
            if Self::is_separator(c) || Some(c) == stop {
                break;
            }
            word.push(c);
            self.next_char();
        }
        word
    }

    /// Reads a value that may be quoted.
    fn read_value(&mut self) -> String {
        match self.peek() {
            Some(&c) if c == '"' || c == '\'' => self.read_quoted_string(c),
            _ => self.read_bare(None),
        }
    }

    /// Returns the next token with its position, or None if at end of input.
    pub fn next_token(&mut self) -> Option<PositionedToken> {
        self.skip_separators();

        let c = *self.peek()?;
        let token_start = self.position;

        let token = match c {
            '-' => {
                self.next_char();
                match self.peek() {
                    Some(&next) if !Self::is_separator(next) => QueryToken::Not,
                    _ => {
                        self.errors.push(LexerError {
                            character: '-',
                            position: token_start,
                        });
                        return self.next_token();
                    }
                }
            }
            '"' | '\'' => QueryToken::Text(self.read_quoted_string(c)),
            _ => {
                let word = self.read_bare(Some(':'));
                if self.peek() == Some(&':') {
                    self.next_char();
                    QueryToken::Clause {
                        keyword: word.to_lowercase(),
                        value: self.read_value().to_lowercase(),
                    }
                } else {
                    match word.to_lowercase().as_str() {
                        "or" => QueryToken::Or,
                        "and" => QueryToken::And,
                        _ => QueryToken::Text(word),
                    }
                }
            }
        };

        Some(PositionedToken {
            token,
            position: token_start,
        })
    }

    /// Collects all tokens into a vector (without positions).
    #[cfg(test)]
    pub fn tokenize(self) -> Vec<QueryToken> {
        self.tokenize_with_errors()
            .tokens
            .into_iter()
            .map(|pt| pt.token)
            .collect()
    }

    /// Collects all tokens and any errors encountered.
    pub fn tokenize_with_errors(mut self) -> LexerResult {
        let mut tokens = Vec::new();
        while let Some(positioned_token) = self.next_token() {
            tokens.push(positioned_token);
        }
        LexerResult {
            tokens,
            errors: self.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(keyword: &str, value: &str) -> QueryToken {
        QueryToken::Clause {
            keyword: keyword.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_tokenize_clause() {
        let tokens = Lexer::new("masterwork:>7").tokenize();
        assert_eq!(tokens, vec![clause("masterwork", ">7")]);
    }

    #[test]
    fn test_tokenize_clause_lowercases() {
        let tokens = Lexer::new("Season:Forge").tokenize();
        assert_eq!(tokens, vec![clause("season", "forge")]);
    }

    #[test]
    fn test_tokenize_multiple_separators() {
        let tokens = Lexer::new("is:dupe, masterwork:>7   season:forge").tokenize();
        assert_eq!(
            tokens,
            vec![
                clause("is", "dupe"),
                clause("masterwork", ">7"),
                clause("season", "forge"),
            ]
        );
    }

    #[test]
    fn test_tokenize_negation() {
        let tokens = Lexer::new("-is:locked").tokenize();
        assert_eq!(tokens, vec![QueryToken::Not, clause("is", "locked")]);

        let tokens = Lexer::new("-ace").tokenize();
        assert_eq!(tokens, vec![QueryToken::Not, QueryToken::Text("ace".to_string())]);
    }

    #[test]
    fn test_tokenize_negative_range_value_is_not_negation() {
        let tokens = Lexer::new("power:>-1").tokenize();
        assert_eq!(tokens, vec![clause("power", ">-1")]);
    }

    #[test]
    fn test_tokenize_connectives() {
        let tokens = Lexer::new("is:dupe or is:locked AND ace").tokenize();
        assert_eq!(
            tokens,
            vec![
                clause("is", "dupe"),
                QueryToken::Or,
                clause("is", "locked"),
                QueryToken::And,
                QueryToken::Text("ace".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_quoted_value() {
        let tokens = Lexer::new("name:\"Ace of Spades\" is:dupe").tokenize();
        assert_eq!(
            tokens,
            vec![clause("name", "ace of spades"), clause("is", "dupe")]
        );
    }

    #[test]
    fn test_tokenize_quoted_text() {
        let tokens = Lexer::new("'hand cannon' or thorn").tokenize();
        assert_eq!(
            tokens,
            vec![
                QueryToken::Text("hand cannon".to_string()),
                QueryToken::Or,
                QueryToken::Text("thorn".to_string()),
            ]
        );
    }

    #[test]
    fn test_quoted_or_is_text() {
        let tokens = Lexer::new("\"or\"").tokenize();
        assert_eq!(tokens, vec![QueryToken::Text("or".to_string())]);
    }

    #[test]
    fn test_tokenize_empty_value() {
        let tokens = Lexer::new("season:").tokenize();
        assert_eq!(tokens, vec![clause("season", "")]);
    }

    #[test]
    fn test_dangling_negation_is_an_error() {
        let result = Lexer::new("is:dupe - ace").tokenize_with_errors();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].character, '-');
        assert_eq!(result.errors[0].position, 8);
        assert_eq!(result.tokens.len(), 2);
    }

    #[test]
    fn test_positions() {
        let result = Lexer::new("a, b:c").tokenize_with_errors();
        let positions: Vec<usize> = result.tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 3]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Lexer::new("").tokenize().is_empty());
        assert!(Lexer::new("  , ,").tokenize().is_empty());
    }
}
