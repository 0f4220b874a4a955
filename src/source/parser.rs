//! Character cursor for reading a single line of declaration source text.
//!
//! This module provides the [`crate::source::parser::Parser`] type, a cursor over a `&str` that
//! tracks a byte position and never reads past the end of its input. The declaration parser
//! is built on top of it; it knows nothing about Objective-C beyond what an identifier is.
//!
//! # Key Components
//!
//! ## Navigation Methods
//! - [`crate::source::parser::Parser::advance`] - Consume one character
//! - [`crate::source::parser::Parser::skip_whitespace`] - Consume any whitespace
//!
//! ## Data Access Methods
//! - [`crate::source::parser::Parser::peek_char`] - Peek at the next character
//! - [`crate::source::parser::Parser::rest`] - Access the unread remainder
//! - [`crate::source::parser::Parser::eat_keyword`] - Consume a keyword on an identifier boundary
//! - [`crate::source::parser::Parser::read_until`] - Consume text up to a delimiter
//! - [`crate::source::parser::Parser::read_identifier`] - Consume a run of identifier characters
//!
//! # Usage Examples
//!
//! ```rust
//! use propcoder::Parser;
//!
//! let mut parser = Parser::new("@property (copy) NSString *title;");
//! assert!(parser.eat_keyword("@property"));
//! parser.skip_whitespace();
//! assert!(parser.eat('('));
//! assert_eq!(parser.read_until(')'), Some("copy"));
//! parser.skip_whitespace();
//! assert_eq!(parser.read_identifier(), "NSString");
//! ```

/// A cursor over one line of source text.
///
/// `Parser` keeps a byte offset into its input. Every read that could run past the end
/// returns `None` (or an empty slice) instead of panicking, and a failed
/// [`Parser::read_until`] leaves the position untouched so callers can report the
/// failure without having consumed anything.
pub struct Parser<'a> {
    /// The text being parsed
    data: &'a str,
    /// Current byte position within the text, always on a char boundary
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::source::parser::Parser`] over a string slice.
    ///
    /// # Arguments
    /// * `data` - The text to read from
    #[must_use]
    pub fn new(data: &'a str) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns `true` if the parser has no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the unread remainder of the text.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.data[self.position..]
    }

    /// Peek at the next character without consuming it.
    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character, or `None` at the end of the text.
    pub fn advance(&mut self) -> Option<char> {
        let next = self.peek_char()?;
        self.position += next.len_utf8();
        Some(next)
    }

    /// Consume the next character if it equals `expected`.
    ///
    /// Returns `true` if the character was consumed.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `keyword` if the text continues with it and the keyword is not merely the
    /// prefix of a longer identifier.
    ///
    /// ```rust
    /// use propcoder::Parser;
    /// assert!(Parser::new("@property(copy)").eat_keyword("@property"));
    /// assert!(!Parser::new("@propertyList").eat_keyword("@property"));
    /// ```
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        let Some(after) = self.rest().strip_prefix(keyword) else {
            return false;
        };

        if after.chars().next().is_some_and(is_identifier_char) {
            return false;
        }

        self.position += keyword.len();
        true
    }

    /// Consume all whitespace at the current position.
    pub fn skip_whitespace(&mut self) {
        self.read_while(char::is_whitespace);
    }

    /// Consume characters while `predicate` holds and return them.
    pub fn read_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(rest.len(), |(index, _)| index);

        self.position += end;
        &rest[..end]
    }

    /// Consume a run of identifier characters (possibly empty).
    pub fn read_identifier(&mut self) -> &'a str {
        self.read_while(is_identifier_char)
    }

    /// Consume the text up to and including `delimiter`, returning the text before it.
    ///
    /// Returns `None` without moving the cursor if `delimiter` does not occur.
    pub fn read_until(&mut self, delimiter: char) -> Option<&'a str> {
        let rest = self.rest();
        let index = rest.find(delimiter)?;

        self.position += index + delimiter.len_utf8();
        Some(&rest[..index])
    }
}

/// Returns `true` for characters allowed inside an identifier.
#[must_use]
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` for characters allowed at the start of an identifier.
#[must_use]
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` if `text` is a syntactically valid identifier.
///
/// ```rust
/// use propcoder::source::is_identifier;
/// assert!(is_identifier("_title2"));
/// assert!(!is_identifier("2title"));
/// assert!(!is_identifier(""));
/// ```
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_peek() {
        let mut parser = Parser::new("ab");
        assert_eq!(parser.peek_char(), Some('a'));
        assert_eq!(parser.advance(), Some('a'));
        assert_eq!(parser.rest(), "b");
        assert_eq!(parser.advance(), Some('b'));
        assert_eq!(parser.advance(), None);
        assert_eq!(parser.rest(), "");
    }

    #[test]
    fn test_empty() {
        let mut parser = Parser::new("");
        assert!(parser.is_empty());
        assert_eq!(parser.rest(), "");
        assert_eq!(parser.peek_char(), None);
        assert_eq!(parser.read_identifier(), "");
    }

    #[test]
    fn test_eat() {
        let mut parser = Parser::new("(x");
        assert!(!parser.eat('x'));
        assert!(parser.eat('('));
        assert_eq!(parser.rest(), "x");
    }

    #[test]
    fn test_eat_keyword_boundary() {
        let mut parser = Parser::new("@property BOOL x;");
        assert!(parser.eat_keyword("@property"));
        assert_eq!(parser.rest(), " BOOL x;");

        let mut parser = Parser::new("@property");
        assert!(parser.eat_keyword("@property"));
        assert_eq!(parser.peek_char(), None);

        let mut parser = Parser::new("@property_list x;");
        assert!(!parser.eat_keyword("@property"));
        assert_eq!(parser.rest(), "@property_list x;");

        let mut parser = Parser::new("@interface Foo");
        assert!(!parser.eat_keyword("@property"));
    }

    #[test]
    fn test_skip_whitespace() {
        let mut parser = Parser::new(" \t  NSString");
        parser.skip_whitespace();
        assert_eq!(parser.rest(), "NSString");
        assert_eq!(parser.read_identifier(), "NSString");
    }

    #[test]
    fn test_read_until() {
        let mut parser = Parser::new("nonatomic, copy) NSString");
        assert_eq!(parser.read_until(')'), Some("nonatomic, copy"));
        assert_eq!(parser.rest(), " NSString");

        let mut parser = Parser::new("nonatomic, copy");
        assert_eq!(parser.read_until(')'), None);
        assert_eq!(parser.rest(), "nonatomic, copy");
    }

    #[test]
    fn test_non_ascii_input() {
        let mut parser = Parser::new("é*");
        assert_eq!(parser.read_identifier(), "");
        assert_eq!(parser.advance(), Some('é'));
        assert_eq!(parser.rest(), "*");
        assert_eq!(parser.advance(), Some('*'));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("title"));
        assert!(is_identifier("_backing"));
        assert!(is_identifier("value2"));
        assert!(!is_identifier("2value"));
        assert!(!is_identifier("*title"));
        assert!(!is_identifier("id<Proto>"));
        assert!(!is_identifier(""));
    }
}
