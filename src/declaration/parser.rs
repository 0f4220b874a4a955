use crate::{
    declaration::PropertyDeclaration,
    source::{is_identifier, is_identifier_char, is_identifier_start, Parser},
    typesystem::resolve_class,
    Error::{
        self, ArrayDeclarator, BlockType, Empty, FunctionPointer, InvalidName, InvalidType,
        MisplacedPointer, MissingKeyword, MissingName, MissingType, MultipleDeclarators,
        NestingLimit, TrailingInput, UnbalancedGenerics, UnexpectedCharacter,
        UnterminatedAttributes,
    },
    Result,
};

/// The keyword every declaration starts with
pub const DECLARATION_KEYWORD: &str = "@property";

/// Maximum nesting depth of generic arguments (`NSArray<NSArray<...>>`)
pub const MAX_GENERIC_DEPTH: usize = 16;

/// Words that annotate a declaration without being part of its type.
const ANNOTATIONS: &[&str] = &[
    "IBOutlet",
    "IBInspectable",
    "_Nullable",
    "_Nonnull",
    "_Null_unspecified",
    "__nullable",
    "__nonnull",
    "__null_unspecified",
    "__weak",
    "__strong",
    "__unsafe_unretained",
    "__autoreleasing",
];

/// Marks the end of a declaration statement
const TERMINATOR: char = ';';

/// Starts a line comment after the terminator
const LINE_COMMENT: &str = "//";

/// One token of a declaration body.
#[derive(Debug, PartialEq)]
enum Lexeme {
    /// An identifier, possibly carrying generic arguments (`NSArray<NSString *>`)
    Word(String),
    /// A pointer marker
    Pointer,
}

/// Parser for a single `@property` declaration statement.
///
/// # Example
///
/// ```rust
/// use propcoder::DeclarationParser;
///
/// let declaration = DeclarationParser::new("@property (nonatomic) NSInteger count;").parse()?;
/// assert_eq!(declaration.type_name(), "NSInteger");
/// assert_eq!(declaration.name(), "count");
/// assert!(!declaration.is_pointer());
/// # Ok::<(), propcoder::Error>(())
/// ```
///
/// ## Notes:
/// - A parser instance consumes its input; create a new one per line.
/// - The parser never guesses. Anything outside the supported grammar is reported as an
///   [`Error`] and no partial declaration is produced.
pub struct DeclarationParser<'a> {
    parser: Parser<'a>,
}

impl<'a> DeclarationParser<'a> {
    /// Create a new `DeclarationParser` for one line of source text
    ///
    /// ## Arguments
    /// * 'line' - The declaration line; surrounding whitespace is ignored
    #[must_use]
    pub fn new(line: &'a str) -> Self {
        DeclarationParser {
            parser: Parser::new(line.trim()),
        }
    }

    /// Parse the line into a [`PropertyDeclaration`]
    ///
    /// # Errors
    /// Returns the [`Error`] variant naming the first grammar violation or unsupported construct.
    pub fn parse(mut self) -> Result<PropertyDeclaration> {
        if self.parser.is_empty() {
            return Err(Empty);
        }

        self.parse_keyword()?;
        let attributes = self.parse_attributes()?;
        let body = self.parse_terminator()?;

        if body.contains('^') {
            return Err(BlockType);
        }

        let lexemes = lex(body)?;
        assemble(attributes, lexemes)
    }

    /// Consume the leading `@property` keyword
    fn parse_keyword(&mut self) -> Result<()> {
        if self.parser.eat_keyword(DECLARATION_KEYWORD) {
            Ok(())
        } else {
            Err(MissingKeyword)
        }
    }

    /// Capture the interior of an optional parenthesized modifier section
    fn parse_attributes(&mut self) -> Result<Option<String>> {
        self.parser.skip_whitespace();
        if !self.parser.eat('(') {
            return Ok(None);
        }

        match self.parser.read_until(')') {
            Some(interior) => Ok(Some(interior.trim().to_string())),
            None => Err(UnterminatedAttributes),
        }
    }

    /// Split off the optional terminator and whatever follows it
    fn parse_terminator(&mut self) -> Result<&'a str> {
        let Some(body) = self.parser.read_until(TERMINATOR) else {
            return Ok(self.parser.rest());
        };

        let trailing = self.parser.rest().trim();
        if trailing.is_empty() || trailing.starts_with(LINE_COMMENT) {
            Ok(body)
        } else {
            Err(TrailingInput(trailing.to_string()))
        }
    }
}

/// Parse one declaration line.
///
/// This is the main entry point of the library; it is equivalent to
/// `DeclarationParser::new(line).parse()`.
///
/// # Errors
/// Returns the [`Error`] variant naming why the line is not a supported declaration. Callers
/// processing a selection should skip such lines.
///
/// # Examples
///
/// ```rust
/// use propcoder::{parse, Error};
///
/// assert!(parse("@property BOOL isValid;")?.attributes().is_none());
/// assert_eq!(parse("int (*fn)(int);"), Err(Error::MissingKeyword));
/// assert_eq!(parse("@property int (*fn)(int);"), Err(Error::FunctionPointer));
/// # Ok::<(), propcoder::Error>(())
/// ```
pub fn parse(line: &str) -> Result<PropertyDeclaration> {
    DeclarationParser::new(line).parse()
}

/// Map punctuation outside the declaration syntax to its reason code
fn unsupported(c: char) -> Error {
    match c {
        '^' => BlockType,
        '(' | ')' => FunctionPointer,
        '[' | ']' => ArrayDeclarator,
        ',' => MultipleDeclarators,
        '<' | '>' => UnbalancedGenerics,
        other => UnexpectedCharacter(other),
    }
}

/// Tokenize a declaration body into words and pointer markers
fn lex(body: &str) -> Result<Vec<Lexeme>> {
    let mut parser = Parser::new(body);
    let mut lexemes = Vec::new();

    loop {
        parser.skip_whitespace();
        let Some(next) = parser.peek_char() else {
            break;
        };

        if next == '*' {
            parser.advance();
            lexemes.push(Lexeme::Pointer);
        } else if is_identifier_char(next) {
            lexemes.push(Lexeme::Word(lex_word(&mut parser)?));
        } else {
            return Err(unsupported(next));
        }
    }

    Ok(lexemes)
}

/// Read an identifier and, if present, the generic arguments attached to it
///
/// Whitespace between the identifier and `<` is dropped (`id <Proto>` becomes
/// `id<Proto>`); whitespace inside the brackets is kept.
fn lex_word(parser: &mut Parser<'_>) -> Result<String> {
    let mut word = parser.read_identifier().to_string();

    parser.skip_whitespace();
    if parser.peek_char() != Some('<') {
        return Ok(word);
    }

    let start = parser.rest();
    let mut depth = 0usize;
    loop {
        let Some(c) = parser.advance() else {
            return Err(UnbalancedGenerics);
        };

        match c {
            '<' => {
                depth += 1;
                if depth > MAX_GENERIC_DEPTH {
                    return Err(NestingLimit(MAX_GENERIC_DEPTH));
                }
            }
            '>' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            '*' | ',' => {}
            c if c.is_whitespace() || is_identifier_char(c) => {}
            other => return Err(unsupported(other)),
        }
    }

    let consumed = start.len() - parser.rest().len();
    word.push_str(&start[..consumed]);
    Ok(word)
}

/// Turn the token stream into a declaration
fn assemble(attributes: Option<String>, lexemes: Vec<Lexeme>) -> Result<PropertyDeclaration> {
    let mut lexemes: Vec<Lexeme> = lexemes
        .into_iter()
        .filter(|lexeme| !matches!(lexeme, Lexeme::Word(word) if ANNOTATIONS.contains(&word.as_str())))
        .collect();

    let name = match lexemes.pop() {
        Some(Lexeme::Word(name)) => name,
        Some(Lexeme::Pointer) | None => return Err(MissingName),
    };
    if !is_identifier(&name) {
        return Err(InvalidName(name));
    }

    let mut type_words = Vec::new();
    let mut pointer_depth = 0usize;
    for lexeme in lexemes {
        match lexeme {
            Lexeme::Pointer => pointer_depth += 1,
            Lexeme::Word(_) if pointer_depth > 0 => return Err(MisplacedPointer),
            Lexeme::Word(word) => {
                if !word.chars().next().is_some_and(is_identifier_start) {
                    return Err(InvalidType(word));
                }
                type_words.push(word);
            }
        }
    }

    if type_words.is_empty() {
        return Err(MissingType);
    }

    let type_name = type_words.join(" ");
    let property_class = if pointer_depth == 1 {
        resolve_class(&type_name)
    } else {
        None
    };

    Ok(PropertyDeclaration::new(
        type_name,
        name,
        attributes,
        property_class,
        pointer_depth,
    ))
}
