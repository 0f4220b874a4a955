use thiserror::Error;

/// The generic Error type, covering every reason a declaration line can be rejected.
///
/// Parsing is the only fallible operation in this library: classification and code
/// generation are total over successfully parsed [`crate::PropertyDeclaration`] values.
/// Each variant is a reason code; none of them carries a partially parsed result.
///
/// # Error Categories
///
/// ## Grammar Errors
/// - [`Error::Empty`] - The line was empty or whitespace only
/// - [`Error::MissingKeyword`] - The line does not start with `@property`
/// - [`Error::UnterminatedAttributes`] - The modifier section has no closing `)`
/// - [`Error::MissingName`] - No attribute name follows the type
/// - [`Error::InvalidName`] - The attribute name is not an identifier
/// - [`Error::MissingType`] - Only a name was declared
/// - [`Error::InvalidType`] - A type word is not an identifier
/// - [`Error::MisplacedPointer`] - A pointer marker sits between type words
/// - [`Error::TrailingInput`] - Text follows the terminating `;`
///
/// ## Unsupported Constructs
/// - [`Error::BlockType`] - Block-typed attribute (`void (^handler)(void)`)
/// - [`Error::FunctionPointer`] - Function pointer attribute (`int (*fn)(int)`)
/// - [`Error::ArrayDeclarator`] - C array declarator (`char name[16]`)
/// - [`Error::MultipleDeclarators`] - More than one name in a single statement
/// - [`Error::UnbalancedGenerics`] - Angle brackets do not pair up
/// - [`Error::NestingLimit`] - Generic arguments nest too deeply
/// - [`Error::UnexpectedCharacter`] - Punctuation outside the declaration syntax
///
/// # Examples
///
/// ```rust
/// use propcoder::{parse, Error};
///
/// match parse("int (*fn)(int);") {
///     Ok(declaration) => println!("parsed {}", declaration.name()),
///     Err(Error::MissingKeyword) => println!("not a property declaration, skipping"),
///     Err(e) => println!("skipping: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Provided input was empty.
    #[error("Provided input was empty")]
    Empty,

    /// The line does not begin with the `@property` declaration keyword.
    #[error("Expected the `@property` keyword")]
    MissingKeyword,

    /// The parenthesized modifier section was opened but never closed.
    #[error("Modifier section is missing its closing parenthesis")]
    UnterminatedAttributes,

    /// No attribute name could be found after the type.
    #[error("Declaration has no attribute name")]
    MissingName,

    /// The attribute name is not a valid identifier.
    ///
    /// Identifiers start with a letter or underscore and contain only
    /// alphanumerics and underscores.
    #[error("Invalid attribute name - {0}")]
    InvalidName(String),

    /// No type words precede the attribute name.
    #[error("Declaration has no type")]
    MissingType,

    /// One of the type words is not an identifier.
    #[error("Invalid type - {0}")]
    InvalidType(String),

    /// A pointer marker appeared between words of the type instead of after it.
    #[error("Pointer marker must follow the complete type")]
    MisplacedPointer,

    /// Block-typed attributes are not supported.
    #[error("Block-typed attributes are not supported")]
    BlockType,

    /// Function pointer attributes are not supported.
    #[error("Function pointer attributes are not supported")]
    FunctionPointer,

    /// C array declarators are not supported.
    #[error("Array declarators are not supported")]
    ArrayDeclarator,

    /// A statement declaring several attributes at once (`int a, b;`).
    #[error("Only one attribute may be declared per statement")]
    MultipleDeclarators,

    /// Opening and closing angle brackets do not match up.
    #[error("Unbalanced angle brackets in type")]
    UnbalancedGenerics,

    /// Generic arguments are nested deeper than the parser allows.
    ///
    /// The associated value is the depth limit that was reached.
    #[error("Reached the maximum generic nesting depth allowed - {0}")]
    NestingLimit(usize),

    /// A character that has no place in a property declaration.
    #[error("Unexpected character - '{0}'")]
    UnexpectedCharacter(char),

    /// Something other than a line comment follows the terminating `;`.
    #[error("Unexpected input after `;` - {0}")]
    TrailingInput(String),
}
