//! Blocks of declaration lines.
//!
//! A [`Selection`] is what an editor hands over: several lines, some of them
//! declarations, some of them not. Lines that parse are kept in source order; the rest are
//! recorded as [`SkippedLine`]s together with the reason they were rejected.

use log::debug;

use crate::{declaration::parse, declaration::PropertyDeclaration, Error};

/// A declaration together with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based line number
    pub line: usize,
    /// The parsed declaration
    pub declaration: PropertyDeclaration,
}

/// A non-blank line that is not a supported declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    /// The line, trimmed
    pub text: String,
    /// Why the line was rejected
    pub reason: Error,
}

/// The parsed lines of a text block.
///
/// ```rust
/// use propcoder::{Error, Selection};
///
/// let selection = Selection::parse(
///     "@property (nonatomic, copy) NSString *title;\n\
///      \n\
///      @property (copy) void (^done)(void);\n\
///      @property BOOL isValid;",
/// );
///
/// let names: Vec<&str> = selection.declarations().map(|d| d.name()).collect();
/// assert_eq!(names, ["title", "isValid"]);
///
/// assert_eq!(selection.skipped().len(), 1);
/// assert_eq!(selection.skipped()[0].line, 3);
/// assert_eq!(selection.skipped()[0].reason, Error::BlockType);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    parsed: Vec<ParsedLine>,
    skipped: Vec<SkippedLine>,
}

impl Selection {
    /// Parse every non-blank line of `text`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut selection = Selection::default();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }

            match parse(trimmed) {
                Ok(declaration) => selection.parsed.push(ParsedLine { line, declaration }),
                Err(reason) => {
                    debug!("line {line}: skipped ({reason})");
                    selection.skipped.push(SkippedLine {
                        line,
                        text: trimmed.to_string(),
                        reason,
                    });
                }
            }
        }

        selection
    }

    /// The parsed lines, in source order.
    #[must_use]
    pub fn parsed(&self) -> &[ParsedLine] {
        &self.parsed
    }

    /// The rejected lines, in source order.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// The parsed declarations, in source order.
    pub fn declarations(&self) -> impl Iterator<Item = &PropertyDeclaration> + Clone + '_ {
        self.parsed.iter().map(|entry| &entry.declaration)
    }

    /// Number of parsed declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsed.len()
    }

    /// Returns `true` if no line parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsed.is_empty()
    }
}
