//! Objective-C property declarations.
//!
//! A [`PropertyDeclaration`] is the structured form of one `@property` statement: its type,
//! name, raw modifier section, pointer marker count and, for well-known object types, the
//! class it resolves to. Values are produced by [`parse`] (or [`DeclarationParser`]) and are
//! immutable afterwards.
//!
//! # Supported Grammar
//!
//! ```text
//! declaration := "@property" modifiers? type-word+ "*"* name terminator?
//! modifiers   := "(" any-char-except-")"* ")"
//! type-word   := identifier ( "<" generic-body ">" )?
//! terminator  := ";" ( "//" any* )?
//! ```
//!
//! Protocol-qualified and lightweight generic types (`id<SomeProtocol>`,
//! `NSArray<NSString *>`) are part of the grammar. Block types, function pointers, C arrays
//! and multi-name statements are rejected with a dedicated [`crate::Error`] variant.
//!
//! # Examples
//!
//! ```rust
//! use propcoder::{parse, ArchiveKind};
//!
//! let declaration = parse("@property (nonatomic, copy) NSString *title;")?;
//! assert_eq!(declaration.type_name(), "NSString");
//! assert_eq!(declaration.name(), "title");
//! assert_eq!(declaration.attributes(), Some("nonatomic, copy"));
//! assert!(declaration.is_pointer());
//! assert_eq!(declaration.archive_kind(), ArchiveKind::Object);
//! # Ok::<(), propcoder::Error>(())
//! ```

mod parser;
mod qualifiers;

use std::{fmt, str::FromStr};

pub use parser::{parse, DeclarationParser, DECLARATION_KEYWORD, MAX_GENERIC_DEPTH};
pub use qualifiers::PropertyQualifiers;

use crate::{
    typesystem::{classify, generic_arguments, resolve_class, ArchiveKind, ClassDescriptor},
    Error, Result,
};

/// One parsed `@property` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyDeclaration {
    type_name: String,
    name: String,
    attributes: Option<String>,
    property_class: Option<&'static ClassDescriptor>,
    pointer_depth: usize,
}

impl PropertyDeclaration {
    /// Assemble a declaration from already validated parts.
    pub(crate) fn new(
        type_name: String,
        name: String,
        attributes: Option<String>,
        property_class: Option<&'static ClassDescriptor>,
        pointer_depth: usize,
    ) -> Self {
        debug_assert!(!type_name.is_empty() && !name.is_empty());
        debug_assert!(property_class.is_none() || pointer_depth > 0);

        PropertyDeclaration {
            type_name,
            name,
            attributes,
            property_class,
            pointer_depth,
        }
    }

    /// Parse a single declaration line.
    ///
    /// # Errors
    /// Returns the [`Error`] variant describing why the line is not a supported declaration.
    pub fn parse(line: &str) -> Result<Self> {
        parse(line)
    }

    /// The declared type without pointer markers, e.g. `NSString` or `unsigned long long`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw interior of the modifier section, or `None` if there was none.
    #[must_use]
    pub fn attributes(&self) -> Option<&str> {
        self.attributes.as_deref()
    }

    /// The registered class of an object type, if the type resolved to one.
    #[must_use]
    pub fn property_class(&self) -> Option<&'static ClassDescriptor> {
        self.property_class
    }

    /// Whether the type was followed by at least one pointer marker.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        self.pointer_depth > 0
    }

    /// Number of pointer markers that followed the type.
    #[must_use]
    pub fn pointer_depth(&self) -> usize {
        self.pointer_depth
    }

    /// The recognised qualifier keywords of the modifier section.
    #[must_use]
    pub fn qualifiers(&self) -> PropertyQualifiers {
        self.attributes
            .as_deref()
            .map_or_else(PropertyQualifiers::empty, PropertyQualifiers::from_attributes)
    }

    /// How this attribute is archived.
    #[must_use]
    pub fn archive_kind(&self) -> ArchiveKind {
        classify(&self.type_name, self.is_pointer())
    }

    /// The declared type as it would be written in a cast, e.g. `NSString *`.
    #[must_use]
    pub fn declared_type(&self) -> String {
        if self.pointer_depth == 0 {
            self.type_name.clone()
        } else {
            format!("{} {}", self.type_name, "*".repeat(self.pointer_depth))
        }
    }

    /// Registered classes of the (possibly nested) generic arguments of an object type.
    ///
    /// Returns `None` if any argument does not resolve, so callers never work from a partial
    /// list.
    #[must_use]
    pub fn element_classes(&self) -> Option<Vec<&'static ClassDescriptor>> {
        let mut resolved = Vec::new();
        collect_element_classes(&self.type_name, &mut resolved).then_some(resolved)
    }
}

fn collect_element_classes(
    type_name: &str,
    resolved: &mut Vec<&'static ClassDescriptor>,
) -> bool {
    for argument in generic_arguments(type_name) {
        let Some(descriptor) = resolve_class(argument) else {
            return false;
        };
        if !resolved.contains(&descriptor) {
            resolved.push(descriptor);
        }
        if !collect_element_classes(argument, resolved) {
            return false;
        }
    }
    true
}

impl FromStr for PropertyDeclaration {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        parse(line)
    }
}

impl fmt::Display for PropertyDeclaration {
    /// Renders the declaration back in canonical form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DECLARATION_KEYWORD} ")?;
        if let Some(attributes) = &self.attributes {
            write!(f, "({attributes}) ")?;
        }
        write!(f, "{} ", self.type_name)?;
        write!(f, "{}{};", "*".repeat(self.pointer_depth), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typesystem::lookup_class;

    #[test]
    fn test_accessors() {
        let declaration = parse("@property (nonatomic, readonly) NSArray<NSString *> *items;")
            .unwrap();

        assert_eq!(declaration.type_name(), "NSArray<NSString *>");
        assert_eq!(declaration.name(), "items");
        assert_eq!(declaration.attributes(), Some("nonatomic, readonly"));
        assert_eq!(declaration.pointer_depth(), 1);
        assert!(declaration.qualifiers().is_readonly());
        assert_eq!(declaration.property_class(), lookup_class("NSArray"));
        assert_eq!(declaration.declared_type(), "NSArray<NSString *> *");
    }

    #[test]
    fn test_qualifiers_without_attributes() {
        let declaration = parse("@property BOOL isValid;").unwrap();
        assert!(declaration.qualifiers().is_empty());
        assert_eq!(declaration.declared_type(), "BOOL");
    }

    #[test]
    fn test_element_classes() {
        let declaration =
            parse("@property NSDictionary<NSString *, NSArray<NSNumber *> *> *index;").unwrap();
        let names: Vec<&str> = declaration
            .element_classes()
            .unwrap()
            .iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["NSString", "NSArray", "NSNumber"]);

        let declaration = parse("@property NSArray<MyModel *> *models;").unwrap();
        assert!(declaration.element_classes().is_none());

        let declaration = parse("@property NSArray *plain;").unwrap();
        assert_eq!(declaration.element_classes(), Some(Vec::new()));
    }

    #[test]
    fn test_display_round_trips() {
        for line in [
            "@property (nonatomic, copy) NSString *title;",
            "@property BOOL isValid;",
            "@property (strong) NSError **error;",
        ] {
            let declaration: PropertyDeclaration = line.parse().unwrap();
            assert_eq!(declaration.to_string(), line);
        }
    }
}
