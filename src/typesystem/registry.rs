//! Static registry of well-known Objective-C classes.
//!
//! Class names are resolved against an immutable table built at compile time. A
//! [`ClassDescriptor`] is a capability tag only: it records how instances of the class can
//! be decoded, nothing more.

use std::fmt;

/// How instances of a registered class can be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveSupport {
    /// Conforms to `NSSecureCoding`; decodable with `decodeObjectOfClass:forKey:`
    SecureCoding,
    /// Conforms to `NSSecureCoding` and holds other objects, so secure decoding also needs
    /// the classes of its elements
    SecureCollection,
    /// Conforms to `NSCoding` only
    Coding,
}

/// A recognised class name and its archiving capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassDescriptor {
    /// The class name as written in source
    pub name: &'static str,
    /// Archiving capability
    pub support: ArchiveSupport,
}

impl ClassDescriptor {
    /// Returns `true` if the class can be decoded with the secure coding calls.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        matches!(
            self.support,
            ArchiveSupport::SecureCoding | ArchiveSupport::SecureCollection
        )
    }

    /// Returns `true` if the class holds other objects.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.support == ArchiveSupport::SecureCollection
    }
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const fn class(name: &'static str, support: ArchiveSupport) -> ClassDescriptor {
    ClassDescriptor { name, support }
}

#[rustfmt::skip]
static CLASSES: &[ClassDescriptor] = &[
    // Foundation values
    class("NSString", ArchiveSupport::SecureCoding),
    class("NSMutableString", ArchiveSupport::SecureCoding),
    class("NSAttributedString", ArchiveSupport::SecureCoding),
    class("NSMutableAttributedString", ArchiveSupport::SecureCoding),
    class("NSNumber", ArchiveSupport::SecureCoding),
    class("NSDecimalNumber", ArchiveSupport::SecureCoding),
    class("NSValue", ArchiveSupport::SecureCoding),
    class("NSData", ArchiveSupport::SecureCoding),
    class("NSMutableData", ArchiveSupport::SecureCoding),
    class("NSDate", ArchiveSupport::SecureCoding),
    class("NSDateComponents", ArchiveSupport::SecureCoding),
    class("NSURL", ArchiveSupport::SecureCoding),
    class("NSURLComponents", ArchiveSupport::SecureCoding),
    class("NSUUID", ArchiveSupport::SecureCoding),
    class("NSLocale", ArchiveSupport::SecureCoding),
    class("NSTimeZone", ArchiveSupport::SecureCoding),
    class("NSCalendar", ArchiveSupport::SecureCoding),
    class("NSIndexSet", ArchiveSupport::SecureCoding),
    class("NSMutableIndexSet", ArchiveSupport::SecureCoding),
    class("NSIndexPath", ArchiveSupport::SecureCoding),
    class("NSError", ArchiveSupport::SecureCoding),
    class("NSNull", ArchiveSupport::SecureCoding),
    class("NSCharacterSet", ArchiveSupport::SecureCoding),
    class("NSPersonNameComponents", ArchiveSupport::SecureCoding),
    class("NSMeasurement", ArchiveSupport::SecureCoding),
    class("NSUnit", ArchiveSupport::SecureCoding),
    // Foundation collections
    class("NSArray", ArchiveSupport::SecureCollection),
    class("NSMutableArray", ArchiveSupport::SecureCollection),
    class("NSDictionary", ArchiveSupport::SecureCollection),
    class("NSMutableDictionary", ArchiveSupport::SecureCollection),
    class("NSSet", ArchiveSupport::SecureCollection),
    class("NSMutableSet", ArchiveSupport::SecureCollection),
    class("NSOrderedSet", ArchiveSupport::SecureCollection),
    class("NSMutableOrderedSet", ArchiveSupport::SecureCollection),
    class("NSCountedSet", ArchiveSupport::SecureCollection),
    class("NSOrderedCollectionDifference", ArchiveSupport::SecureCollection),
    // UIKit / AppKit
    class("UIColor", ArchiveSupport::SecureCoding),
    class("UIImage", ArchiveSupport::SecureCoding),
    class("UIFont", ArchiveSupport::SecureCoding),
    class("UIFontDescriptor", ArchiveSupport::SecureCoding),
    class("UIBezierPath", ArchiveSupport::SecureCoding),
    class("NSColor", ArchiveSupport::SecureCoding),
    class("NSImage", ArchiveSupport::SecureCoding),
    class("NSFont", ArchiveSupport::SecureCoding),
    class("NSFontDescriptor", ArchiveSupport::SecureCoding),
    class("NSBezierPath", ArchiveSupport::SecureCoding),
    // NSCoding only
    class("NSSortDescriptor", ArchiveSupport::Coding),
    class("NSPredicate", ArchiveSupport::Coding),
    class("NSExpression", ArchiveSupport::Coding),
    class("NSHashTable", ArchiveSupport::Coding),
    class("NSMapTable", ArchiveSupport::Coding),
];

/// Words that may appear among the words of an object type without being part of its class name.
const CLASS_QUALIFIERS: &[&str] = &["__kindof", "const"];

/// Returns the full class table.
#[must_use]
pub fn classes() -> &'static [ClassDescriptor] {
    CLASSES
}

/// Look up an exact class name.
#[must_use]
pub fn lookup_class(name: &str) -> Option<&'static ClassDescriptor> {
    CLASSES.iter().find(|descriptor| descriptor.name == name)
}

/// Resolve the class of an object type such as `NSArray<NSString *>` or `__kindof UIView`.
///
/// Generic arguments and the `__kindof` / `const` qualifiers are ignored; the remaining class
/// name must be registered.
///
/// ```rust
/// use propcoder::typesystem::resolve_class;
///
/// assert_eq!(resolve_class("NSArray<NSString *>").map(|c| c.name), Some("NSArray"));
/// assert!(resolve_class("MyModel").is_none());
/// ```
#[must_use]
pub fn resolve_class(type_name: &str) -> Option<&'static ClassDescriptor> {
    lookup_class(base_class_name(type_name))
}

/// Strip generic arguments and class qualifiers from an object type.
///
/// `__kindof` and `const` are dropped wherever they appear among the type words.
///
/// ```rust
/// use propcoder::typesystem::base_class_name;
///
/// assert_eq!(base_class_name("__kindof NSArray<NSString *>"), "NSArray");
/// assert_eq!(base_class_name("NSString const"), "NSString");
/// assert_eq!(base_class_name("id<NSCopying>"), "id");
/// ```
#[must_use]
pub fn base_class_name(type_name: &str) -> &str {
    let words = type_name.split('<').next().unwrap_or(type_name);
    words
        .split_whitespace()
        .find(|word| !CLASS_QUALIFIERS.contains(word))
        .unwrap_or_default()
}

/// Split the top-level generic arguments of an object type.
///
/// Pointer markers and surrounding whitespace are removed from each argument; nested
/// arguments are returned whole.
///
/// ```rust
/// use propcoder::typesystem::generic_arguments;
///
/// assert_eq!(
///     generic_arguments("NSDictionary<NSString *, NSArray<NSNumber *> *>"),
///     vec!["NSString", "NSArray<NSNumber *>"]
/// );
/// assert!(generic_arguments("NSString").is_empty());
/// ```
#[must_use]
pub fn generic_arguments(type_name: &str) -> Vec<&str> {
    let Some(open) = type_name.find('<') else {
        return Vec::new();
    };
    let Some(close) = type_name.rfind('>') else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }

    let inner = &type_name[open + 1..close];
    let mut arguments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                arguments.push(&inner[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    arguments.push(&inner[start..]);

    arguments
        .into_iter()
        .map(|argument| argument.trim().trim_end_matches(['*', ' ']).trim())
        .filter(|argument| !argument.is_empty())
        .collect()
}
