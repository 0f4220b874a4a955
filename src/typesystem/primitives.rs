use std::fmt;

use crate::typesystem::ArchiveKind;

/// Storage width of a scalar primitive, used to pick the matching `NSCoder` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarWidth {
    /// 8 bits
    W8,
    /// 16 bits
    W16,
    /// 32 bits
    W32,
    /// 64 bits
    W64,
    /// Platform dependent (`NSInteger`, `long`, `size_t`, `CGFloat`, ...)
    Platform,
}

impl fmt::Display for ScalarWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarWidth::W8 => write!(f, "8-bit"),
            ScalarWidth::W16 => write!(f, "16-bit"),
            ScalarWidth::W32 => write!(f, "32-bit"),
            ScalarWidth::W64 => write!(f, "64-bit"),
            ScalarWidth::Platform => write!(f, "platform"),
        }
    }
}

/// One entry of the primitive keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    /// The keyword spelling, multi-word spellings separated by single spaces
    pub keyword: &'static str,
    /// How values of this type are archived
    pub kind: ArchiveKind,
    /// Storage width
    pub width: ScalarWidth,
}

const fn primitive(keyword: &'static str, kind: ArchiveKind, width: ScalarWidth) -> Primitive {
    Primitive {
        keyword,
        kind,
        width,
    }
}

/// Type qualifiers that do not change how a scalar is archived.
const IGNORED_QUALIFIERS: &[&str] = &["const", "volatile"];

#[rustfmt::skip]
static PRIMITIVES: &[Primitive] = &[
    // Signed integers
    primitive("NSInteger", ArchiveKind::Integer, ScalarWidth::Platform),
    primitive("int", ArchiveKind::Integer, ScalarWidth::W32),
    primitive("signed", ArchiveKind::Integer, ScalarWidth::W32),
    primitive("signed int", ArchiveKind::Integer, ScalarWidth::W32),
    primitive("short", ArchiveKind::Integer, ScalarWidth::W16),
    primitive("short int", ArchiveKind::Integer, ScalarWidth::W16),
    primitive("signed short", ArchiveKind::Integer, ScalarWidth::W16),
    primitive("signed short int", ArchiveKind::Integer, ScalarWidth::W16),
    primitive("long", ArchiveKind::Integer, ScalarWidth::Platform),
    primitive("long int", ArchiveKind::Integer, ScalarWidth::Platform),
    primitive("signed long", ArchiveKind::Integer, ScalarWidth::Platform),
    primitive("signed long int", ArchiveKind::Integer, ScalarWidth::Platform),
    primitive("long long", ArchiveKind::Integer, ScalarWidth::W64),
    primitive("long long int", ArchiveKind::Integer, ScalarWidth::W64),
    primitive("signed long long", ArchiveKind::Integer, ScalarWidth::W64),
    primitive("signed long long int", ArchiveKind::Integer, ScalarWidth::W64),
    primitive("int8_t", ArchiveKind::Integer, ScalarWidth::W8),
    primitive("int16_t", ArchiveKind::Integer, ScalarWidth::W16),
    primitive("int32_t", ArchiveKind::Integer, ScalarWidth::W32),
    primitive("int64_t", ArchiveKind::Integer, ScalarWidth::W64),
    primitive("SInt8", ArchiveKind::Integer, ScalarWidth::W8),
    primitive("SInt16", ArchiveKind::Integer, ScalarWidth::W16),
    primitive("SInt32", ArchiveKind::Integer, ScalarWidth::W32),
    primitive("SInt64", ArchiveKind::Integer, ScalarWidth::W64),
    primitive("ssize_t", ArchiveKind::Integer, ScalarWidth::Platform),
    primitive("intptr_t", ArchiveKind::Integer, ScalarWidth::Platform),
    primitive("ptrdiff_t", ArchiveKind::Integer, ScalarWidth::Platform),
    // Unsigned integers
    primitive("NSUInteger", ArchiveKind::UnsignedInteger, ScalarWidth::Platform),
    primitive("unsigned", ArchiveKind::UnsignedInteger, ScalarWidth::W32),
    primitive("unsigned int", ArchiveKind::UnsignedInteger, ScalarWidth::W32),
    primitive("unsigned short", ArchiveKind::UnsignedInteger, ScalarWidth::W16),
    primitive("unsigned short int", ArchiveKind::UnsignedInteger, ScalarWidth::W16),
    primitive("unsigned long", ArchiveKind::UnsignedInteger, ScalarWidth::Platform),
    primitive("unsigned long int", ArchiveKind::UnsignedInteger, ScalarWidth::Platform),
    primitive("unsigned long long", ArchiveKind::UnsignedInteger, ScalarWidth::W64),
    primitive("unsigned long long int", ArchiveKind::UnsignedInteger, ScalarWidth::W64),
    primitive("uint8_t", ArchiveKind::UnsignedInteger, ScalarWidth::W8),
    primitive("uint16_t", ArchiveKind::UnsignedInteger, ScalarWidth::W16),
    primitive("uint32_t", ArchiveKind::UnsignedInteger, ScalarWidth::W32),
    primitive("uint64_t", ArchiveKind::UnsignedInteger, ScalarWidth::W64),
    primitive("UInt8", ArchiveKind::UnsignedInteger, ScalarWidth::W8),
    primitive("UInt16", ArchiveKind::UnsignedInteger, ScalarWidth::W16),
    primitive("UInt32", ArchiveKind::UnsignedInteger, ScalarWidth::W32),
    primitive("UInt64", ArchiveKind::UnsignedInteger, ScalarWidth::W64),
    primitive("size_t", ArchiveKind::UnsignedInteger, ScalarWidth::Platform),
    primitive("uintptr_t", ArchiveKind::UnsignedInteger, ScalarWidth::Platform),
    // Floating point
    primitive("float", ArchiveKind::FloatingPoint, ScalarWidth::W32),
    primitive("Float32", ArchiveKind::FloatingPoint, ScalarWidth::W32),
    primitive("double", ArchiveKind::FloatingPoint, ScalarWidth::W64),
    primitive("Float64", ArchiveKind::FloatingPoint, ScalarWidth::W64),
    primitive("long double", ArchiveKind::FloatingPoint, ScalarWidth::W64),
    primitive("CGFloat", ArchiveKind::FloatingPoint, ScalarWidth::Platform),
    primitive("NSTimeInterval", ArchiveKind::FloatingPoint, ScalarWidth::W64),
    primitive("CFTimeInterval", ArchiveKind::FloatingPoint, ScalarWidth::W64),
    // Booleans
    primitive("BOOL", ArchiveKind::Boolean, ScalarWidth::W8),
    primitive("bool", ArchiveKind::Boolean, ScalarWidth::W8),
    primitive("_Bool", ArchiveKind::Boolean, ScalarWidth::W8),
    primitive("Boolean", ArchiveKind::Boolean, ScalarWidth::W8),
    // Characters
    primitive("char", ArchiveKind::Char, ScalarWidth::W8),
    primitive("signed char", ArchiveKind::Char, ScalarWidth::W8),
    primitive("unsigned char", ArchiveKind::Char, ScalarWidth::W8),
    primitive("unichar", ArchiveKind::Char, ScalarWidth::W16),
    primitive("UniChar", ArchiveKind::Char, ScalarWidth::W16),
];

/// Returns the full primitive keyword table.
#[must_use]
pub fn primitives() -> &'static [Primitive] {
    PRIMITIVES
}

/// Look up a type in the primitive keyword table.
///
/// Words are compared individually, so runs of whitespace between the words of multi-word
/// spellings do not matter, and `const` / `volatile` qualifiers are ignored.
///
/// ```rust
/// use propcoder::typesystem::{lookup_primitive, ArchiveKind, ScalarWidth};
///
/// let entry = lookup_primitive("const unsigned  long long").unwrap();
/// assert_eq!(entry.kind, ArchiveKind::UnsignedInteger);
/// assert_eq!(entry.width, ScalarWidth::W64);
/// assert!(lookup_primitive("NSString").is_none());
/// ```
#[must_use]
pub fn lookup_primitive(type_name: &str) -> Option<&'static Primitive> {
    let words = || {
        type_name
            .split_whitespace()
            .filter(|word| !IGNORED_QUALIFIERS.contains(word))
    };

    if words().next().is_none() {
        return None;
    }

    PRIMITIVES
        .iter()
        .find(|entry| entry.keyword.split(' ').eq(words()))
}
