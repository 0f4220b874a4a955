//! Archiving classification for declared property types.
//!
//! This module decides how an attribute has to travel through `NSCoder`. Pointer types are
//! archived as objects; everything else is looked up in a static table of primitive
//! keywords. Types that are neither classify as [`ArchiveKind::UnknownScalar`] and are still
//! archived through a generic integer call.
//!
//! # Key Components
//!
//! - [`classify`]: type name + pointer flag to [`ArchiveKind`]
//! - [`lookup_primitive`]: the primitive keyword table with storage widths
//! - [`resolve_class`]: the static class registry used for [`ClassDescriptor`] lookup
//!
//! # Examples
//!
//! ```rust
//! use propcoder::typesystem::{classify, ArchiveKind};
//!
//! assert_eq!(classify("NSString", true), ArchiveKind::Object);
//! assert_eq!(classify("NSInteger", false), ArchiveKind::Integer);
//! assert_eq!(classify("id<NSCopying>", false), ArchiveKind::Object);
//! assert_eq!(classify("UIViewContentMode", false), ArchiveKind::UnknownScalar);
//! ```

mod primitives;
mod registry;

use std::fmt;

use strum::{EnumCount, EnumIter};

pub use primitives::{lookup_primitive, primitives, Primitive, ScalarWidth};
pub use registry::{
    base_class_name, classes, generic_arguments, lookup_class, resolve_class, ArchiveSupport,
    ClassDescriptor,
};

/// The implicitly-pointer object type keyword.
const OBJECT_KEYWORD: &str = "id";

/// How an attribute must be serialized and deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum ArchiveKind {
    /// Object reference, archived with `encodeObject:forKey:`
    Object,
    /// Signed integer
    Integer,
    /// Unsigned integer
    UnsignedInteger,
    /// Floating point number
    FloatingPoint,
    /// Boolean
    Boolean,
    /// Character
    Char,
    /// Non-pointer type missing from the primitive table (usually an enum or option type)
    UnknownScalar,
}

impl ArchiveKind {
    /// Returns `true` for object references.
    #[must_use]
    pub fn is_object(&self) -> bool {
        *self == ArchiveKind::Object
    }

    /// Returns `true` for every kind other than [`ArchiveKind::Object`].
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        !self.is_object()
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveKind::Object => write!(f, "object"),
            ArchiveKind::Integer => write!(f, "integer"),
            ArchiveKind::UnsignedInteger => write!(f, "unsigned integer"),
            ArchiveKind::FloatingPoint => write!(f, "floating point"),
            ArchiveKind::Boolean => write!(f, "boolean"),
            ArchiveKind::Char => write!(f, "char"),
            ArchiveKind::UnknownScalar => write!(f, "unknown scalar"),
        }
    }
}

/// Classify a declared type into its [`ArchiveKind`].
///
/// Any pointer type is an [`ArchiveKind::Object`], whatever its name. Without a pointer
/// marker the bare or protocol-qualified `id` keyword is also an object; other types are
/// looked up in the primitive table and fall back to [`ArchiveKind::UnknownScalar`].
///
/// ## Arguments
/// * `type_name` - The declared type, without pointer markers
/// * `is_pointer` - Whether the declaration carried at least one pointer marker
#[must_use]
pub fn classify(type_name: &str, is_pointer: bool) -> ArchiveKind {
    if is_pointer || is_object_keyword(type_name) {
        return ArchiveKind::Object;
    }

    lookup_primitive(type_name).map_or(ArchiveKind::UnknownScalar, |entry| entry.kind)
}

/// Returns `true` for `id` and protocol-qualified `id<...>`.
#[must_use]
pub fn is_object_keyword(type_name: &str) -> bool {
    base_class_name(type_name) == OBJECT_KEYWORD
}
