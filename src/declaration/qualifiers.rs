//! Recognised property qualifier keywords.
//!
//! The modifier section of a declaration is kept verbatim on the model; this module gives a
//! typed view of the keywords it contains. Keywords this library does not know about (and
//! `getter=` / `setter=` pairs) are skipped rather than rejected.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Qualifier keywords found in a property's modifier section
    pub struct PropertyQualifiers: u32 {
        /// `atomic`
        const ATOMIC = 0x0001;
        /// `nonatomic`
        const NONATOMIC = 0x0002;
        /// `strong`
        const STRONG = 0x0004;
        /// `weak`
        const WEAK = 0x0008;
        /// `copy`
        const COPY = 0x0010;
        /// `assign`
        const ASSIGN = 0x0020;
        /// `retain`
        const RETAIN = 0x0040;
        /// `unsafe_unretained`
        const UNSAFE_UNRETAINED = 0x0080;
        /// `readonly`
        const READONLY = 0x0100;
        /// `readwrite`
        const READWRITE = 0x0200;
        /// `nullable`
        const NULLABLE = 0x0400;
        /// `nonnull`
        const NONNULL = 0x0800;
        /// `null_resettable`
        const NULL_RESETTABLE = 0x1000;
        /// `null_unspecified`
        const NULL_UNSPECIFIED = 0x2000;
        /// `class`
        const CLASS = 0x4000;
        /// `direct`
        const DIRECT = 0x8000;
    }
}

impl PropertyQualifiers {
    /// Map a single qualifier keyword to its flag.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "atomic" => Self::ATOMIC,
            "nonatomic" => Self::NONATOMIC,
            "strong" => Self::STRONG,
            "weak" => Self::WEAK,
            "copy" => Self::COPY,
            "assign" => Self::ASSIGN,
            "retain" => Self::RETAIN,
            "unsafe_unretained" => Self::UNSAFE_UNRETAINED,
            "readonly" => Self::READONLY,
            "readwrite" => Self::READWRITE,
            "nullable" => Self::NULLABLE,
            "nonnull" => Self::NONNULL,
            "null_resettable" => Self::NULL_RESETTABLE,
            "null_unspecified" => Self::NULL_UNSPECIFIED,
            "class" => Self::CLASS,
            "direct" => Self::DIRECT,
            _ => return None,
        })
    }

    /// Collect the recognised keywords of a raw, comma separated modifier list.
    ///
    /// ```rust
    /// use propcoder::PropertyQualifiers;
    ///
    /// let qualifiers = PropertyQualifiers::from_attributes("nonatomic, copy, getter=isOn");
    /// assert_eq!(qualifiers, PropertyQualifiers::NONATOMIC | PropertyQualifiers::COPY);
    /// ```
    #[must_use]
    pub fn from_attributes(attributes: &str) -> Self {
        attributes
            .split(',')
            .filter_map(|keyword| Self::from_keyword(keyword.trim()))
            .fold(Self::empty(), |acc, flag| acc | flag)
    }

    /// Returns `true` if the property has no setter.
    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.contains(Self::READONLY)
    }

    /// Returns `true` for class properties, which are not part of instance state.
    #[must_use]
    pub fn is_class_property(&self) -> bool {
        self.contains(Self::CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attributes() {
        let qualifiers = PropertyQualifiers::from_attributes("nonatomic, strong, readonly");
        assert!(qualifiers.contains(PropertyQualifiers::NONATOMIC));
        assert!(qualifiers.contains(PropertyQualifiers::STRONG));
        assert!(qualifiers.is_readonly());
        assert!(!qualifiers.is_class_property());
    }

    #[test]
    fn test_whitespace_and_unknown_keywords() {
        let qualifiers =
            PropertyQualifiers::from_attributes("  weak ,nonatomic,setter=setX:, frobnicate");
        assert_eq!(
            qualifiers,
            PropertyQualifiers::WEAK | PropertyQualifiers::NONATOMIC
        );
    }

    #[test]
    fn test_empty_attributes() {
        assert!(PropertyQualifiers::from_attributes("").is_empty());
        assert!(PropertyQualifiers::from_attributes(" , ").is_empty());
    }

    #[test]
    fn test_class_property() {
        assert!(PropertyQualifiers::from_attributes("class, readonly").is_class_property());
    }
}
