use std::fmt;

/// How object attributes are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecodeStyle {
    /// `[coder decodeObjectForKey:@"key"]`, assigned as a generic object reference
    #[default]
    Plain,
    /// The plain call, cast to the declared type when the class is registered
    Cast,
    /// `decodeObjectOfClass:forKey:` / `decodeObjectOfClasses:forKey:` for registered
    /// secure-coding classes
    Secure,
}

impl fmt::Display for DecodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeStyle::Plain => write!(f, "plain"),
            DecodeStyle::Cast => write!(f, "cast"),
            DecodeStyle::Secure => write!(f, "secure"),
        }
    }
}

/// Which superclass initializer the rendered `initWithCoder:` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SuperInit {
    /// `[super init]`, for direct `NSObject` subclasses
    #[default]
    Init,
    /// `[super initWithCoder:coder]`, for subclasses of an `NSCoding` class; the rendered
    /// `encodeWithCoder:` then also calls `[super encodeWithCoder:coder]`
    Coder,
}

impl fmt::Display for SuperInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuperInit::Init => write!(f, "init"),
            SuperInit::Coder => write!(f, "coder"),
        }
    }
}

/// Settings for [`crate::CodeGenerator`].
///
/// The defaults reproduce the plain `NSCoding` style:
///
/// ```rust
/// use propcoder::{CodingOptions, DecodeStyle, SuperInit};
///
/// let options = CodingOptions::default();
/// assert_eq!(options.coder, "coder");
/// assert_eq!(options.decode_style, DecodeStyle::Plain);
/// assert_eq!(options.super_init, SuperInit::Init);
/// assert!(!options.readonly_ivar);
///
/// let secure = CodingOptions::default()
///     .with_coder("aDecoder")
///     .with_decode_style(DecodeStyle::Secure);
/// assert_eq!(secure.coder, "aDecoder");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingOptions {
    /// Name of the `NSCoder` variable used in statements and method signatures
    pub coder: String,
    /// How object attributes are decoded
    pub decode_style: DecodeStyle,
    /// Decode `readonly` properties into their `_name` backing ivar
    pub readonly_ivar: bool,
    /// Superclass initializer used by the rendered `initWithCoder:`
    pub super_init: SuperInit,
    /// One level of indentation in rendered methods
    pub indent: String,
}

impl Default for CodingOptions {
    fn default() -> Self {
        CodingOptions {
            coder: "coder".to_string(),
            decode_style: DecodeStyle::default(),
            readonly_ivar: false,
            super_init: SuperInit::default(),
            indent: "    ".to_string(),
        }
    }
}

impl CodingOptions {
    /// Set the coder variable name.
    #[must_use]
    pub fn with_coder(mut self, coder: impl Into<String>) -> Self {
        self.coder = coder.into();
        self
    }

    /// Set the object decode style.
    #[must_use]
    pub fn with_decode_style(mut self, decode_style: DecodeStyle) -> Self {
        self.decode_style = decode_style;
        self
    }

    /// Enable or disable decoding `readonly` properties into their backing ivar.
    #[must_use]
    pub fn with_readonly_ivar(mut self, readonly_ivar: bool) -> Self {
        self.readonly_ivar = readonly_ivar;
        self
    }

    /// Set the superclass initializer.
    #[must_use]
    pub fn with_super_init(mut self, super_init: SuperInit) -> Self {
        self.super_init = super_init;
        self
    }

    /// Set the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}
