use std::fmt;

use log::debug;

use crate::{
    coding::{CodingOptions, DecodeStyle},
    declaration::PropertyDeclaration,
    typesystem::{lookup_primitive, ArchiveKind, ClassDescriptor, ScalarWidth},
};

/// The `NSCoder` call family used to archive one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoderCall {
    /// `encodeObject:forKey:` / `decodeObjectForKey:`
    Object,
    /// `encodeBool:forKey:` / `decodeBoolForKey:`
    Bool,
    /// `encodeInt32:forKey:` / `decodeInt32ForKey:`
    Int32,
    /// `encodeInt64:forKey:` / `decodeInt64ForKey:`
    Int64,
    /// `encodeInteger:forKey:` / `decodeIntegerForKey:`
    Integer,
    /// `encodeFloat:forKey:` / `decodeFloatForKey:`
    Float,
    /// `encodeDouble:forKey:` / `decodeDoubleForKey:`
    Double,
}

impl CoderCall {
    /// Select the call for an archive kind and storage width.
    ///
    /// Unsigned values travel through the next wider signed call where one exists, so no
    /// value is truncated; 64-bit and platform-width unsigned values are reinterpreted.
    #[must_use]
    pub fn for_kind(kind: ArchiveKind, width: ScalarWidth) -> Self {
        match (kind, width) {
            (ArchiveKind::Object, _) => CoderCall::Object,
            (ArchiveKind::Boolean, _) => CoderCall::Bool,
            (ArchiveKind::Char, _) => CoderCall::Int32,
            (ArchiveKind::Integer, ScalarWidth::W8 | ScalarWidth::W16 | ScalarWidth::W32) => {
                CoderCall::Int32
            }
            (ArchiveKind::Integer, ScalarWidth::W64) => CoderCall::Int64,
            (ArchiveKind::UnsignedInteger, ScalarWidth::W8 | ScalarWidth::W16) => CoderCall::Int32,
            (ArchiveKind::UnsignedInteger, ScalarWidth::W32 | ScalarWidth::W64) => {
                CoderCall::Int64
            }
            (ArchiveKind::FloatingPoint, ScalarWidth::W8 | ScalarWidth::W16 | ScalarWidth::W32) => {
                CoderCall::Float
            }
            (ArchiveKind::FloatingPoint, ScalarWidth::W64 | ScalarWidth::Platform) => {
                CoderCall::Double
            }
            (
                ArchiveKind::Integer | ArchiveKind::UnsignedInteger | ArchiveKind::UnknownScalar,
                _,
            ) => CoderCall::Integer,
        }
    }

    /// Select the call for a parsed declaration.
    #[must_use]
    pub fn for_declaration(declaration: &PropertyDeclaration) -> Self {
        CoderCall::for_kind(declaration.archive_kind(), scalar_width(declaration))
    }

    /// The encoding selector, without its trailing colon.
    #[must_use]
    pub fn encode_selector(&self) -> &'static str {
        match self {
            CoderCall::Object => "encodeObject",
            CoderCall::Bool => "encodeBool",
            CoderCall::Int32 => "encodeInt32",
            CoderCall::Int64 => "encodeInt64",
            CoderCall::Integer => "encodeInteger",
            CoderCall::Float => "encodeFloat",
            CoderCall::Double => "encodeDouble",
        }
    }

    /// The decoding selector, without its trailing colon.
    #[must_use]
    pub fn decode_selector(&self) -> &'static str {
        match self {
            CoderCall::Object => "decodeObjectForKey",
            CoderCall::Bool => "decodeBoolForKey",
            CoderCall::Int32 => "decodeInt32ForKey",
            CoderCall::Int64 => "decodeInt64ForKey",
            CoderCall::Integer => "decodeIntegerForKey",
            CoderCall::Float => "decodeFloatForKey",
            CoderCall::Double => "decodeDoubleForKey",
        }
    }

    /// The value type the call takes and returns.
    #[must_use]
    pub fn native_type(&self) -> &'static str {
        match self {
            CoderCall::Object => "id",
            CoderCall::Bool => "BOOL",
            CoderCall::Int32 => "int32_t",
            CoderCall::Int64 => "int64_t",
            CoderCall::Integer => "NSInteger",
            CoderCall::Float => "float",
            CoderCall::Double => "double",
        }
    }
}

impl fmt::Display for CoderCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:forKey:", self.encode_selector())
    }
}

/// Storage width of a scalar declaration; types missing from the table count as platform width.
fn scalar_width(declaration: &PropertyDeclaration) -> ScalarWidth {
    lookup_primitive(declaration.type_name()).map_or(ScalarWidth::Platform, |entry| entry.width)
}

/// Cast applied to the value being encoded, if the implicit conversion could change it.
fn encode_cast(kind: ArchiveKind, width: ScalarWidth) -> Option<&'static str> {
    match (kind, width) {
        (ArchiveKind::UnsignedInteger, ScalarWidth::W64) => Some("(int64_t)"),
        (ArchiveKind::UnsignedInteger, ScalarWidth::Platform) | (ArchiveKind::UnknownScalar, _) => {
            Some("(NSInteger)")
        }
        _ => None,
    }
}

/// Generates `NSCoder` statements for parsed declarations.
///
/// Statements are returned without a trailing `;` so callers can embed them freely.
///
/// # Examples
///
/// ```rust
/// use propcoder::{parse, CodeGenerator};
///
/// let generator = CodeGenerator::default();
/// let title = parse("@property (nonatomic, copy) NSString *title;")?;
///
/// assert_eq!(
///     generator.encode_statement(&title).as_deref(),
///     Some(r#"[coder encodeObject:self.title forKey:@"title"]"#)
/// );
/// assert_eq!(
///     generator.decode_statement(&title).as_deref(),
///     Some(r#"self.title = [coder decodeObjectForKey:@"title"]"#)
/// );
/// # Ok::<(), propcoder::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    options: CodingOptions,
}

impl CodeGenerator {
    /// Create a generator with the given options.
    #[must_use]
    pub fn new(options: CodingOptions) -> Self {
        CodeGenerator { options }
    }

    /// The options this generator was created with.
    #[must_use]
    pub fn options(&self) -> &CodingOptions {
        &self.options
    }

    /// Emit the statement archiving `declaration` under a key equal to its name.
    ///
    /// Always returns `Some` for a parsed declaration: types missing from the primitive
    /// table fall back to the generic integer call.
    #[must_use]
    pub fn encode_statement(&self, declaration: &PropertyDeclaration) -> Option<String> {
        let kind = declaration.archive_kind();
        let width = scalar_width(declaration);
        let call = CoderCall::for_kind(kind, width);
        let cast = encode_cast(kind, width).unwrap_or_default();

        Some(format!(
            "[{coder} {selector}:{cast}self.{name} forKey:@\"{name}\"]",
            coder = self.options.coder,
            selector = call.encode_selector(),
            name = declaration.name(),
        ))
    }

    /// Emit the statement assigning the decoded value of `declaration` back to it.
    ///
    /// Always returns `Some` for a parsed declaration.
    #[must_use]
    pub fn decode_statement(&self, declaration: &PropertyDeclaration) -> Option<String> {
        let call = CoderCall::for_declaration(declaration);
        let expression = if call == CoderCall::Object {
            self.decode_object(declaration)
        } else {
            self.decode_scalar(declaration, call)
        };

        Some(format!("{} = {expression}", self.target(declaration)))
    }

    /// The assignment target: the property, or its backing ivar for `readonly` properties
    /// when [`CodingOptions::readonly_ivar`] is set.
    fn target(&self, declaration: &PropertyDeclaration) -> String {
        if self.options.readonly_ivar && declaration.qualifiers().is_readonly() {
            format!("_{}", declaration.name())
        } else {
            format!("self.{}", declaration.name())
        }
    }

    fn decode_scalar(&self, declaration: &PropertyDeclaration, call: CoderCall) -> String {
        let expression = self.decode_call(call.decode_selector(), declaration.name());
        if declaration.type_name() == call.native_type() {
            expression
        } else {
            format!("({}){expression}", declaration.type_name())
        }
    }

    fn decode_object(&self, declaration: &PropertyDeclaration) -> String {
        let plain = self.decode_call(CoderCall::Object.decode_selector(), declaration.name());

        let Some(class) = declaration.property_class() else {
            return plain;
        };

        match self.options.decode_style {
            DecodeStyle::Plain => plain,
            DecodeStyle::Cast => format!("({}){plain}", declaration.declared_type()),
            DecodeStyle::Secure if class.is_secure() => self.decode_secure(declaration, class),
            DecodeStyle::Secure => {
                debug!(
                    "{} does not adopt NSSecureCoding, decoding '{}' without a class check",
                    class,
                    declaration.name()
                );
                plain
            }
        }
    }

    fn decode_secure(
        &self,
        declaration: &PropertyDeclaration,
        class: &'static ClassDescriptor,
    ) -> String {
        let name = declaration.name();
        let coder = &self.options.coder;

        if class.is_collection() {
            match declaration.element_classes() {
                Some(elements) if !elements.is_empty() => {
                    let mut allowed = vec![class];
                    for element in elements {
                        if !allowed.contains(&element) {
                            allowed.push(element);
                        }
                    }

                    let classes = allowed
                        .iter()
                        .map(|descriptor| format!("[{descriptor} class]"))
                        .collect::<Vec<_>>()
                        .join(", ");

                    return format!(
                        "[{coder} decodeObjectOfClasses:[NSSet setWithObjects:{classes}, nil] forKey:@\"{name}\"]"
                    );
                }
                Some(_) => {
                    debug!("'{name}' declares no element classes, decoding the {class} only");
                }
                None => {
                    debug!("'{name}' has unregistered element classes, decoding the {class} only");
                }
            }
        }

        format!("[{coder} decodeObjectOfClass:[{class} class] forKey:@\"{name}\"]")
    }

    fn decode_call(&self, selector: &str, key: &str) -> String {
        format!("[{} {selector}:@\"{key}\"]", self.options.coder)
    }
}

/// Emit the encode statement for `declaration` with the default [`CodingOptions`].
///
/// ```rust
/// use propcoder::{encode_statement, parse};
///
/// let count = parse("@property (nonatomic) NSInteger count;")?;
/// assert_eq!(
///     encode_statement(&count).as_deref(),
///     Some(r#"[coder encodeInteger:self.count forKey:@"count"]"#)
/// );
/// # Ok::<(), propcoder::Error>(())
/// ```
#[must_use]
pub fn encode_statement(declaration: &PropertyDeclaration) -> Option<String> {
    CodeGenerator::default().encode_statement(declaration)
}

/// Emit the decode statement for `declaration` with the default [`CodingOptions`].
///
/// ```rust
/// use propcoder::{decode_statement, parse};
///
/// let count = parse("@property (nonatomic) NSInteger count;")?;
/// assert_eq!(
///     decode_statement(&count).as_deref(),
///     Some(r#"self.count = [coder decodeIntegerForKey:@"count"]"#)
/// );
/// # Ok::<(), propcoder::Error>(())
/// ```
#[must_use]
pub fn decode_statement(declaration: &PropertyDeclaration) -> Option<String> {
    CodeGenerator::default().decode_statement(declaration)
}
