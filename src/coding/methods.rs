//! Rendering of complete `NSCoding` methods.
//!
//! Statements from [`CodeGenerator`] are wrapped into `encodeWithCoder:` and
//! `initWithCoder:` bodies, one statement per line, each terminated with `;`.

use log::debug;

use crate::{
    coding::{CodeGenerator, SuperInit},
    declaration::PropertyDeclaration,
};

impl CodeGenerator {
    /// Render `- (void)encodeWithCoder:` for the given declarations, in order.
    ///
    /// Class properties are skipped.
    ///
    /// ```rust
    /// use propcoder::{parse, CodeGenerator};
    ///
    /// let title = parse("@property (nonatomic, copy) NSString *title;")?;
    /// let method = CodeGenerator::default().encode_method([&title]);
    ///
    /// assert_eq!(
    ///     method,
    ///     "- (void)encodeWithCoder:(NSCoder *)coder {\n    [coder encodeObject:self.title forKey:@\"title\"];\n}"
    /// );
    /// # Ok::<(), propcoder::Error>(())
    /// ```
    #[must_use]
    pub fn encode_method<'p, I>(&self, declarations: I) -> String
    where
        I: IntoIterator<Item = &'p PropertyDeclaration>,
    {
        let options = self.options();
        let indent = &options.indent;

        let mut lines = vec![format!(
            "- (void)encodeWithCoder:(NSCoder *){} {{",
            options.coder
        )];
        if options.super_init == SuperInit::Coder {
            lines.push(format!("{indent}[super encodeWithCoder:{}];", options.coder));
        }
        for declaration in instance_state(declarations) {
            if let Some(statement) = self.encode_statement(declaration) {
                lines.push(format!("{indent}{statement};"));
            }
        }
        lines.push("}".to_string());

        lines.join("\n")
    }

    /// Render `- (instancetype)initWithCoder:` for the given declarations, in order.
    ///
    /// Class properties are skipped.
    #[must_use]
    pub fn init_method<'p, I>(&self, declarations: I) -> String
    where
        I: IntoIterator<Item = &'p PropertyDeclaration>,
    {
        let options = self.options();
        let indent = &options.indent;
        let super_call = match options.super_init {
            SuperInit::Init => "[super init]".to_string(),
            SuperInit::Coder => format!("[super initWithCoder:{}]", options.coder),
        };

        let mut lines = vec![
            format!(
                "- (instancetype)initWithCoder:(NSCoder *){} {{",
                options.coder
            ),
            format!("{indent}if (self = {super_call}) {{"),
        ];
        for declaration in instance_state(declarations) {
            if let Some(statement) = self.decode_statement(declaration) {
                lines.push(format!("{indent}{indent}{statement};"));
            }
        }
        lines.push(format!("{indent}}}"));
        lines.push(format!("{indent}return self;"));
        lines.push("}".to_string());

        lines.join("\n")
    }

    /// Render both methods, separated by a blank line.
    #[must_use]
    pub fn render<'p, I>(&self, declarations: I) -> String
    where
        I: IntoIterator<Item = &'p PropertyDeclaration>,
    {
        let declarations: Vec<_> = declarations.into_iter().collect();
        format!(
            "{}\n\n{}",
            self.encode_method(declarations.iter().copied()),
            self.init_method(declarations.iter().copied())
        )
    }

    /// The bare statements for every declaration, encode statements first.
    #[must_use]
    pub fn statements<'p, I>(&self, declarations: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'p PropertyDeclaration>,
    {
        let declarations: Vec<_> = instance_state(declarations).collect();
        let encoded = declarations
            .iter()
            .filter_map(|declaration| self.encode_statement(declaration));
        let decoded = declarations
            .iter()
            .filter_map(|declaration| self.decode_statement(declaration));

        encoded.chain(decoded).collect()
    }
}

fn instance_state<'p, I>(declarations: I) -> impl Iterator<Item = &'p PropertyDeclaration>
where
    I: IntoIterator<Item = &'p PropertyDeclaration>,
{
    declarations.into_iter().filter(|declaration| {
        let class_property = declaration.qualifiers().is_class_property();
        if class_property {
            debug!("skipping class property '{}'", declaration.name());
        }
        !class_property
    })
}
