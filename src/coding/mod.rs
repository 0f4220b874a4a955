//! `NSCoder` source generation.
//!
//! [`CodeGenerator`] turns a [`crate::PropertyDeclaration`] into the pair of Objective-C
//! statements that archive and restore it, keyed by the attribute name, and renders complete
//! `encodeWithCoder:` / `initWithCoder:` methods from a list of declarations. The call used
//! for an attribute is chosen from its [`crate::ArchiveKind`] and storage width, see
//! [`CoderCall`].
//!
//! # Examples
//!
//! ```rust
//! use propcoder::{CodeGenerator, CodingOptions, DecodeStyle, Selection};
//!
//! let selection = Selection::parse(
//!     "@property (nonatomic, copy) NSString *title;\n\
//!      @property (nonatomic) NSInteger count;",
//! );
//! let generator =
//!     CodeGenerator::new(CodingOptions::default().with_decode_style(DecodeStyle::Secure));
//!
//! let methods = generator.render(selection.declarations());
//! assert!(methods.contains("[coder decodeObjectOfClass:[NSString class] forKey:@\"title\"];"));
//! assert!(methods.contains("[coder encodeInteger:self.count forKey:@\"count\"];"));
//! ```

mod generator;
mod methods;
mod options;

pub use generator::{decode_statement, encode_statement, CodeGenerator, CoderCall};
pub use options::{CodingOptions, DecodeStyle, SuperInit};
