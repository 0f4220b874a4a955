// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # propcoder
//!
//! Generate `NSCoding` archiving code from Objective-C `@property` declarations.
//!
//! `propcoder` parses single declaration lines into a structured
//! [`PropertyDeclaration`], classifies the declared type into an [`ArchiveKind`], and emits
//! the matching `NSCoder` encode and decode statements, keyed by the attribute name. For a
//! block of lines (an editor selection, a header file) [`Selection`] keeps the declarations
//! that parse and records why the others were skipped, and [`CodeGenerator`] renders complete
//! `encodeWithCoder:` / `initWithCoder:` methods from them.
//!
//! ## Features
//!
//! - **Strict parsing** - Unsupported constructs (blocks, function pointers, C arrays) are
//!   rejected with a specific [`Error`] instead of producing a guess
//! - **Typed modifiers** - The raw modifier section is kept, with a [`PropertyQualifiers`]
//!   view of its keywords
//! - **Width aware scalars** - Scalar attributes are archived with a call that does not
//!   truncate their values
//! - **Secure coding** - Optional `decodeObjectOfClass:` / `decodeObjectOfClasses:` output for
//!   well-known Foundation and UIKit classes
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use propcoder::prelude::*;
//!
//! let declaration = parse("@property (nonatomic, copy) NSString *title;")?;
//! assert_eq!(declaration.archive_kind(), ArchiveKind::Object);
//! # Ok::<(), propcoder::Error>(())
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use propcoder::{decode_statement, encode_statement, parse};
//!
//! let title = parse("@property (nonatomic, copy) NSString *title;")?;
//!
//! assert_eq!(
//!     encode_statement(&title).as_deref(),
//!     Some(r#"[coder encodeObject:self.title forKey:@"title"]"#)
//! );
//! assert_eq!(
//!     decode_statement(&title).as_deref(),
//!     Some(r#"self.title = [coder decodeObjectForKey:@"title"]"#)
//! );
//! # Ok::<(), propcoder::Error>(())
//! ```
//!
//! ### Whole Selections
//!
//! ```rust
//! use propcoder::{CodeGenerator, Selection};
//!
//! let selection = Selection::parse(
//!     "@interface Point : NSObject <NSCoding>\n\
//!      @property (nonatomic) double x;\n\
//!      @property (nonatomic) double y;\n\
//!      @end",
//! );
//!
//! let methods = CodeGenerator::default().render(selection.declarations());
//! assert!(methods.starts_with("- (void)encodeWithCoder:(NSCoder *)coder {"));
//! assert_eq!(selection.skipped().len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - [`source`] - Character cursor shared by the parsers
//! - [`declaration`] - The declaration model and its parser
//! - [`typesystem`] - Primitive type table, class registry and the type classifier
//! - [`coding`] - Statement generation and method rendering
//! - [`selection`] - Multi-line input
//!
//! ## Error Handling
//!
//! Only parsing can fail. All parse failures are reported via the [`Error`] type, whose
//! variants are reason codes:
//!
//! ```rust
//! use propcoder::{parse, Error};
//!
//! assert_eq!(parse("@property (copy) void (^done)(void);"), Err(Error::BlockType));
//! ```
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! cargo +nightly fuzz run declaration --release
//! ```
//!
//! ### Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use propcoder::prelude::*;
///
/// let selection = Selection::parse("@property BOOL isValid;");
/// let generator = CodeGenerator::new(CodingOptions::default().with_coder("aCoder"));
/// assert!(generator.init_method(selection.declarations()).contains("decodeBoolForKey"));
/// ```
pub mod prelude;

pub mod coding;
pub mod declaration;
pub mod selection;
pub mod source;
pub mod typesystem;

/// `propcoder` Result type
pub type Result<T> = std::result::Result<T, Error>;

/// `propcoder` Error type
///
/// Every reason a declaration line can be rejected.
pub use error::Error;

/// Main entry points for parsing declarations
pub use declaration::{parse, DeclarationParser, PropertyDeclaration, PropertyQualifiers};

/// Type classification
pub use typesystem::{classify, ArchiveKind};

/// Statement generation
pub use coding::{
    decode_statement, encode_statement, CodeGenerator, CoderCall, CodingOptions, DecodeStyle,
    SuperInit,
};

/// Multi-line input
pub use selection::{ParsedLine, Selection, SkippedLine};

/// Low-level character cursor
pub use source::Parser;
