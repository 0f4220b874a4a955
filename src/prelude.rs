//! # propcoder Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the propcoder library. Import this module to get quick access to everything needed
//! to turn declarations into archiving code.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all propcoder operations
pub use crate::Error;

/// The result type used throughout propcoder
pub use crate::Result;

// ================================================================================================
// Parsing
// ================================================================================================

/// Parse a single declaration line
pub use crate::parse;

/// The parsed declaration and its modifier keywords
pub use crate::{PropertyDeclaration, PropertyQualifiers};

/// Multi-line input
pub use crate::Selection;

// ================================================================================================
// Classification and Generation
// ================================================================================================

/// Archive kind of a declared type
pub use crate::{classify, ArchiveKind};

/// Statement and method generation
pub use crate::{
    decode_statement, encode_statement, CodeGenerator, CoderCall, CodingOptions, DecodeStyle,
    SuperInit,
};
