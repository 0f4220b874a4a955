//! Shared helpers for unit tests.

use crate::declaration::{parse, PropertyDeclaration};

/// Parse a line that is known to be a valid declaration.
pub fn declaration(line: &str) -> PropertyDeclaration {
    parse(line).unwrap_or_else(|e| panic!("failed to parse {line:?}: {e}"))
}

/// Parse several lines that are known to be valid declarations.
pub fn declarations(lines: &[&str]) -> Vec<PropertyDeclaration> {
    lines.iter().map(|line| declaration(line)).collect()
}

/// Fixture covering one property of each archive kind.
pub const MODEL_HEADER: &str = "\
@interface Model : NSObject <NSSecureCoding>

@property (nonatomic, copy) NSString *title;
@property (nonatomic) NSInteger count;
@property (nonatomic) NSUInteger total;
@property (nonatomic) double ratio;
@property (nonatomic, getter=isValid) BOOL valid;
@property (nonatomic) unichar separator;
@property (nonatomic) UIViewContentMode mode;
@property (nonatomic, weak) id<SomeProtocol> delegate;
@property (nonatomic, copy) void (^completion)(BOOL finished);
@property (class, nonatomic, readonly) NSString *identifier;

@end
";
