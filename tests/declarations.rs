//! Integration tests for declaration parsing and classification.
//!
//! These drive the public API the way an editor integration would: one line at a time,
//! skipping whatever does not parse.

use propcoder::{prelude::*, Result};

/// An object declaration with a modifier section and a registered class.
#[test]
fn test_object_declaration() -> Result<()> {
    let declaration = parse("@property (nonatomic, copy) NSString *title;")?;

    assert_eq!(declaration.type_name(), "NSString");
    assert_eq!(declaration.name(), "title");
    assert_eq!(declaration.attributes(), Some("nonatomic, copy"));
    assert!(declaration.is_pointer());
    assert_eq!(declaration.archive_kind(), ArchiveKind::Object);
    assert_eq!(
        declaration.property_class().map(|class| class.name),
        Some("NSString")
    );
    assert!(declaration
        .qualifiers()
        .contains(PropertyQualifiers::NONATOMIC | PropertyQualifiers::COPY));
    Ok(())
}

/// Scalar declarations never resolve a class.
#[test]
fn test_scalar_declarations() -> Result<()> {
    let count = parse("@property (nonatomic) NSInteger count;")?;
    assert_eq!(count.archive_kind(), ArchiveKind::Integer);
    assert!(!count.is_pointer());
    assert!(count.property_class().is_none());

    let valid = parse("@property BOOL isValid;")?;
    assert_eq!(valid.attributes(), None);
    assert_eq!(valid.archive_kind(), ArchiveKind::Boolean);
    Ok(())
}

/// Protocol-qualified `id` is an object reference without a pointer marker or class.
#[test]
fn test_protocol_qualified_id() -> Result<()> {
    let delegate = parse("@property (nonatomic, weak) id<SomeProtocol> delegate;")?;

    assert_eq!(delegate.type_name(), "id<SomeProtocol>");
    assert_eq!(delegate.name(), "delegate");
    assert!(!delegate.is_pointer());
    assert_eq!(delegate.archive_kind(), ArchiveKind::Object);
    assert!(delegate.property_class().is_none());
    assert!(delegate.qualifiers().contains(PropertyQualifiers::WEAK));
    Ok(())
}

/// Lines outside the supported grammar are rejected with their reason code.
#[test]
fn test_rejected_lines() {
    assert_eq!(parse("int (*fn)(int);"), Err(Error::MissingKeyword));
    assert_eq!(parse("@property int (*fn)(int);"), Err(Error::FunctionPointer));
    assert_eq!(
        parse("@property (copy) void (^done)(void);"),
        Err(Error::BlockType)
    );
    assert_eq!(parse("@property (nonatomic) title;"), Err(Error::MissingType));
    assert_eq!(parse(""), Err(Error::Empty));
}

/// Parsing the same line twice gives equal results, and the terminator is optional.
#[test]
fn test_parse_is_deterministic() -> Result<()> {
    let line = "@property (nonatomic, strong) NSDictionary<NSString *, NSNumber *> *scores;";
    assert_eq!(parse(line)?, parse(line)?);

    let with = parse("@property double ratio;")?;
    let without = parse("@property double ratio")?;
    assert_eq!(with, without);
    Ok(())
}

/// The canonical rendering of a declaration parses back to the same value.
#[test]
fn test_canonical_form_round_trips() -> Result<()> {
    for line in [
        "@property(nonatomic,copy)NSString*title",
        "@property ( readonly ) unsigned   long long total ;",
        "@property (weak, nonatomic) IBOutlet UILabel *label; // outlet",
        "@property id <A, B> target;",
    ] {
        let declaration = parse(line)?;
        assert_eq!(parse(&declaration.to_string())?, declaration, "{line}");
    }
    Ok(())
}

/// Primitive keywords classify as scalars regardless of the pointer flag being unset.
#[test]
fn test_primitive_keywords_are_never_objects() {
    for primitive in propcoder::typesystem::primitives() {
        let kind = classify(primitive.keyword, false);
        assert_ne!(kind, ArchiveKind::Object, "{}", primitive.keyword);
        assert!(kind.is_scalar(), "{}", primitive.keyword);
    }
}

/// A selection keeps parsed lines in order and reports the rest.
#[test]
fn test_selection() {
    let selection = Selection::parse(
        "@interface Model : NSObject\n\
         \n\
         @property (nonatomic, copy) NSString *title;\n\
         @property int (*fn)(int);\n\
         @property (nonatomic) NSInteger count;\n\
         @end",
    );

    let names: Vec<&str> = selection.declarations().map(|d| d.name()).collect();
    assert_eq!(names, ["title", "count"]);

    let skipped: Vec<(usize, Error)> = selection
        .skipped()
        .iter()
        .map(|s| (s.line, s.reason.clone()))
        .collect();
    assert_eq!(
        skipped,
        [
            (1, Error::MissingKeyword),
            (4, Error::FunctionPointer),
            (6, Error::MissingKeyword),
        ]
    );
}
