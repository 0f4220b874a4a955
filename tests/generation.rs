//! Integration tests for `NSCoder` statement and method generation.

use propcoder::{prelude::*, Result};

fn statements(line: &str) -> Result<(String, String)> {
    let declaration = parse(line)?;
    Ok((
        encode_statement(&declaration).unwrap_or_default(),
        decode_statement(&declaration).unwrap_or_default(),
    ))
}

/// The object archiving pair in the default style.
#[test]
fn test_object_statements() -> Result<()> {
    let (encode, decode) = statements("@property (nonatomic, copy) NSString *title;")?;
    assert_eq!(encode, r#"[coder encodeObject:self.title forKey:@"title"]"#);
    assert_eq!(decode, r#"self.title = [coder decodeObjectForKey:@"title"]"#);
    Ok(())
}

/// Scalars use the call matching their kind.
#[test]
fn test_scalar_statements() -> Result<()> {
    let (encode, decode) = statements("@property (nonatomic) NSInteger count;")?;
    assert_eq!(encode, r#"[coder encodeInteger:self.count forKey:@"count"]"#);
    assert_eq!(decode, r#"self.count = [coder decodeIntegerForKey:@"count"]"#);

    let (encode, decode) = statements("@property BOOL isValid;")?;
    assert_eq!(encode, r#"[coder encodeBool:self.isValid forKey:@"isValid"]"#);
    assert_eq!(decode, r#"self.isValid = [coder decodeBoolForKey:@"isValid"]"#);
    Ok(())
}

/// `id<Protocol>` archives as a plain object.
#[test]
fn test_protocol_object_statements() -> Result<()> {
    let (encode, decode) = statements("@property (nonatomic, weak) id<SomeProtocol> delegate;")?;
    assert_eq!(
        encode,
        r#"[coder encodeObject:self.delegate forKey:@"delegate"]"#
    );
    assert_eq!(
        decode,
        r#"self.delegate = [coder decodeObjectForKey:@"delegate"]"#
    );
    Ok(())
}

/// Encode and decode always agree on the key and the call family.
#[test]
fn test_statement_pairs_agree() -> Result<()> {
    let selection = Selection::parse(
        "@property (nonatomic, copy) NSString *title;\n\
         @property (nonatomic) NSInteger count;\n\
         @property (nonatomic) NSUInteger total;\n\
         @property (nonatomic) int16_t delta;\n\
         @property (nonatomic) unsigned short port;\n\
         @property (nonatomic) uint64_t identifier;\n\
         @property (nonatomic) float alpha;\n\
         @property (nonatomic) NSTimeInterval duration;\n\
         @property (nonatomic) BOOL valid;\n\
         @property (nonatomic) unichar separator;\n\
         @property (nonatomic) NSTextAlignment alignment;\n\
         @property (nonatomic, weak) id delegate;",
    );
    assert_eq!(selection.len(), 12);

    for declaration in selection.declarations() {
        let call = CoderCall::for_declaration(declaration);
        let encode = encode_statement(declaration).unwrap_or_default();
        let decode = decode_statement(declaration).unwrap_or_default();
        let key = format!("forKey:@\"{}\"]", declaration.name());
        let decode_key = format!(":@\"{}\"]", declaration.name());

        assert!(
            encode.starts_with(&format!("[coder {}:", call.encode_selector())),
            "{encode}"
        );
        assert!(encode.ends_with(&key), "{encode}");
        assert!(
            decode.contains(&format!("[coder {}:", call.decode_selector())),
            "{decode}"
        );
        assert!(decode.ends_with(&decode_key), "{decode}");
    }
    Ok(())
}

/// Secure decoding names the expected classes, including collection elements.
#[test]
fn test_secure_decoding() -> Result<()> {
    let generator =
        CodeGenerator::new(CodingOptions::default().with_decode_style(DecodeStyle::Secure));

    let tags = parse("@property (nonatomic, copy) NSArray<NSString *> *tags;")?;
    assert_eq!(
        generator.decode_statement(&tags).unwrap_or_default(),
        r#"self.tags = [coder decodeObjectOfClasses:[NSSet setWithObjects:[NSArray class], [NSString class], nil] forKey:@"tags"]"#
    );

    let date = parse("@property (nonatomic, strong) NSDate *created;")?;
    assert_eq!(
        generator.decode_statement(&date).unwrap_or_default(),
        r#"self.created = [coder decodeObjectOfClass:[NSDate class] forKey:@"created"]"#
    );
    Ok(())
}

/// Rendering a whole selection keeps declaration order and leaves rejected lines out.
#[test]
fn test_render_selection() {
    let selection = Selection::parse(
        "@property (nonatomic, copy) NSString *title;\n\
         @property (copy) void (^done)(void);\n\
         @property (nonatomic) NSInteger count;",
    );
    let generator = CodeGenerator::new(
        CodingOptions::default()
            .with_coder("aCoder")
            .with_super_init(SuperInit::Coder),
    );

    let expected = "\
- (void)encodeWithCoder:(NSCoder *)aCoder {
    [super encodeWithCoder:aCoder];
    [aCoder encodeObject:self.title forKey:@\"title\"];
    [aCoder encodeInteger:self.count forKey:@\"count\"];
}

- (instancetype)initWithCoder:(NSCoder *)aCoder {
    if (self = [super initWithCoder:aCoder]) {
        self.title = [aCoder decodeObjectForKey:@\"title\"];
        self.count = [aCoder decodeIntegerForKey:@\"count\"];
    }
    return self;
}";

    assert_eq!(generator.render(selection.declarations()), expected);
}
