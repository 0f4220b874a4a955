use std::path::Path;

use propcoder::{CodeGenerator, Selection};
use serde::Serialize;

use crate::{
    app::{CodingArgs, GlobalOptions},
    commands::common::{read_selection, skipped_lines, SkippedInfo},
    output::print_output,
};

#[derive(Debug, Serialize)]
pub struct GeneratedCode {
    pub declaration_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encode_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_method: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub statements: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedInfo>,
}

fn generate(selection: &Selection, generator: &CodeGenerator, statements: bool) -> GeneratedCode {
    let (encode_method, init_method, statements) = if statements {
        (None, None, generator.statements(selection.declarations()))
    } else {
        (
            Some(generator.encode_method(selection.declarations())),
            Some(generator.init_method(selection.declarations())),
            Vec::new(),
        )
    };

    GeneratedCode {
        declaration_count: selection.len(),
        encode_method,
        init_method,
        statements,
        skipped: skipped_lines(selection),
    }
}

pub fn run(
    path: Option<&Path>,
    statements: bool,
    coding: &CodingArgs,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let selection = read_selection(path)?;
    let generator = CodeGenerator::new(coding.options());
    let code = generate(&selection, &generator, statements);

    if !code.skipped.is_empty() {
        log::info!(
            "skipped {} line(s) that are not supported declarations",
            code.skipped.len()
        );
    }

    print_output(&code, opts, report)
}

fn report(code: &GeneratedCode) -> Vec<String> {
    let mut lines: Vec<String> = code
        .statements
        .iter()
        .map(|statement| format!("{statement};"))
        .collect();
    if let (Some(encode), Some(init)) = (&code.encode_method, &code.init_method) {
        lines.push(format!("{encode}\n\n{init}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "@interface Model : NSObject\n\
                          @property (nonatomic, copy) NSString *title;\n\
                          @property (nonatomic) NSInteger count;\n\
                          @end\n";

    #[test]
    fn test_generate_methods() {
        let selection = Selection::parse(HEADER);
        let code = generate(&selection, &CodeGenerator::default(), false);

        assert_eq!(code.declaration_count, 2);
        assert!(code.statements.is_empty());
        assert_eq!(code.skipped.len(), 2);

        let encode = code.encode_method.unwrap();
        assert!(encode.contains("[coder encodeObject:self.title forKey:@\"title\"];"));
        let init = code.init_method.unwrap();
        assert!(init.contains("self.count = [coder decodeIntegerForKey:@\"count\"];"));
    }

    #[test]
    fn test_generate_statements() {
        let selection = Selection::parse(HEADER);
        let code = generate(&selection, &CodeGenerator::default(), true);

        assert!(code.encode_method.is_none());
        assert_eq!(
            code.statements,
            vec![
                r#"[coder encodeObject:self.title forKey:@"title"]"#,
                r#"[coder encodeInteger:self.count forKey:@"count"]"#,
                r#"self.title = [coder decodeObjectForKey:@"title"]"#,
                r#"self.count = [coder decodeIntegerForKey:@"count"]"#,
            ]
        );
    }

    #[test]
    fn test_json_shape() {
        let selection = Selection::parse("@property BOOL on;");
        let code = generate(&selection, &CodeGenerator::default(), true);
        let json = serde_json::to_value(&code).unwrap();

        assert_eq!(json["declaration_count"], 1);
        assert!(json.get("encode_method").is_none());
        assert!(json.get("skipped").is_none());
        assert_eq!(json["statements"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_report_terminates_statements() {
        let selection = Selection::parse("@property BOOL on;");
        let code = generate(&selection, &CodeGenerator::default(), true);

        assert_eq!(
            report(&code),
            vec![
                r#"[coder encodeBool:self.on forKey:@"on"];"#,
                r#"self.on = [coder decodeBoolForKey:@"on"];"#,
            ]
        );
    }
}
