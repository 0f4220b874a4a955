use std::path::Path;

use propcoder::{CoderCall, ParsedLine, Selection};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{read_selection, skipped_lines, SkippedInfo},
    output::{print_output, ReportTable},
};

#[derive(Debug, Serialize)]
pub struct Inspection {
    pub declarations: Vec<DeclarationInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedInfo>,
}

#[derive(Debug, Serialize)]
pub struct DeclarationInfo {
    pub line: usize,
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub pointer_depth: usize,
    pub kind: String,
    pub call: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<String>,
}

impl From<&ParsedLine> for DeclarationInfo {
    fn from(parsed: &ParsedLine) -> Self {
        let declaration = &parsed.declaration;
        DeclarationInfo {
            line: parsed.line,
            name: declaration.name().to_string(),
            type_name: declaration.type_name().to_string(),
            pointer_depth: declaration.pointer_depth(),
            kind: declaration.archive_kind().to_string(),
            call: CoderCall::for_declaration(declaration).to_string(),
            class: declaration.property_class().map(|class| class.to_string()),
            attributes: declaration.attributes().map(str::to_string),
        }
    }
}

fn inspect(selection: &Selection) -> Inspection {
    Inspection {
        declarations: selection.parsed().iter().map(DeclarationInfo::from).collect(),
        skipped: skipped_lines(selection),
    }
}

pub fn run(path: Option<&Path>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let selection = read_selection(path)?;
    let inspection = inspect(&selection);

    print_output(&inspection, opts, report)
}

fn report(inspection: &Inspection) -> Vec<String> {
    let mut lines = vec![format!("Declarations: {}", inspection.declarations.len())];
    if !inspection.declarations.is_empty() {
        let mut table = ReportTable::new(&[
            "Line",
            "Name",
            "Type",
            "Ptr",
            "Kind",
            "Call",
            "Class",
            "Attributes",
        ]);
        for d in &inspection.declarations {
            table.row(vec![
                d.line.to_string(),
                d.name.clone(),
                d.type_name.clone(),
                d.pointer_depth.to_string(),
                d.kind.clone(),
                d.call.clone(),
                d.class.clone().unwrap_or_else(|| "-".to_string()),
                d.attributes.clone().unwrap_or_default(),
            ]);
        }
        lines.extend(table.into_lines("  "));
    }

    if !inspection.skipped.is_empty() {
        lines.push(String::new());
        lines.push(format!("Skipped: {}", inspection.skipped.len()));
        let mut table = ReportTable::new(&["Line", "Reason", "Text"]);
        for s in &inspection.skipped {
            table.row(vec![s.line.to_string(), s.reason.clone(), s.text.clone()]);
        }
        lines.extend(table.into_lines("  "));
    }
    lines
}
