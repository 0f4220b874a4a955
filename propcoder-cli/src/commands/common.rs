use std::{io::Read, path::Path};

use anyhow::Context;
use propcoder::{Selection, SkippedLine};
use serde::Serialize;

/// Read the selection text from `path`, or from stdin when no path is given.
pub fn read_selection(path: Option<&Path>) -> anyhow::Result<Selection> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file: {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    let selection = Selection::parse(&text);
    log::debug!(
        "{} declaration(s), {} line(s) skipped",
        selection.len(),
        selection.skipped().len()
    );
    Ok(selection)
}

#[derive(Debug, Serialize)]
pub struct SkippedInfo {
    pub line: usize,
    pub text: String,
    pub reason: String,
}

impl From<&SkippedLine> for SkippedInfo {
    fn from(skipped: &SkippedLine) -> Self {
        SkippedInfo {
            line: skipped.line,
            text: skipped.text.clone(),
            reason: skipped.reason.to_string(),
        }
    }
}

/// Collect the skipped lines of a selection for display.
pub fn skipped_lines(selection: &Selection) -> Vec<SkippedInfo> {
    selection.skipped().iter().map(SkippedInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_has_context() {
        let err = read_selection(Some(Path::new("/nonexistent/Model.h"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/Model.h"));
    }

    #[test]
    fn test_skipped_lines() {
        let selection = Selection::parse("@end\n@property BOOL on;");
        let skipped = skipped_lines(&selection);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].line, 1);
        assert_eq!(skipped[0].text, "@end");
        assert_eq!(skipped[0].reason, "Expected the `@property` keyword");
    }
}
