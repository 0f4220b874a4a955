use comfy_table::{presets, CellAlignment, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Render `data` as pretty JSON under `--json`, or as the lines produced by `report`.
pub fn render<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    report: impl FnOnce(&T) -> Vec<String>,
) -> anyhow::Result<String> {
    if opts.json {
        Ok(serde_json::to_string_pretty(data)?)
    } else {
        Ok(report(data).join("\n"))
    }
}

/// Print the result of [`render`] to stdout.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    report: impl FnOnce(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    let output = render(data, opts, report)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Borderless report table.
///
/// Columns whose cells are all numbers are right-aligned; columns are separated by two spaces.
pub struct ReportTable {
    table: Table,
    numeric: Vec<bool>,
}

impl ReportTable {
    pub fn new(headers: &[&str]) -> Self {
        let mut table = Table::new();
        table.load_preset(presets::NOTHING).set_header(headers.to_vec());

        Self {
            table,
            numeric: vec![true; headers.len()],
        }
    }

    pub fn row(&mut self, values: Vec<String>) {
        for (numeric, value) in self.numeric.iter_mut().zip(&values) {
            *numeric &= value.parse::<usize>().is_ok();
        }
        self.table.add_row(values);
    }

    /// Lay the table out, prefixing every line with `indent`.
    pub fn into_lines(mut self, indent: &str) -> Vec<String> {
        let last = self.numeric.len().saturating_sub(1);
        for (index, numeric) in self.numeric.iter().enumerate() {
            if let Some(column) = self.table.column_mut(index) {
                if *numeric {
                    column.set_cell_alignment(CellAlignment::Right);
                }
                column.set_padding((0, if index == last { 0 } else { 2 }));
            }
        }

        self.table
            .to_string()
            .lines()
            .map(|line| format!("{indent}{}", line.trim_end()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(json: bool) -> GlobalOptions {
        GlobalOptions {
            json,
            verbose: false,
        }
    }

    #[test]
    fn test_numeric_columns_align_right() {
        let mut table = ReportTable::new(&["Line", "Name"]);
        table.row(vec!["3".to_string(), "title".to_string()]);
        table.row(vec!["12".to_string(), "count".to_string()]);

        let lines = table.into_lines("  ");
        assert!(lines.iter().all(|line| line.starts_with("  ")));
        assert!(lines.iter().any(|line| line.ends_with(" 3  title")));
        assert!(lines.iter().any(|line| line.ends_with("12  count")));
    }

    #[test]
    fn test_text_columns_align_left() {
        let mut table = ReportTable::new(&["Kind", "Line"]);
        table.row(vec!["object".to_string(), "1".to_string()]);
        table.row(vec!["char".to_string(), "2".to_string()]);

        assert_eq!(
            table.into_lines(""),
            vec!["Kind    Line", "object     1", "char       2"]
        );
    }

    #[test]
    fn test_render_json_or_report() {
        let data = vec![1, 2];
        let report = |data: &Vec<i32>| -> Vec<String> { data.iter().map(|n| format!("n={n}")).collect() };

        assert_eq!(render(&data, &opts(false), report).unwrap(), "n=1\nn=2");
        assert_eq!(
            render(&data, &opts(true), |_| Vec::new()).unwrap(),
            "[\n  1,\n  2\n]"
        );
    }
}
