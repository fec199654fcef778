use crate::{
    domain::logic::report_table::ReportTable,
    entities::{Alignment, ReportViewConfig, ValueFormatter},
    presentation::csv_exporter::LINE_ITEM_HEADER,
};

const EXPANDED_MARKER: &str = "[-]";
const COLLAPSED_MARKER: &str = "[+]";
const LEAF_MARKER: &str = " · ";

/// Narrowest label column left after indentation before wrapping gives up
/// on fitting into 'label_width'.
const MIN_WRAP_WIDTH: usize = 8;

pub(crate) struct TablePrinter {
    label_width: usize,
    column_width: usize,
    indent_width: usize,
}

impl TablePrinter {
    pub(crate) fn new(config: &ReportViewConfig) -> Self {
        Self {
            label_width: config.label_width,
            column_width: config.column_width,
            indent_width: config.indent_width,
        }
    }

    /// Renders the rows currently visible in `table`, one line per row (more
    /// if a label wraps), under a header of column labels.
    pub(crate) fn print_table<F>(&self, table: &ReportTable, formatter: &F) -> String
    where
        F: ValueFormatter + ?Sized,
    {
        let mut output = String::new();

        let header: Vec<(String, Alignment)> = table
            .columns()
            .iter()
            .map(|c| (c.label.clone(), c.alignment()))
            .collect();
        self.print_line(&mut output, LINE_ITEM_HEADER, &header);

        for entry in table.visible_rows() {
            let marker = if !entry.row.has_children() {
                LEAF_MARKER
            } else if table.is_expanded(&entry.row.key) {
                EXPANDED_MARKER
            } else {
                COLLAPSED_MARKER
            };
            let prefix = format!(
                "{}{} ",
                " ".repeat(entry.depth * self.indent_width),
                marker
            );
            let prefix_len = prefix.chars().count();
            let wrap_width = self
                .label_width
                .saturating_sub(prefix_len)
                .max(MIN_WRAP_WIDTH);
            let wrapped = textwrap::wrap(&entry.row.label, wrap_width);

            let cells: Vec<(String, Alignment)> = table
                .cells(entry.row, formatter)
                .into_iter()
                .zip(table.columns().iter().map(|c| c.alignment()))
                .collect();

            let first = wrapped.first().map(|l| l.to_string()).unwrap_or_default();
            self.print_line(&mut output, &format!("{}{}", prefix, first), &cells);
            for line in wrapped.iter().skip(1) {
                output.push_str(&format!("{}{}\n", " ".repeat(prefix_len), line));
            }
        }

        output
    }

    fn print_line(&self, output: &mut String, label: &str, cells: &[(String, Alignment)]) {
        let mut line = format!("{:<width$}", label, width = self.label_width);
        for (cell, alignment) in cells {
            line.push(' ');
            match alignment {
                Alignment::Left => {
                    line.push_str(&format!("{:<width$}", cell, width = self.column_width))
                }
                Alignment::Right => {
                    line.push_str(&format!("{:>width$}", cell, width = self.column_width))
                }
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }
}
