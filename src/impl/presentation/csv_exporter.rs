use fractic_server_error::ServerError;

use crate::{
    domain::logic::row_mapper::TOTAL_COLUMN_LABEL, entities::IncomeStatement,
    errors::CsvWriteError,
};

pub(crate) const LINE_ITEM_HEADER: &str = "Line Item";

pub(crate) struct CsvExporter;

impl CsvExporter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Flat income statement as CSV: a header row, then one line per flat
    /// entry with its path, per-period amounts and total. Every field is
    /// quoted.
    pub(crate) fn export_income_statement(
        &self,
        statement: &IncomeStatement,
    ) -> Result<String, ServerError> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(Vec::new());

        let header = std::iter::once(LINE_ITEM_HEADER)
            .chain(statement.period_labels())
            .chain(std::iter::once(TOTAL_COLUMN_LABEL));
        writer
            .write_record(header)
            .map_err(|e| CsvWriteError::with_debug("header", &e))?;

        for line in &statement.flat {
            let record = std::iter::once(line.path.as_str())
                .chain(line.amounts.iter().map(String::as_str))
                .chain(std::iter::once(line.total.as_str()));
            writer
                .write_record(record)
                .map_err(|e| CsvWriteError::with_debug(&line.path, &e))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CsvWriteError::with_debug("flush", &e))?;
        String::from_utf8(bytes).map_err(|e| CsvWriteError::with_debug("utf-8", &e))
    }
}
