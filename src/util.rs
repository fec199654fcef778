use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::report_table::ReportTable,
        usecases::{
            load_report_usecase::{LoadReportUsecase as _, LoadReportUsecaseImpl},
            load_view_config_usecase::{LoadViewConfigUsecase as _, LoadViewConfigUsecaseImpl},
        },
    },
    entities::{IncomeStatement, ReportViewConfig},
    presentation::{
        amount_fmt::CurrencyFormatter, csv_exporter::CsvExporter, table_printer::TablePrinter,
    },
};

pub type Csv = String;

/// Entry point for loading income statements and rendering them as
/// collapsible tables.
pub struct ReportTableUtil {
    load_report_usecase: LoadReportUsecaseImpl,
    formatter: CurrencyFormatter,
    printer: TablePrinter,
    exporter: CsvExporter,
}

impl ReportTableUtil {
    pub fn new(config: ReportViewConfig) -> Result<Self, ServerError> {
        Ok(Self {
            load_report_usecase: LoadReportUsecaseImpl::new(),
            formatter: CurrencyFormatter::from_config(&config)?,
            printer: TablePrinter::new(&config),
            exporter: CsvExporter::new(),
        })
    }

    pub async fn with_config_string(config_ron: &str) -> Result<Self, ServerError> {
        let config = LoadViewConfigUsecaseImpl::new()
            .from_string(config_ron)
            .await?;
        Self::new(config)
    }

    pub async fn with_config_file<T>(config_ron: T) -> Result<Self, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let config = LoadViewConfigUsecaseImpl::new()
            .from_file(config_ron)
            .await?;
        Self::new(config)
    }

    /// Parses a backend income statement response. The returned table starts
    /// with every row expanded.
    pub async fn from_string(
        &self,
        income_statement_json: &str,
    ) -> Result<(IncomeStatement, ReportTable), ServerError> {
        self.load_report_usecase
            .from_string(income_statement_json)
            .await
    }

    pub async fn from_file<T>(
        &self,
        income_statement_json: T,
    ) -> Result<(IncomeStatement, ReportTable), ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.load_report_usecase
            .from_file(income_statement_json)
            .await
    }

    /// Currently visible rows of `table`, amounts formatted as currency.
    pub fn print(&self, table: &ReportTable) -> String {
        self.printer.print_table(table, &self.formatter)
    }

    pub fn export_csv(&self, statement: &IncomeStatement) -> Result<Csv, ServerError> {
        self.exporter.export_income_statement(statement)
    }

    pub fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }
}
