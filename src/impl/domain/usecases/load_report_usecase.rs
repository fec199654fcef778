use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::report_repository_impl::ReportRepositoryImpl,
    domain::{
        logic::{
            report_table::ReportTable,
            row_mapper::{income_statement_columns, income_statement_rows},
        },
        repositories::report_repository::ReportRepository,
    },
    entities::IncomeStatement,
};

#[async_trait]
pub trait LoadReportUsecase: Send + Sync {
    async fn from_string(&self, json: &str)
        -> Result<(IncomeStatement, ReportTable), ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<(IncomeStatement, ReportTable), ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LoadReportUsecaseImpl<
    R1 = ReportRepositoryImpl, // Default.
> where
    R1: ReportRepository,
{
    report_repository: R1,
}

#[async_trait]
impl<R1> LoadReportUsecase for LoadReportUsecaseImpl<R1>
where
    R1: ReportRepository,
{
    async fn from_string(
        &self,
        json: &str,
    ) -> Result<(IncomeStatement, ReportTable), ServerError> {
        let statement = self.report_repository.income_statement_from_string(json)?;
        let table = build_table(&statement)?;
        Ok((statement, table))
    }

    async fn from_file<P>(&self, path: P) -> Result<(IncomeStatement, ReportTable), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let statement = self
            .report_repository
            .income_statement_from_file(path)
            .await?;
        let table = build_table(&statement)?;
        Ok((statement, table))
    }
}

impl LoadReportUsecaseImpl {
    pub(crate) fn new() -> Self {
        LoadReportUsecaseImpl {
            report_repository: ReportRepositoryImpl::new(),
        }
    }
}

fn build_table(statement: &IncomeStatement) -> Result<ReportTable, ServerError> {
    let table = ReportTable::new(
        income_statement_columns(statement),
        income_statement_rows(statement),
    )?;
    tracing::debug!(
        columns = table.columns().len(),
        expandable = table.expandable_keys().len(),
        "built income statement table"
    );
    Ok(table)
}
