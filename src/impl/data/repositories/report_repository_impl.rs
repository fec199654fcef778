use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        income_statement_json_datasource::{
            IncomeStatementJsonDatasource, IncomeStatementJsonDatasourceImpl,
        },
        view_config_ron_datasource::{ViewConfigRonDatasource, ViewConfigRonDatasourceImpl},
    },
    domain::repositories::report_repository::ReportRepository,
    entities::{IncomeStatement, ReportViewConfig},
};

pub(crate) struct ReportRepositoryImpl<
    DS1 = IncomeStatementJsonDatasourceImpl, // Default.
    DS2 = ViewConfigRonDatasourceImpl,       // Default.
> where
    DS1: IncomeStatementJsonDatasource,
    DS2: ViewConfigRonDatasource,
{
    income_statement_datasource: DS1,
    view_config_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> ReportRepository for ReportRepositoryImpl<DS1, DS2>
where
    DS1: IncomeStatementJsonDatasource,
    DS2: ViewConfigRonDatasource,
{
    fn income_statement_from_string(&self, json: &str) -> Result<IncomeStatement, ServerError> {
        self.income_statement_datasource.from_string(json)
    }

    async fn income_statement_from_file<P>(&self, path: P) -> Result<IncomeStatement, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.income_statement_datasource.from_file(path).await
    }

    fn view_config_from_string(&self, ron: &str) -> Result<ReportViewConfig, ServerError> {
        self.view_config_datasource.from_string(ron)
    }

    async fn view_config_from_file<P>(&self, path: P) -> Result<ReportViewConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.view_config_datasource.from_file(path).await
    }
}

impl ReportRepositoryImpl {
    pub(crate) fn new() -> Self {
        ReportRepositoryImpl {
            income_statement_datasource: IncomeStatementJsonDatasourceImpl::new(),
            view_config_datasource: ViewConfigRonDatasourceImpl::new(),
        }
    }
}
