use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{IncomeStatement, ReportViewConfig};

#[async_trait]
pub trait ReportRepository: Send + Sync {
    fn income_statement_from_string(&self, json: &str) -> Result<IncomeStatement, ServerError>;

    async fn income_statement_from_file<P>(&self, path: P) -> Result<IncomeStatement, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn view_config_from_string(&self, ron: &str) -> Result<ReportViewConfig, ServerError>;

    async fn view_config_from_file<P>(&self, path: P) -> Result<ReportViewConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
