use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::report_repository_impl::ReportRepositoryImpl,
    domain::repositories::report_repository::ReportRepository, entities::ReportViewConfig,
};

#[async_trait]
pub trait LoadViewConfigUsecase: Send + Sync {
    async fn from_string(&self, ron: &str) -> Result<ReportViewConfig, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<ReportViewConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LoadViewConfigUsecaseImpl<R1 = ReportRepositoryImpl>
where
    R1: ReportRepository,
{
    report_repository: R1,
}

#[async_trait]
impl<R1> LoadViewConfigUsecase for LoadViewConfigUsecaseImpl<R1>
where
    R1: ReportRepository,
{
    async fn from_string(&self, ron: &str) -> Result<ReportViewConfig, ServerError> {
        self.report_repository.view_config_from_string(ron)
    }

    async fn from_file<P>(&self, path: P) -> Result<ReportViewConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let config = self.report_repository.view_config_from_file(path).await?;
        tracing::debug!(currency = %config.currency, "loaded report view config");
        Ok(config)
    }
}

impl LoadViewConfigUsecaseImpl {
    pub(crate) fn new() -> Self {
        LoadViewConfigUsecaseImpl {
            report_repository: ReportRepositoryImpl::new(),
        }
    }
}
