use async_trait::async_trait;
use fractic_server_error::ServerError;
use iso_currency::Currency;

use crate::{
    entities::ReportViewConfig,
    errors::{InvalidIsoCurrencyCode, InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait ViewConfigRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<ReportViewConfig, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<ReportViewConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ViewConfigRonDatasourceImpl;

impl ViewConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ViewConfigRonDatasource for ViewConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<ReportViewConfig, ServerError> {
        let config: ReportViewConfig =
            ron::from_str(s).map_err(|e| InvalidRon::with_debug("ReportViewConfig", &e))?;
        if Currency::from_code(&config.currency).is_none() {
            return Err(InvalidIsoCurrencyCode::new(&config.currency));
        }
        Ok(config)
    }

    async fn from_file<P>(&self, path: P) -> Result<ReportViewConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}
