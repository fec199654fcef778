use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::income_statement_model::IncomeStatementModel,
    entities::IncomeStatement,
    errors::{InvalidJson, ReadError},
};

#[async_trait]
pub(crate) trait IncomeStatementJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<IncomeStatement, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<IncomeStatement, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct IncomeStatementJsonDatasourceImpl;

impl IncomeStatementJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IncomeStatementJsonDatasource for IncomeStatementJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<IncomeStatement, ServerError> {
        let model: IncomeStatementModel = serde_json::from_str(s)
            .map_err(|e| InvalidJson::with_debug("IncomeStatement", &e))?;
        tracing::debug!(
            periods = model.periods.len(),
            period_meta = model.period_meta.len(),
            rows = model.rows.len(),
            flat = model.flat.len(),
            "parsed income statement"
        );
        Ok(model.into())
    }

    async fn from_file<P>(&self, path: P) -> Result<IncomeStatement, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    const RESPONSE: &str = r#"{
        "periods": ["Jan 2026", "Feb 2026"],
        "period_meta": [
            {"label": "Jan 2026", "start": "2026-01-01", "end": "2026-01-31"},
            {"label": "Feb 2026", "start": "2026-02-01", "end": "2026-02-28"}
        ],
        "rows": [
            {
                "key": "revenue",
                "label": "REVENUE",
                "amounts": ["100.00", "50.00"],
                "total": "150.00",
                "children": [
                    {"key": "account-1", "label": "4000 – Sales", "amounts": ["100.00", "50.00"], "total": "150.00"}
                ]
            },
            {"key": "cogs", "label": "COGS", "amounts": ["0", "0"], "total": "0"}
        ],
        "flat": [
            {"path": "REVENUE", "amounts": ["100.00", "50.00"], "total": "150.00"},
            {"path": "REVENUE > 4000 – Sales", "amounts": ["100.00", "50.00"], "total": "150.00"}
        ],
        "summary": {"gross_profit": ["100.00", "50.00"], "net_income": ["100.00", "50.00"]}
    }"#;

    #[test]
    fn parses_backend_response() {
        let statement = IncomeStatementJsonDatasourceImpl::new()
            .from_string(RESPONSE)
            .unwrap();
        assert_eq!(
            statement.period_labels().collect::<Vec<_>>(),
            vec!["Jan 2026", "Feb 2026"]
        );
        assert_eq!(
            statement.period_meta[1].end,
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
        assert_eq!(statement.rows.len(), 2);
        assert_eq!(statement.rows[0].children[0].key, "account-1");
        assert!(statement.rows[1].children.is_empty());
        assert_eq!(statement.flat.len(), 2);
        assert_eq!(statement.summary.net_income, vec!["100.00", "50.00"]);
    }

    #[test]
    fn rejects_malformed_json() {
        let result = IncomeStatementJsonDatasourceImpl::new().from_string("{\"periods\": [");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_invalid_period_dates() {
        let s = RESPONSE.replace("2026-02-28", "2026-02-30");
        assert!(IncomeStatementJsonDatasourceImpl::new()
            .from_string(&s)
            .is_err());
    }

    #[test]
    fn column_labels_come_from_periods_not_meta() {
        let s = RESPONSE
            .replace(r#""label": "Jan 2026""#, r#""label": "2026-01""#)
            .replace(r#""label": "Feb 2026""#, r#""label": "2026-02""#);
        let statement = IncomeStatementJsonDatasourceImpl::new()
            .from_string(&s)
            .unwrap();
        assert_eq!(
            statement.period_labels().collect::<Vec<_>>(),
            vec!["Jan 2026", "Feb 2026"]
        );
        assert_eq!(statement.period_meta[0].label, "2026-01");
    }

    #[test]
    fn accepts_period_meta_of_a_different_length() {
        let s = RESPONSE.replace(r#"["Jan 2026", "Feb 2026"]"#, r#"["Jan 2026"]"#);
        let statement = IncomeStatementJsonDatasourceImpl::new()
            .from_string(&s)
            .unwrap();
        assert_eq!(statement.period_labels().collect::<Vec<_>>(), vec!["Jan 2026"]);
        assert_eq!(statement.period_meta.len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_read_error() {
        let result = IncomeStatementJsonDatasourceImpl::new()
            .from_file("/nonexistent/income-statement.json")
            .await;
        assert!(result.is_err());
    }
}
