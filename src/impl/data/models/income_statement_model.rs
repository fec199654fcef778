use crate::entities::{
    FlatLine, IncomeStatement, IncomeStatementRow, IncomeStatementSummary, Period,
};

use super::iso_date_model::ISODateModel;

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct PeriodMetaModel {
    pub label: String,
    pub start: ISODateModel,
    pub end: ISODateModel,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct IncomeStatementRowModel {
    pub key: String,
    pub label: String,
    pub amounts: Vec<String>,
    pub total: String,
    #[serde(default)]
    pub children: Vec<IncomeStatementRowModel>,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct FlatLineModel {
    pub path: String,
    pub amounts: Vec<String>,
    pub total: String,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct SummaryModel {
    pub gross_profit: Vec<String>,
    pub net_income: Vec<String>,
}

/// Body of the backend's `reports/income-statement/` response.
#[derive(Debug, serde_derive::Deserialize)]
pub(crate) struct IncomeStatementModel {
    pub periods: Vec<String>,
    pub period_meta: Vec<PeriodMetaModel>,
    pub rows: Vec<IncomeStatementRowModel>,
    pub flat: Vec<FlatLineModel>,
    pub summary: SummaryModel,
}

impl From<IncomeStatementRowModel> for IncomeStatementRow {
    fn from(model: IncomeStatementRowModel) -> Self {
        IncomeStatementRow {
            key: model.key,
            label: model.label,
            amounts: model.amounts,
            total: model.total,
            children: model.children.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<IncomeStatementModel> for IncomeStatement {
    fn from(model: IncomeStatementModel) -> Self {
        IncomeStatement {
            periods: model.periods,
            period_meta: model
                .period_meta
                .into_iter()
                .map(|p| Period {
                    label: p.label,
                    start: p.start.into(),
                    end: p.end.into(),
                })
                .collect(),
            rows: model.rows.into_iter().map(Into::into).collect(),
            flat: model
                .flat
                .into_iter()
                .map(|l| FlatLine {
                    path: l.path,
                    amounts: l.amounts,
                    total: l.total,
                })
                .collect(),
            summary: IncomeStatementSummary {
                gross_profit: model.summary.gross_profit,
                net_income: model.summary.net_income,
            },
        }
    }
}
