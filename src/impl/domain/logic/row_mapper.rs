use crate::entities::{Column, IncomeStatement, IncomeStatementRow, Row};

pub const TOTAL_COLUMN_KEY: &str = "total";
pub const TOTAL_COLUMN_LABEL: &str = "Total";

pub fn period_column_key(index: usize) -> String {
    format!("period-{}", index)
}

/// One column per reporting period, followed by the total column.
pub fn income_statement_columns(statement: &IncomeStatement) -> Vec<Column> {
    statement
        .period_labels()
        .enumerate()
        .map(|(i, label)| Column {
            key: period_column_key(i),
            label: label.to_string(),
            align: None,
        })
        .chain(std::iter::once(Column {
            key: TOTAL_COLUMN_KEY.to_string(),
            label: TOTAL_COLUMN_LABEL.to_string(),
            align: None,
        }))
        .collect()
}

/// Table rows for an income statement. Each row's values are its per-period
/// amounts followed by its total, matching [`income_statement_columns`].
pub fn income_statement_rows(statement: &IncomeStatement) -> Vec<Row> {
    statement.rows.iter().map(map_row).collect()
}

fn map_row(row: &IncomeStatementRow) -> Row {
    Row {
        key: row.key.clone(),
        label: row.label.clone(),
        values: row
            .amounts
            .iter()
            .chain(std::iter::once(&row.total))
            .cloned()
            .collect(),
        children: row.children.iter().map(map_row).collect(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{IncomeStatementSummary, Period};

    fn statement() -> IncomeStatement {
        let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
        IncomeStatement {
            periods: vec!["Q1 2026".to_string(), "Q2 2026".to_string()],
            period_meta: vec![
                Period {
                    label: "2026-Q1".to_string(),
                    start: d(1, 1),
                    end: d(3, 31),
                },
                Period {
                    label: "2026-Q2".to_string(),
                    start: d(4, 1),
                    end: d(6, 30),
                },
            ],
            rows: vec![IncomeStatementRow {
                key: "revenue".to_string(),
                label: "REVENUE".to_string(),
                amounts: vec!["10".to_string(), "20".to_string()],
                total: "30".to_string(),
                children: vec![IncomeStatementRow {
                    key: "account-7".to_string(),
                    label: "4000 – Sales".to_string(),
                    amounts: vec!["10".to_string(), "20".to_string()],
                    total: "30".to_string(),
                    children: vec![],
                }],
            }],
            flat: vec![],
            summary: IncomeStatementSummary {
                gross_profit: vec![],
                net_income: vec![],
            },
        }
    }

    #[test]
    fn columns_are_periods_then_total() {
        let columns = income_statement_columns(&statement());
        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        let labels: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(keys, vec!["period-0", "period-1", "total"]);
        assert_eq!(labels, vec!["Q1 2026", "Q2 2026", "Total"]);
    }

    #[test]
    fn row_values_are_amounts_then_total() {
        let rows = income_statement_rows(&statement());
        assert_eq!(rows[0].values, vec!["10", "20", "30"]);
        assert_eq!(rows[0].children[0].key, "account-7");
        assert_eq!(rows[0].children[0].values, vec!["10", "20", "30"]);
        assert!(!rows[0].children[0].has_children());
    }
}
