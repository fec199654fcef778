use chrono::NaiveDate;

/// Date range behind a period column. Informational only: column labels come
/// from [`IncomeStatement::periods`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Income statement line as returned by the backend. Amounts are per period,
/// already formatted as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeStatementRow {
    pub key: String,
    pub label: String,
    pub amounts: Vec<String>,
    pub total: String,
    pub children: Vec<IncomeStatementRow>,
}

/// Flattened line used for export, with the full label path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatLine {
    pub path: String,
    pub amounts: Vec<String>,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeStatementSummary {
    pub gross_profit: Vec<String>,
    pub net_income: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeStatement {
    /// Period column labels, in display order.
    pub periods: Vec<String>,
    /// Not required to line up with `periods`.
    pub period_meta: Vec<Period>,
    pub rows: Vec<IncomeStatementRow>,
    pub flat: Vec<FlatLine>,
    pub summary: IncomeStatementSummary,
}

impl IncomeStatement {
    pub fn period_labels(&self) -> impl Iterator<Item = &str> {
        self.periods.iter().map(String::as_str)
    }
}
