use std::fmt;

use chrono::{Datelike as _, NaiveDate};

/// Date format used by report query parameters and backend period dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub const START_DATE_PARAM: &str = "start_date";
pub const END_DATE_PARAM: &str = "end_date";
pub const CADENCE_PARAM: &str = "cadence";

const INCOME_STATEMENT_PATH: &str = "reports/income-statement/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cadence {
    #[default]
    Monthly,
    Quarterly,
}

impl Cadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::Monthly => "monthly",
            Cadence::Quarterly => "quarterly",
        }
    }

    /// Anything other than "quarterly" is treated as monthly.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "quarterly" => Cadence::Quarterly,
            _ => Cadence::Monthly,
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Date range and cadence an income statement is requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cadence: Cadence,
}

impl ReportQuery {
    /// Year-to-date, monthly.
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
            end_date: today,
            cadence: Cadence::Monthly,
        }
    }

    /// Builds a query from URL-style parameters. Missing or unparseable
    /// values fall back to [`ReportQuery::default_for`].
    pub fn from_params<'a, I>(params: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self::default_for(today);
        for (name, value) in params {
            match name {
                START_DATE_PARAM => {
                    if let Ok(d) = NaiveDate::parse_from_str(value, ISO_DATE_FORMAT) {
                        query.start_date = d;
                    }
                }
                END_DATE_PARAM => {
                    if let Ok(d) = NaiveDate::parse_from_str(value, ISO_DATE_FORMAT) {
                        query.end_date = d;
                    }
                }
                CADENCE_PARAM => query.cadence = Cadence::parse_lenient(value),
                _ => {}
            }
        }
        query
    }

    pub fn to_query_string(&self) -> String {
        format!(
            "{}={}&{}={}&{}={}",
            START_DATE_PARAM,
            self.start_date.format(ISO_DATE_FORMAT),
            END_DATE_PARAM,
            self.end_date.format(ISO_DATE_FORMAT),
            CADENCE_PARAM,
            self.cadence,
        )
    }

    /// API path (relative to the API base) for the income statement report.
    pub fn path(&self) -> String {
        format!("{}?{}", INCOME_STATEMENT_PATH, self.to_query_string())
    }
}
