use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::{entities::ISO_DATE_FORMAT, errors::InvalidIsoDate};

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}
impl<'de> Deserialize<'de> for ISODateModel {
    fn deserialize<D>(deserializer: D) -> Result<ISODateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISODateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(model: ISODateModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ReportQuery;

    #[test]
    fn parses_dates_written_by_report_queries() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let query = ReportQuery::default_for(today);
        let written = query.end_date.format(ISO_DATE_FORMAT).to_string();
        assert_eq!(written, "2026-03-09");
        assert_eq!(NaiveDate::from(ISODateModel::from_str(&written).unwrap()), today);
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(ISODateModel::from_str("2026-02-30").is_err());
        assert!(serde_json::from_str::<ISODateModel>("\"09/03/2026\"").is_err());
    }
}
