use std::str::FromStr as _;

use fractic_server_error::ServerError;
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

use crate::{
    data::models::accounting_amount_model::AccountingAmountModel,
    entities::{ReportViewConfig, ValueFormatter},
    errors::InvalidIsoCurrencyCode,
};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format cash amount with currency symbol, correct number of decimal places,
/// proper thousands separators, and optional trailing decimal mark.
///
/// For consistency, uses en locale ('.' as decimal mark, i.e. 1,000.00)
/// regardless of user's locale or currency.
///
/// For currencies with 0 decimal places, a decimal mark is always included if
/// 'trailing_decimal' is true. For other currencies, this flag has no effect.
///
/// Amounts whose magnitude does not fit in an i64 count of minor units
/// (ex. 1e300, or about 9.2e16 USD) are formatted as zero, the same as
/// unparseable input.
pub(crate) fn format_amount(amount: f64, currency: Currency, trailing_decimal: bool) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10_i64.pow(decimal_places as u32);
    // Round once in minor units so that e.g. 0.999 USD carries into the
    // integer part.
    let scaled = (amount.abs() * scale as f64).round();
    let minor_units = if scaled.is_finite() && scaled < i64::MAX as f64 {
        scaled as i64
    } else {
        0
    };
    let sign = if amount < 0.0 && minor_units != 0 {
        "-"
    } else {
        ""
    };
    let integer_part = (minor_units / scale).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        format!(
            "{}{}{} {}",
            sign,
            integer_part,
            if trailing_decimal { "." } else { "" },
            currency.symbol()
        )
    } else {
        format!(
            "{}{}.{:0decimal_places$} {}",
            sign,
            integer_part,
            minor_units % scale,
            currency.symbol(),
        )
    }
}

/// Formats every cell as a currency amount. Values that do not parse as a
/// number are shown as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    currency: Currency,
    trailing_decimal: bool,
}

impl CurrencyFormatter {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            trailing_decimal: false,
        }
    }

    pub fn with_trailing_decimal(self, trailing_decimal: bool) -> Self {
        Self {
            trailing_decimal,
            ..self
        }
    }

    pub fn from_config(config: &ReportViewConfig) -> Result<Self, ServerError> {
        let currency = Currency::from_code(&config.currency)
            .ok_or_else(|| InvalidIsoCurrencyCode::new(&config.currency))?;
        Ok(Self::new(currency).with_trailing_decimal(config.trailing_decimal))
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl ValueFormatter for CurrencyFormatter {
    fn format(&self, value: &str, _column_key: &str) -> String {
        let amount: f64 = AccountingAmountModel::from_str(value)
            .map(Into::into)
            .unwrap_or(0.0);
        format_amount(amount, self.currency, self.trailing_decimal)
    }
}
