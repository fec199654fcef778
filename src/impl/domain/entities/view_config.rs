use iso_currency::Currency;

/// Display settings for report tables. Read from RON; every field is optional.
///
/// ```ron
/// (
///     currency: "KRW",
///     trailing_decimal: true,
///     label_width: 32,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default)]
pub struct ReportViewConfig {
    /// ISO 4217 code used when formatting amounts.
    pub currency: String,
    /// For currencies without minor units, print a trailing '.' after the
    /// amount.
    pub trailing_decimal: bool,
    pub label_width: usize,
    pub column_width: usize,
    pub indent_width: usize,
}

impl Default for ReportViewConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD.code().to_string(),
            trailing_decimal: false,
            label_width: 40,
            column_width: 16,
            indent_width: 2,
        }
    }
}
