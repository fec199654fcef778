use std::str::FromStr;

/// Amount parsed from a backend-formatted value string. Thousands separators
/// are ignored and accounting-style parentheses mean negative. Anything that
/// does not parse to a finite number reads as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AccountingAmountModel(pub f64);
impl FromStr for AccountingAmountModel {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let is_negative = raw.trim().starts_with("(") && raw.trim().ends_with(")");
        let numeric_part = raw.trim().trim_matches(|c| c == '(' || c == ')');
        let amount = numeric_part
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .unwrap_or(0.0);
        Ok(AccountingAmountModel(if is_negative {
            -amount
        } else {
            amount
        }))
    }
}

impl From<AccountingAmountModel> for f64 {
    fn from(model: AccountingAmountModel) -> Self {
        model.0
    }
}
