use std::str::FromStr;

use crate::errors::CreditLedgerError;

/// Whole-credit count as it appears in exported CSV cells. Accepts thousands
/// separators and accounting-style parenthesized negatives.
#[derive(Debug)]
pub(crate) struct CreditAmountModel(pub i64);
impl FromStr for CreditAmountModel {
    type Err = CreditLedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let is_negative = raw.trim().starts_with("(") && raw.trim().ends_with(")");
        let numeric_part = raw.trim().trim_matches(|c| c == '(' || c == ')');
        let amount = numeric_part
            .parse::<i64>()
            .map_err(|_| CreditLedgerError::InvalidCreditAmount {
                value: numeric_part.into(),
            })?;
        Ok(CreditAmountModel(if is_negative { -amount } else { amount }))
    }
}

impl Into<i64> for CreditAmountModel {
    fn into(self) -> i64 {
        self.0
    }
}
