use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::CreditLedgerError;

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl FromStr for ISODateModel {
    type Err = CreditLedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| CreditLedgerError::InvalidIsoDate { date: s.into() })?;
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

impl Into<NaiveDate> for ISODateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}
