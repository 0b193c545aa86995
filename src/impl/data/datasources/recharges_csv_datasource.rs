use std::str::FromStr as _;

use async_trait::async_trait;

use crate::{
    data::models::{credit_amount_model::CreditAmountModel, iso_date_model::ISODateModel},
    entities::{RechargeId, RechargeRecord},
    errors::CreditLedgerError,
};

/// Parses an exported recharge history. Columns: date, amount, quota.
#[async_trait]
pub(crate) trait RechargesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<RechargeRecord>, CreditLedgerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<RechargeRecord>, CreditLedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}

pub(crate) struct RechargesCsvDatasourceImpl;

impl RechargesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RechargesCsvDatasource for RechargesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<RechargeRecord>, CreditLedgerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(CreditLedgerError::InvalidCsv).and_then(|r| {
                    // Extract from CSV record.
                    let raw_date = r.get(0).unwrap_or("");
                    let raw_amount = r.get(1).unwrap_or("0");
                    let raw_quota = r.get(2).unwrap_or("0");

                    // Parse.
                    let date: ISODateModel = ISODateModel::from_str(raw_date)?;
                    let amount: CreditAmountModel = CreditAmountModel::from_str(raw_amount)?;
                    let quota: CreditAmountModel = CreditAmountModel::from_str(raw_quota)?;

                    // Build.
                    Ok(RechargeRecord {
                        id: RechargeId(i as u64 + 1),
                        date: date.into(),
                        amount: amount.into(),
                        quota_added: quota.into(),
                    })
                })
            })
            .collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<RechargeRecord>, CreditLedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| CreditLedgerError::Read {
                path: path.as_ref().display().to_string(),
                source: e,
            })?;
        self.from_string(&contents)
    }
}
