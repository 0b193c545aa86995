use async_trait::async_trait;

use crate::{
    data::datasources::{
        attendance_csv_datasource::{AttendanceCsvDatasource, AttendanceCsvDatasourceImpl},
        recharges_csv_datasource::{RechargesCsvDatasource, RechargesCsvDatasourceImpl},
    },
    domain::repositories::history_repository::HistoryRepository,
    entities::AccountHistory,
    errors::CreditLedgerError,
};

pub(crate) struct HistoryRepositoryImpl<
    DS1 = RechargesCsvDatasourceImpl, // Default.
    DS2 = AttendanceCsvDatasourceImpl,
> where
    DS1: RechargesCsvDatasource,
    DS2: AttendanceCsvDatasource,
{
    recharges_datasource: DS1,
    attendance_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> HistoryRepository for HistoryRepositoryImpl<DS1, DS2>
where
    DS1: RechargesCsvDatasource,
    DS2: AttendanceCsvDatasource,
{
    fn from_string(
        &self,
        recharges_csv: &str,
        attendance_csv: &str,
    ) -> Result<AccountHistory, CreditLedgerError> {
        Ok(AccountHistory {
            recharges: self.recharges_datasource.from_string(recharges_csv)?,
            training_events: self.attendance_datasource.from_string(attendance_csv)?,
        })
    }

    async fn from_file<P>(
        &self,
        recharges_csv: P,
        attendance_csv: P,
    ) -> Result<AccountHistory, CreditLedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let (recharges, training_events) = futures::try_join!(
            self.recharges_datasource.from_file(recharges_csv),
            self.attendance_datasource.from_file(attendance_csv),
        )?;
        Ok(AccountHistory {
            recharges,
            training_events,
        })
    }
}

impl HistoryRepositoryImpl<RechargesCsvDatasourceImpl, AttendanceCsvDatasourceImpl> {
    pub(crate) fn new() -> Self {
        HistoryRepositoryImpl {
            recharges_datasource: RechargesCsvDatasourceImpl::new(),
            attendance_datasource: AttendanceCsvDatasourceImpl::new(),
        }
    }
}
