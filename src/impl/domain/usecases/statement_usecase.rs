use async_trait::async_trait;

use crate::{
    data::repositories::history_repository_impl::HistoryRepositoryImpl,
    domain::{logic::replay::LedgerReplay, repositories::history_repository::HistoryRepository},
    entities::LedgerStatement,
    errors::CreditLedgerError,
};

/// Offline audit path: replays an exported event history without touching
/// the live account store.
#[async_trait]
pub trait StatementUsecase: Send + Sync {
    fn from_string(
        &self,
        recharges_csv: &str,
        attendance_csv: &str,
    ) -> Result<LedgerStatement, CreditLedgerError>;

    async fn from_file<P>(
        &self,
        recharges_csv: P,
        attendance_csv: P,
    ) -> Result<LedgerStatement, CreditLedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}

pub(crate) struct StatementUsecaseImpl<
    R1 = HistoryRepositoryImpl, // Default.
> where
    R1: HistoryRepository,
{
    history_repository: R1,
}

#[async_trait]
impl<R1> StatementUsecase for StatementUsecaseImpl<R1>
where
    R1: HistoryRepository,
{
    fn from_string(
        &self,
        recharges_csv: &str,
        attendance_csv: &str,
    ) -> Result<LedgerStatement, CreditLedgerError> {
        let history = self
            .history_repository
            .from_string(recharges_csv, attendance_csv)?;
        Ok(LedgerReplay::new(history).process())
    }

    async fn from_file<P>(
        &self,
        recharges_csv: P,
        attendance_csv: P,
    ) -> Result<LedgerStatement, CreditLedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let history = self
            .history_repository
            .from_file(recharges_csv, attendance_csv)
            .await?;
        Ok(LedgerReplay::new(history).process())
    }
}

impl StatementUsecaseImpl<HistoryRepositoryImpl> {
    pub(crate) fn new() -> Self {
        StatementUsecaseImpl {
            history_repository: HistoryRepositoryImpl::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_history_replays_into_a_statement() {
        let recharges = "date,amount,quota\n2024-03-01,50,3\n";
        let attendance = "date,status\n2024-03-04,Present\n2024-03-11,Leave\n2024-03-18,Absent\n";
        let statement = StatementUsecaseImpl::new()
            .from_string(recharges, attendance)
            .unwrap();
        assert_eq!(statement.balance, 49);
        assert_eq!(statement.used, 1);
        // Recharge, Present, Leave; the Absent row is filtered out.
        assert_eq!(statement.entries.len(), 3);
    }

    #[test]
    fn test_empty_csv_history_is_an_empty_statement() {
        let statement = StatementUsecaseImpl::new()
            .from_string("date,amount,quota\n", "date,status\n")
            .unwrap();
        assert!(statement.entries.is_empty());
        assert_eq!(statement.balance, 0);
    }
}
