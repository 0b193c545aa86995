use async_trait::async_trait;

use crate::{entities::AccountHistory, errors::CreditLedgerError};

/// Loads an exported event history (recharges + attendance) for offline
/// replay, outside the live account store.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    fn from_string(
        &self,
        recharges_csv: &str,
        attendance_csv: &str,
    ) -> Result<AccountHistory, CreditLedgerError>;

    async fn from_file<P>(
        &self,
        recharges_csv: P,
        attendance_csv: P,
    ) -> Result<AccountHistory, CreditLedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}
