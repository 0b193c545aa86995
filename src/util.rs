use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    data::{
        datasources::document_datasource::JsonDocumentDatasourceImpl,
        repositories::accounts_repository_impl::AccountsRepositoryImpl,
    },
    domain::usecases::{
        accounting_usecase::{AccountingUsecase as _, AccountingUsecaseImpl},
        statement_usecase::{StatementUsecase as _, StatementUsecaseImpl},
    },
    entities::{
        AttendanceSet, LedgerStatement, PlayerAccount, PlayerId, RechargeRecord, ReconcileOutcome,
        StatementWindow, TrainingSession,
    },
    errors::CreditLedgerError,
    presentation::statement_printer::StatementPrinter,
};

pub type Statement = String;

/// Facade over the credit engine: the live account store (reconciliation,
/// recharges, ledger queries) plus the offline CSV audit path.
pub struct CreditLedgerUtil {
    accounting_usecase: AccountingUsecaseImpl,
    statement_usecase: StatementUsecaseImpl,
    printer: StatementPrinter,
}

impl CreditLedgerUtil {
    /// In-memory store with no persistence bound.
    pub fn new() -> Self {
        Self {
            accounting_usecase: AccountingUsecaseImpl::new(),
            statement_usecase: StatementUsecaseImpl::new(),
            printer: StatementPrinter::new(),
        }
    }

    /// Binds the store to a persisted club document, loading it if present.
    /// Every mutation afterwards commits the whole document back.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CreditLedgerError> {
        let repository =
            AccountsRepositoryImpl::open(JsonDocumentDatasourceImpl::new(path)).await?;
        Ok(Self {
            accounting_usecase: AccountingUsecaseImpl::with_repository(repository),
            statement_usecase: StatementUsecaseImpl::new(),
            printer: StatementPrinter::new(),
        })
    }

    pub async fn register_player(
        &self,
        player: PlayerId,
        joined_on: NaiveDate,
    ) -> Result<(), CreditLedgerError> {
        self.accounting_usecase
            .register_player(player, joined_on)
            .await
    }

    pub async fn remove_player(&self, player: &PlayerId) -> Result<(), CreditLedgerError> {
        self.accounting_usecase.remove_player(player).await
    }

    /// Applies a whole-session attendance edit: `previous` is the complete
    /// prior snapshot, `session.attendance` the complete new one.
    pub async fn reconcile_session(
        &self,
        session: TrainingSession,
        previous: AttendanceSet,
    ) -> Result<ReconcileOutcome, CreditLedgerError> {
        self.accounting_usecase
            .reconcile_session(session, previous)
            .await
    }

    pub async fn recharge(
        &self,
        player: &PlayerId,
        amount: i64,
        quota: i64,
        at: NaiveDate,
    ) -> Result<RechargeRecord, CreditLedgerError> {
        self.accounting_usecase
            .recharge(player, amount, quota, at)
            .await
    }

    pub fn account(&self, player: &PlayerId) -> Option<PlayerAccount> {
        self.accounting_usecase.account(player)
    }

    /// Replays the player's recorded history into a windowed statement plus
    /// its plain-text rendering.
    pub async fn query_ledger(
        &self,
        player: &PlayerId,
        window: StatementWindow,
        as_of: NaiveDate,
    ) -> Result<(LedgerStatement, Statement), CreditLedgerError> {
        let statement = self
            .accounting_usecase
            .query_ledger(player, window, as_of)
            .await?;
        let printed = self.printer.print_statement(player, &statement);
        Ok((statement, printed))
    }

    /// Re-runs the persistence write for the current in-memory state, for
    /// retrying after a failed commit.
    pub async fn commit(&self) -> Result<(), CreditLedgerError> {
        self.accounting_usecase.commit().await
    }

    /// Offline audit: replay an exported event history (recharges CSV +
    /// attendance CSV) without touching the live store.
    pub fn statement_from_string(
        &self,
        player: &PlayerId,
        recharges_csv: &str,
        attendance_csv: &str,
    ) -> Result<(LedgerStatement, Statement), CreditLedgerError> {
        let statement = self
            .statement_usecase
            .from_string(recharges_csv, attendance_csv)?;
        let printed = self.printer.print_statement(player, &statement);
        Ok((statement, printed))
    }

    pub async fn statement_from_file<P>(
        &self,
        player: &PlayerId,
        recharges_csv: P,
        attendance_csv: P,
    ) -> Result<(LedgerStatement, Statement), CreditLedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let statement = self
            .statement_usecase
            .from_file(recharges_csv, attendance_csv)
            .await?;
        let printed = self.printer.print_statement(player, &statement);
        Ok((statement, printed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{player, session, team, AttendanceRecord, AttendanceStatus};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn set(records: Vec<(&str, AttendanceStatus)>) -> AttendanceSet {
        AttendanceSet::from_records(records.into_iter().map(|(p, status)| AttendanceRecord {
            player_id: player(p),
            status,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_roster_to_statement() {
        let util = CreditLedgerUtil::new();
        util.register_player(player("anna"), d(2024, 1, 1))
            .await
            .unwrap();
        util.recharge(&player("anna"), 10, 1, d(2024, 3, 1))
            .await
            .unwrap();
        util.reconcile_session(
            TrainingSession {
                id: session(1),
                date: d(2024, 3, 4),
                team_id: team("U15"),
                attendance: set(vec![("anna", AttendanceStatus::Present)]),
            },
            AttendanceSet::empty(),
        )
        .await
        .unwrap();

        let (statement, printed) = util
            .query_ledger(&player("anna"), StatementWindow::All, d(2024, 4, 1))
            .await
            .unwrap();
        assert_eq!(statement.balance, 9);
        assert!(statement.mismatch.is_none());
        assert!(printed.contains("; --- Statement: anna "));
        assert!(printed.contains("Recharge"));
    }

    #[tokio::test]
    async fn test_csv_audit_statement() {
        let util = CreditLedgerUtil::new();
        let (statement, printed) = util
            .statement_from_string(
                &player("anna"),
                "date,amount,quota\n2024-03-01,50,3\n",
                "date,status\n2024-03-04,Leave\n",
            )
            .unwrap();
        assert_eq!(statement.balance, 50);
        assert_eq!(statement.used, 1);
        assert!(printed.contains("quota consumed"));
    }
}
