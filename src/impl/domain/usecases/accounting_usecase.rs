use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    data::repositories::accounts_repository_impl::AccountsRepositoryImpl,
    domain::{
        logic::replay::{self, LedgerReplay},
        repositories::accounts_repository::AccountsRepository,
    },
    entities::{
        AttendanceSet, BalanceMismatch, LedgerStatement, PlayerAccount, PlayerId, RechargeRecord,
        ReconcileOutcome, StatementWindow, TrainingSession,
    },
    errors::CreditLedgerError,
};

#[async_trait]
pub trait AccountingUsecase: Send + Sync {
    async fn register_player(
        &self,
        player: PlayerId,
        joined_on: NaiveDate,
    ) -> Result<(), CreditLedgerError>;

    async fn remove_player(&self, player: &PlayerId) -> Result<(), CreditLedgerError>;

    async fn reconcile_session(
        &self,
        session: TrainingSession,
        previous: AttendanceSet,
    ) -> Result<ReconcileOutcome, CreditLedgerError>;

    async fn recharge(
        &self,
        player: &PlayerId,
        amount: i64,
        quota: i64,
        at: NaiveDate,
    ) -> Result<RechargeRecord, CreditLedgerError>;

    /// Replays the player's full history into a statement, flags any
    /// divergence from the stored balance, then applies the window filter.
    async fn query_ledger(
        &self,
        player: &PlayerId,
        window: StatementWindow,
        as_of: NaiveDate,
    ) -> Result<LedgerStatement, CreditLedgerError>;

    fn account(&self, player: &PlayerId) -> Option<PlayerAccount>;

    async fn commit(&self) -> Result<(), CreditLedgerError>;
}

pub(crate) struct AccountingUsecaseImpl<
    R = AccountsRepositoryImpl, // Default.
> where
    R: AccountsRepository,
{
    accounts_repository: R,
}

#[async_trait]
impl<R> AccountingUsecase for AccountingUsecaseImpl<R>
where
    R: AccountsRepository,
{
    async fn register_player(
        &self,
        player: PlayerId,
        joined_on: NaiveDate,
    ) -> Result<(), CreditLedgerError> {
        self.accounts_repository
            .register_player(player, joined_on)
            .await
    }

    async fn remove_player(&self, player: &PlayerId) -> Result<(), CreditLedgerError> {
        self.accounts_repository.remove_player(player).await
    }

    async fn reconcile_session(
        &self,
        session: TrainingSession,
        previous: AttendanceSet,
    ) -> Result<ReconcileOutcome, CreditLedgerError> {
        self.accounts_repository
            .reconcile_session(session, previous)
            .await
    }

    async fn recharge(
        &self,
        player: &PlayerId,
        amount: i64,
        quota: i64,
        at: NaiveDate,
    ) -> Result<RechargeRecord, CreditLedgerError> {
        self.accounts_repository
            .recharge(player, amount, quota, at)
            .await
    }

    async fn query_ledger(
        &self,
        player: &PlayerId,
        window: StatementWindow,
        as_of: NaiveDate,
    ) -> Result<LedgerStatement, CreditLedgerError> {
        let history = self.accounts_repository.history(player).ok_or_else(|| {
            CreditLedgerError::UnknownPlayer {
                player: player.clone(),
            }
        })?;
        let stored = self
            .accounts_repository
            .account(player)
            .map(|a| a.credit_balance())
            .ok_or_else(|| CreditLedgerError::UnknownPlayer {
                player: player.clone(),
            })?;

        let mut statement = LedgerReplay::new(history).process();
        if statement.balance != stored {
            // The stored balance stays authoritative for mutation; the
            // replayed one for audit display.
            tracing::warn!(
                player = %player,
                stored,
                replayed = statement.balance,
                "stored balance diverges from replayed history"
            );
            statement.mismatch = Some(BalanceMismatch {
                stored,
                replayed: statement.balance,
            });
        }
        statement.entries = replay::filter_window(statement.entries, window, as_of);
        Ok(statement)
    }

    fn account(&self, player: &PlayerId) -> Option<PlayerAccount> {
        self.accounts_repository.account(player)
    }

    async fn commit(&self) -> Result<(), CreditLedgerError> {
        self.accounts_repository.commit().await
    }
}

impl AccountingUsecaseImpl<AccountsRepositoryImpl> {
    pub(crate) fn new() -> Self {
        AccountingUsecaseImpl {
            accounts_repository: AccountsRepositoryImpl::new(),
        }
    }
}

impl<R> AccountingUsecaseImpl<R>
where
    R: AccountsRepository,
{
    pub(crate) fn with_repository(accounts_repository: R) -> Self {
        AccountingUsecaseImpl {
            accounts_repository,
        }
    }
}
