use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    entities::{
        AccountHistory, AttendanceSet, PlayerAccount, PlayerId, RechargeRecord, ReconcileOutcome,
        TrainingSession,
    },
    errors::CreditLedgerError,
};

/// The shared roster of player accounts. Account counters are mutated only
/// through this interface; collaborators never write fields directly.
///
/// Mutating methods are commit points: they return only once the backing
/// document write (if any) has succeeded, and surface the failure otherwise.
#[async_trait]
pub trait AccountsRepository: Send + Sync {
    /// Creates a fresh account (balance 0, quota 0, used 0) when roster
    /// management adds a player.
    async fn register_player(
        &self,
        player: PlayerId,
        joined_on: NaiveDate,
    ) -> Result<(), CreditLedgerError>;

    /// Drops the account when roster management removes the player. Accounts
    /// are never destroyed independently of the roster.
    async fn remove_player(&self, player: &PlayerId) -> Result<(), CreditLedgerError>;

    /// Applies a whole-session attendance edit: `previous` is the complete
    /// prior snapshot, `session.attendance` the complete new one.
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

    /// A point-in-time copy of the account.
    fn account(&self, player: &PlayerId) -> Option<PlayerAccount>;

    /// A consistent copy of the player's full recorded history (recharges
    /// plus per-session attendance), for replay.
    fn history(&self, player: &PlayerId) -> Option<AccountHistory>;

    /// Re-runs the persistence write for the current in-memory state.
    async fn commit(&self) -> Result<(), CreditLedgerError>;
}
