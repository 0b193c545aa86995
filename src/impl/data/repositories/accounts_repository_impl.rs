use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::{Mutex, RwLock};

use crate::{
    data::{
        datasources::document_datasource::{DocumentDatasource, JsonDocumentDatasourceImpl},
        models::club_document_model::{
            ClubDocumentModel, PlayerAccountModel, TrainingSessionModel,
        },
    },
    domain::{
        logic::{cycle, reconcile},
        repositories::accounts_repository::AccountsRepository,
    },
    entities::{
        AccountHistory, AttendanceSet, PlayerAccount, PlayerId, RechargeRecord, ReconcileOutcome,
        SessionId, TrainingSession,
    },
    errors::CreditLedgerError,
};

/// In-memory account store with optional whole-document persistence.
///
/// Lock order: sessions map, then accounts map, then a per-account mutex.
/// Mutations hold the sessions write lock for the whole edit, so a history
/// snapshot taken under the read lock never observes a half-applied
/// reconciliation. Accounts never interact, so no cross-account lock exists.
pub(crate) struct AccountsRepositoryImpl<DS = JsonDocumentDatasourceImpl>
where
    DS: DocumentDatasource,
{
    sessions: RwLock<BTreeMap<SessionId, TrainingSession>>,
    accounts: RwLock<HashMap<PlayerId, Arc<Mutex<PlayerAccount>>>>,
    document: Option<DS>,
}

#[async_trait]
impl<DS> AccountsRepository for AccountsRepositoryImpl<DS>
where
    DS: DocumentDatasource,
{
    async fn register_player(
        &self,
        player: PlayerId,
        joined_on: NaiveDate,
    ) -> Result<(), CreditLedgerError> {
        {
            let mut accounts = self.accounts.write();
            if accounts.contains_key(&player) {
                return Err(CreditLedgerError::PlayerAlreadyRegistered { player });
            }
            let account = PlayerAccount::new(player.clone(), joined_on);
            accounts.insert(player, Arc::new(Mutex::new(account)));
        }
        self.commit().await
    }

    async fn remove_player(&self, player: &PlayerId) -> Result<(), CreditLedgerError> {
        {
            let mut accounts = self.accounts.write();
            if accounts.remove(player).is_none() {
                return Err(CreditLedgerError::UnknownPlayer {
                    player: player.clone(),
                });
            }
        }
        self.commit().await
    }

    async fn reconcile_session(
        &self,
        session: TrainingSession,
        previous: AttendanceSet,
    ) -> Result<ReconcileOutcome, CreditLedgerError> {
        let outcome = {
            let mut sessions = self.sessions.write();
            let accounts = self.accounts.read();
            let mut outcome = ReconcileOutcome::default();
            for p in reconcile::affected_players(&previous, &session.attendance) {
                match accounts.get(p) {
                    Some(cell) => {
                        let mut account = cell.lock();
                        reconcile::reconcile_account(
                            &mut account,
                            previous.status(p),
                            session.attendance.status(p),
                        );
                        outcome.updated.push(p.clone());
                    }
                    None => {
                        tracing::warn!(
                            player = %p,
                            session = %session.id,
                            "attendance record references unknown player, skipping"
                        );
                        outcome.skipped.push(p.clone());
                    }
                }
            }
            sessions.insert(session.id, session);
            outcome
        };
        self.commit().await?;
        Ok(outcome)
    }

    async fn recharge(
        &self,
        player: &PlayerId,
        amount: i64,
        quota: i64,
        at: NaiveDate,
    ) -> Result<RechargeRecord, CreditLedgerError> {
        let record = {
            let accounts = self.accounts.read();
            let cell = accounts
                .get(player)
                .ok_or_else(|| CreditLedgerError::UnknownPlayer {
                    player: player.clone(),
                })?;
            let mut account = cell.lock();
            cycle::apply_recharge(&mut account, amount, quota, at)?
        };
        self.commit().await?;
        Ok(record)
    }

    fn account(&self, player: &PlayerId) -> Option<PlayerAccount> {
        let accounts = self.accounts.read();
        accounts.get(player).map(|cell| cell.lock().clone())
    }

    fn history(&self, player: &PlayerId) -> Option<AccountHistory> {
        let sessions = self.sessions.read();
        let accounts = self.accounts.read();
        let recharges = accounts
            .get(player)
            .map(|cell| cell.lock().recharge_history().to_vec())?;
        let training_events = sessions
            .values()
            .filter_map(|s| s.attendance.status(player).map(|status| (s.date, status)))
            .collect();
        Some(AccountHistory {
            recharges,
            training_events,
        })
    }

    async fn commit(&self) -> Result<(), CreditLedgerError> {
        let datasource = match &self.document {
            Some(ds) => ds,
            None => return Ok(()),
        };
        let document = self.snapshot_document();
        match datasource.save(&document).await {
            Ok(()) => {
                tracing::debug!("club document committed");
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "club document write failed, in-memory state kept for retry"
                );
                Err(e)
            }
        }
    }
}

impl AccountsRepositoryImpl<JsonDocumentDatasourceImpl> {
    pub(crate) fn new() -> Self {
        Self {
            sessions: RwLock::new(BTreeMap::new()),
            accounts: RwLock::new(HashMap::new()),
            document: None,
        }
    }
}

impl<DS> AccountsRepositoryImpl<DS>
where
    DS: DocumentDatasource,
{
    /// Loads the persisted document (if any) and binds the store to it as
    /// its commit point.
    pub(crate) async fn open(datasource: DS) -> Result<Self, CreditLedgerError> {
        let mut accounts = HashMap::new();
        let mut sessions = BTreeMap::new();
        if let Some(document) = datasource.load().await? {
            for model in document.accounts {
                let account = model.into_entity();
                accounts.insert(account.player_id().clone(), Arc::new(Mutex::new(account)));
            }
            for model in document.sessions {
                let session = model.into_entity()?;
                sessions.insert(session.id, session);
            }
        }
        Ok(Self {
            sessions: RwLock::new(sessions),
            accounts: RwLock::new(accounts),
            document: Some(datasource),
        })
    }

    fn snapshot_document(&self) -> ClubDocumentModel {
        let sessions = self.sessions.read();
        let accounts = self.accounts.read();
        let mut account_models: Vec<PlayerAccountModel> = accounts
            .values()
            .map(|cell| PlayerAccountModel::from(&*cell.lock()))
            .collect();
        account_models.sort_by(|a, b| a.player_id.cmp(&b.player_id));
        ClubDocumentModel {
            accounts: account_models,
            sessions: sessions.values().map(TrainingSessionModel::from).collect(),
        }
    }
}
