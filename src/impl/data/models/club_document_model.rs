use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};

use crate::{
    entities::{
        player, session, team, AttendanceRecord, AttendanceSet, PlayerAccount, RechargeRecord,
        TrainingSession,
    },
    errors::CreditLedgerError,
};

use super::attendance_status_model::AttendanceStatusModel;

/// Serialized form of the whole club state, persisted as one opaque JSON
/// blob with last-writer-wins semantics. No field-level merge.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ClubDocumentModel {
    pub(crate) accounts: Vec<PlayerAccountModel>,
    pub(crate) sessions: Vec<TrainingSessionModel>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PlayerAccountModel {
    pub(crate) player_id: String,
    pub(crate) credit_balance: i64,
    pub(crate) leave_quota: i64,
    pub(crate) leaves_used: i64,
    pub(crate) valid_until: NaiveDate,
    pub(crate) recharge_history: Vec<RechargeRecordModel>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RechargeRecordModel {
    pub(crate) id: u64,
    pub(crate) date: NaiveDate,
    pub(crate) amount: i64,
    pub(crate) quota_added: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TrainingSessionModel {
    pub(crate) id: u64,
    pub(crate) date: NaiveDate,
    pub(crate) team_id: String,
    pub(crate) attendance: Vec<AttendanceRecordModel>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AttendanceRecordModel {
    pub(crate) player_id: String,
    pub(crate) status: AttendanceStatusModel,
}

// Domain -> document.
// ---

impl From<&PlayerAccount> for PlayerAccountModel {
    fn from(account: &PlayerAccount) -> Self {
        Self {
            player_id: account.player_id().as_str().to_string(),
            credit_balance: account.credit_balance(),
            leave_quota: account.leave_quota(),
            leaves_used: account.leaves_used(),
            valid_until: account.valid_until(),
            recharge_history: account
                .recharge_history()
                .iter()
                .map(|r| RechargeRecordModel {
                    id: r.id.0,
                    date: r.date,
                    amount: r.amount,
                    quota_added: r.quota_added,
                })
                .collect(),
        }
    }
}

impl From<&TrainingSession> for TrainingSessionModel {
    fn from(s: &TrainingSession) -> Self {
        Self {
            id: s.id.0,
            date: s.date,
            team_id: s.team_id.0.clone(),
            attendance: s
                .attendance
                .iter()
                .map(|(p, status)| AttendanceRecordModel {
                    player_id: p.as_str().to_string(),
                    status: status.into(),
                })
                .collect(),
        }
    }
}

// Document -> domain.
// ---

impl PlayerAccountModel {
    pub(crate) fn into_entity(self) -> PlayerAccount {
        PlayerAccount {
            player_id: player(self.player_id),
            credit_balance: self.credit_balance,
            leave_quota: self.leave_quota,
            leaves_used: self.leaves_used,
            valid_until: self.valid_until,
            recharge_history: self
                .recharge_history
                .into_iter()
                .map(|r| RechargeRecord::new(r.id, r.date, r.amount, r.quota_added))
                .collect(),
        }
    }
}

impl TrainingSessionModel {
    pub(crate) fn into_entity(self) -> Result<TrainingSession, CreditLedgerError> {
        Ok(TrainingSession {
            id: session(self.id),
            date: self.date,
            team_id: team(self.team_id),
            attendance: AttendanceSet::from_records(self.attendance.into_iter().map(|r| {
                AttendanceRecord {
                    player_id: player(r.player_id),
                    status: r.status.into(),
                }
            }))?,
        })
    }
}
