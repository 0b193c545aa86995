use chrono::NaiveDate;

use super::{attendance::AttendanceStatus, recharge::RechargeRecord};

/// One event in a player's balance history, as consumed by the replay engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEvent {
    Recharge(RechargeRecord),
    Training {
        date: NaiveDate,
        status: AttendanceStatus,
    },
}

impl AccountEvent {
    pub fn date(&self) -> NaiveDate {
        match self {
            AccountEvent::Recharge(r) => r.date,
            AccountEvent::Training { date, .. } => *date,
        }
    }

    /// Same-day ordering: recharges replay before training events.
    pub(crate) fn kind_rank(&self) -> u8 {
        match self {
            AccountEvent::Recharge(_) => 0,
            AccountEvent::Training { .. } => 1,
        }
    }
}

/// A player's full recorded history, the input to a replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountHistory {
    pub recharges: Vec<RechargeRecord>,
    pub training_events: Vec<(NaiveDate, AttendanceStatus)>,
}
