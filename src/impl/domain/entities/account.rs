use chrono::NaiveDate;

use super::recharge::RechargeRecord;

/// Identifier assigned by roster management, stable for the player's lifetime.
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct PlayerId(pub(crate) String);

impl PlayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Shorthand constructor.

pub fn player(id: impl Into<String>) -> PlayerId {
    PlayerId(id.into())
}

/// Per-player credit and leave-quota state for the current billing cycle.
///
/// Counters are written only by the reconciliation and cycle logic;
/// everything else reads through the accessors below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAccount {
    pub(crate) player_id: PlayerId,
    pub(crate) credit_balance: i64,
    pub(crate) leave_quota: i64,
    pub(crate) leaves_used: i64,
    pub(crate) valid_until: NaiveDate,
    pub(crate) recharge_history: Vec<RechargeRecord>,
}

impl PlayerAccount {
    pub(crate) fn new(player_id: PlayerId, joined_on: NaiveDate) -> Self {
        Self {
            player_id,
            credit_balance: 0,
            leave_quota: 0,
            leaves_used: 0,
            valid_until: joined_on,
            recharge_history: Vec::new(),
        }
    }

    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    /// Remaining prepaid sessions. May go negative; no floor is enforced.
    pub fn credit_balance(&self) -> i64 {
        self.credit_balance
    }

    /// Excused leaves allowed in the current billing cycle. Set only by a
    /// recharge.
    pub fn leave_quota(&self) -> i64 {
        self.leave_quota
    }

    /// Leave records applied in the current cycle. Not capped at the quota;
    /// over-quota leaves keep incrementing it.
    pub fn leaves_used(&self) -> i64 {
        self.leaves_used
    }

    /// End of the current paid cycle (recharge date + 1 calendar year).
    pub fn valid_until(&self) -> NaiveDate {
        self.valid_until
    }

    pub fn recharge_history(&self) -> &[RechargeRecord] {
        &self.recharge_history
    }

    /// Derived fact for reporting. An expired account still accepts
    /// attendance debits.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.valid_until < today
    }
}
