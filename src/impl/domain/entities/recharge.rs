use chrono::NaiveDate;

/// Sequential per-account identifier of a recharge.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct RechargeId(pub(crate) u64);

impl std::fmt::Display for RechargeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RechargeRecord {
    pub id: RechargeId,
    pub date: NaiveDate,
    /// Credits added to the balance.
    pub amount: i64,
    /// The leave quota that became active for the new cycle.
    pub quota_added: i64,
}

impl RechargeRecord {
    pub fn new(id: u64, date: NaiveDate, amount: i64, quota_added: i64) -> Self {
        Self {
            id: RechargeId(id),
            date,
            amount,
            quota_added,
        }
    }
}
