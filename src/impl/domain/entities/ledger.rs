use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEntryKind {
    Recharge,
    Training,
}

/// One line of a replayed statement. Derived output only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub kind: LedgerEntryKind,
    pub delta: i64,
    pub balance_after: i64,
    pub note: Option<String>,
}

/// View filter over an already-replayed statement. Filtering never changes
/// the replay itself; running balances always come from the full history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementWindow {
    All,
    LastDays(i64),
    Quarter,
    Year,
}

/// Stored balance diverging from the balance replayed out of the same
/// player's history. Non-fatal: the stored balance stays authoritative for
/// mutation, the replay output for audit display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceMismatch {
    pub stored: i64,
    pub replayed: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerStatement {
    pub entries: Vec<LedgerEntry>,
    pub balance: i64,
    pub quota: i64,
    pub used: i64,
    pub mismatch: Option<BalanceMismatch>,
}
