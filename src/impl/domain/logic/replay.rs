use chrono::NaiveDate;

use crate::entities::{
    AccountEvent, AccountHistory, AttendanceStatus, LedgerEntry, LedgerEntryKind, LedgerStatement,
    StatementWindow,
};

use super::calendar;

/// Stateless reconstruction of a player's statement from recorded events.
/// Independent of the mutation path; used only for audit and reporting.
pub(crate) struct LedgerReplay {
    events: Vec<AccountEvent>,
}

struct FoldState {
    balance: i64,
    quota: i64,
    used: i64,
    entries: Vec<LedgerEntry>,
}

impl FoldState {
    fn new() -> Self {
        Self {
            balance: 0,
            quota: 0,
            used: 0,
            entries: Vec::new(),
        }
    }

    /// Update running state with the given event.
    fn step(self, event: AccountEvent) -> Self {
        let mut balance = self.balance;
        let mut quota = self.quota;
        let mut used = self.used;
        let mut entries = self.entries;

        let (date, kind, delta, note) = match event {
            AccountEvent::Recharge(r) => {
                balance += r.amount;
                quota = r.quota_added;
                used = 0;
                (r.date, LedgerEntryKind::Recharge, r.amount, None)
            }
            AccountEvent::Training { date, status } => match status {
                AttendanceStatus::Present => {
                    balance -= 1;
                    (date, LedgerEntryKind::Training, -1, None)
                }
                AttendanceStatus::Leave => {
                    if used < quota {
                        used += 1;
                        (
                            date,
                            LedgerEntryKind::Training,
                            0,
                            Some("quota consumed".to_string()),
                        )
                    } else {
                        balance -= 1;
                        used += 1;
                        (
                            date,
                            LedgerEntryKind::Training,
                            -1,
                            Some("over-quota charge".to_string()),
                        )
                    }
                }
                AttendanceStatus::Injury => (date, LedgerEntryKind::Training, 0, None),
                // Absent events are dropped before replay and carry no entry.
                AttendanceStatus::Absent => {
                    return Self {
                        balance,
                        quota,
                        used,
                        entries,
                    }
                }
            },
        };
        entries.push(LedgerEntry {
            date,
            kind,
            delta,
            balance_after: balance,
            note,
        });

        Self {
            balance,
            quota,
            used,
            entries,
        }
    }
}

impl LedgerReplay {
    /// Orders the history for replay: `Absent` events are dropped up front,
    /// the rest sort by date ascending with recharges before training events
    /// on the same date. The sort is stable, so same-kind ties keep input
    /// order.
    pub(crate) fn new(history: AccountHistory) -> Self {
        let mut events: Vec<AccountEvent> = history
            .recharges
            .into_iter()
            .map(AccountEvent::Recharge)
            .chain(
                history
                    .training_events
                    .into_iter()
                    .filter(|(_, status)| *status != AttendanceStatus::Absent)
                    .map(|(date, status)| AccountEvent::Training { date, status }),
            )
            .collect();
        events.sort_by_key(|e| (e.date(), e.kind_rank()));
        Self { events }
    }

    /// Replays the full history into an ordered statement with running
    /// balances. Pure: identical input yields identical output.
    pub(crate) fn process(self) -> LedgerStatement {
        let state = self
            .events
            .into_iter()
            .fold(FoldState::new(), FoldState::step);
        LedgerStatement {
            entries: state.entries,
            balance: state.balance,
            quota: state.quota,
            used: state.used,
            mismatch: None,
        }
    }
}

/// Window filtering is a view over the replayed entries; running balances are
/// computed from the full history regardless of the window.
pub(crate) fn filter_window(
    entries: Vec<LedgerEntry>,
    window: StatementWindow,
    as_of: NaiveDate,
) -> Vec<LedgerEntry> {
    match calendar::window_start(window, as_of) {
        None => entries,
        Some(start) => entries.into_iter().filter(|e| e.date >= start).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RechargeRecord;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn history(
        recharges: Vec<RechargeRecord>,
        training_events: Vec<(NaiveDate, AttendanceStatus)>,
    ) -> AccountHistory {
        AccountHistory {
            recharges,
            training_events,
        }
    }

    #[test]
    fn test_empty_history_yields_empty_statement() {
        let statement = LedgerReplay::new(AccountHistory::default()).process();
        assert!(statement.entries.is_empty());
        assert_eq!(statement.balance, 0);
        assert_eq!(statement.quota, 0);
        assert_eq!(statement.used, 0);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let h = history(
            vec![RechargeRecord::new(1, d(2024, 1, 10), 20, 2)],
            vec![
                (d(2024, 1, 12), AttendanceStatus::Present),
                (d(2024, 1, 15), AttendanceStatus::Leave),
                (d(2024, 1, 20), AttendanceStatus::Injury),
            ],
        );
        let first = LedgerReplay::new(h.clone()).process();
        let second = LedgerReplay::new(h).process();
        assert_eq!(first, second);
    }

    #[test]
    fn test_running_balance_and_notes() {
        let h = history(
            vec![RechargeRecord::new(1, d(2024, 1, 1), 10, 1)],
            vec![
                (d(2024, 1, 2), AttendanceStatus::Present),
                (d(2024, 1, 3), AttendanceStatus::Leave),
                (d(2024, 1, 4), AttendanceStatus::Leave),
            ],
        );
        let statement = LedgerReplay::new(h).process();
        let balances: Vec<i64> = statement.entries.iter().map(|e| e.balance_after).collect();
        assert_eq!(balances, vec![10, 9, 9, 8]);
        assert_eq!(
            statement.entries[2].note.as_deref(),
            Some("quota consumed")
        );
        assert_eq!(
            statement.entries[3].note.as_deref(),
            Some("over-quota charge")
        );
        assert_eq!(statement.balance, 8);
        assert_eq!(statement.used, 2);
    }

    #[test]
    fn test_recharge_resets_used_during_replay() {
        let h = history(
            vec![
                RechargeRecord::new(1, d(2024, 1, 1), 10, 1),
                RechargeRecord::new(2, d(2024, 2, 1), 10, 2),
            ],
            vec![
                (d(2024, 1, 5), AttendanceStatus::Leave),
                (d(2024, 1, 6), AttendanceStatus::Leave),
                (d(2024, 2, 5), AttendanceStatus::Leave),
            ],
        );
        let statement = LedgerReplay::new(h).process();
        // The second cycle's first leave consumes quota again.
        assert_eq!(
            statement.entries.last().unwrap().note.as_deref(),
            Some("quota consumed")
        );
        assert_eq!(statement.used, 1);
        assert_eq!(statement.quota, 2);
        assert_eq!(statement.balance, 10 - 1 + 10);
    }

    #[test]
    fn test_absent_events_produce_no_entries() {
        let h = history(
            vec![],
            vec![
                (d(2024, 1, 2), AttendanceStatus::Absent),
                (d(2024, 1, 3), AttendanceStatus::Present),
            ],
        );
        let statement = LedgerReplay::new(h).process();
        assert_eq!(statement.entries.len(), 1);
        assert_eq!(statement.balance, -1);
    }

    #[test]
    fn test_injury_emits_zero_delta_entry() {
        let h = history(vec![], vec![(d(2024, 1, 2), AttendanceStatus::Injury)]);
        let statement = LedgerReplay::new(h).process();
        assert_eq!(statement.entries.len(), 1);
        assert_eq!(statement.entries[0].delta, 0);
        assert_eq!(statement.balance, 0);
    }

    #[test]
    fn test_same_day_recharge_replays_before_training() {
        // Training listed first, but the same-day recharge must replay first:
        // the leave then consumes the fresh quota instead of a credit.
        let h = history(
            vec![RechargeRecord::new(1, d(2024, 3, 1), 10, 1)],
            vec![(d(2024, 3, 1), AttendanceStatus::Leave)],
        );
        let statement = LedgerReplay::new(h).process();
        assert_eq!(statement.entries[0].kind, LedgerEntryKind::Recharge);
        assert_eq!(statement.entries[1].delta, 0);
        assert_eq!(statement.balance, 10);
    }

    #[test]
    fn test_filter_window_is_a_pure_view() {
        let h = history(
            vec![RechargeRecord::new(1, d(2024, 1, 1), 10, 0)],
            vec![
                (d(2024, 3, 1), AttendanceStatus::Present),
                (d(2024, 6, 1), AttendanceStatus::Present),
            ],
        );
        let statement = LedgerReplay::new(h).process();
        let filtered = filter_window(
            statement.entries.clone(),
            StatementWindow::LastDays(30),
            d(2024, 6, 10),
        );
        assert_eq!(filtered.len(), 1);
        // Running balance still reflects the full history.
        assert_eq!(filtered[0].balance_after, 8);
        let all = filter_window(statement.entries, StatementWindow::All, d(2024, 6, 10));
        assert_eq!(all.len(), 3);
    }
}
