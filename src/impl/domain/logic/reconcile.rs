use std::collections::BTreeSet;

use crate::entities::{AttendanceSet, AttendanceStatus, PlayerAccount, PlayerId};

/// Mutates one account for a single session edit: the reversal of the old
/// record runs strictly before the application of the new one.
///
/// The reversal's over-quota test reads the account's current counters, not a
/// record of how the old leave was originally classified. That is only
/// correct because reversal restores the pre-edit boundary condition before
/// the new record is classified; callers must never apply before reversing.
/// Accounts do not interact, so the store may fuse both steps for one player
/// under a single lock acquisition.
pub(crate) fn reconcile_account(
    account: &mut PlayerAccount,
    previous: Option<AttendanceStatus>,
    next: Option<AttendanceStatus>,
) {
    if let Some(status) = previous {
        reverse_record(account, status);
    }
    if let Some(status) = next {
        apply_record(account, status);
    }
}

/// Phase 1: undo the effect the old record had when it was applied.
fn reverse_record(account: &mut PlayerAccount, status: AttendanceStatus) {
    match status {
        AttendanceStatus::Present => account.credit_balance += 1,
        AttendanceStatus::Leave => {
            if account.leaves_used > account.leave_quota {
                // The reversed leave was an over-quota charge.
                account.leaves_used -= 1;
                account.credit_balance += 1;
            } else if account.leaves_used > 0 {
                account.leaves_used -= 1;
            }
        }
        AttendanceStatus::Injury | AttendanceStatus::Absent => {}
    }
}

/// Phase 2: charge the new record against the restored state.
fn apply_record(account: &mut PlayerAccount, status: AttendanceStatus) {
    match status {
        AttendanceStatus::Present => account.credit_balance -= 1,
        AttendanceStatus::Leave => {
            if account.leaves_used < account.leave_quota {
                account.leaves_used += 1;
            } else {
                account.credit_balance -= 1;
                account.leaves_used += 1;
            }
        }
        AttendanceStatus::Injury | AttendanceStatus::Absent => {}
    }
}

/// Players named by either snapshot, in deterministic order. Players absent
/// from both are untouched by the edit.
pub(crate) fn affected_players<'a>(
    previous: &'a AttendanceSet,
    next: &'a AttendanceSet,
) -> BTreeSet<&'a PlayerId> {
    previous.players().chain(next.players()).collect()
}
