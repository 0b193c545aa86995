use chrono::NaiveDate;

use crate::{
    entities::{PlayerAccount, RechargeId, RechargeRecord},
    errors::CreditLedgerError,
};

use super::calendar;

/// Applies a top-up to the account and starts a new billing cycle.
///
/// The only operation that writes `leave_quota` or resets `leaves_used`.
/// Validation runs before any mutation; a rejected recharge leaves the
/// account untouched.
pub(crate) fn apply_recharge(
    account: &mut PlayerAccount,
    amount: i64,
    quota: i64,
    at: NaiveDate,
) -> Result<RechargeRecord, CreditLedgerError> {
    if amount <= 0 {
        return Err(CreditLedgerError::NonPositiveRechargeAmount { amount });
    }
    if quota < 0 {
        return Err(CreditLedgerError::NegativeLeaveQuota { quota });
    }

    let record = RechargeRecord {
        id: RechargeId(account.recharge_history.len() as u64 + 1),
        date: at,
        amount,
        quota_added: quota,
    };
    account.credit_balance += amount;
    account.leave_quota = quota;
    account.leaves_used = 0;
    account.valid_until = calendar::one_year_after(at);
    account.recharge_history.push(record.clone());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::player;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn account_with(balance: i64, quota: i64, used: i64) -> PlayerAccount {
        let mut account = PlayerAccount::new(player("p1"), d(2023, 9, 1));
        account.credit_balance = balance;
        account.leave_quota = quota;
        account.leaves_used = used;
        account
    }

    #[test]
    fn test_recharge_resets_cycle() {
        // Scenario D.
        let mut account = account_with(10, 2, 2);
        let record = apply_recharge(&mut account, 50, 3, d(2024, 3, 1)).unwrap();

        assert_eq!(account.credit_balance, 60);
        assert_eq!(account.leave_quota, 3);
        assert_eq!(account.leaves_used, 0);
        assert_eq!(account.valid_until, d(2025, 3, 1));
        assert_eq!(record.amount, 50);
        assert_eq!(record.quota_added, 3);
        assert_eq!(account.recharge_history.len(), 1);
    }

    #[test]
    fn test_recharge_on_leap_day() {
        let mut account = account_with(0, 0, 0);
        apply_recharge(&mut account, 10, 1, d(2024, 2, 29)).unwrap();
        assert_eq!(account.valid_until, d(2025, 2, 28));
    }

    #[test]
    fn test_recharge_ids_are_sequential() {
        let mut account = account_with(0, 0, 0);
        let first = apply_recharge(&mut account, 10, 1, d(2024, 1, 1)).unwrap();
        let second = apply_recharge(&mut account, 10, 1, d(2024, 6, 1)).unwrap();
        assert_eq!(first.id, RechargeId(1));
        assert_eq!(second.id, RechargeId(2));
    }

    #[test]
    fn test_rejects_non_positive_amount_without_mutation() {
        let mut account = account_with(10, 3, 1);
        let before = account.clone();
        for amount in [0, -5] {
            let err = apply_recharge(&mut account, amount, 3, d(2024, 3, 1));
            assert!(matches!(
                err,
                Err(CreditLedgerError::NonPositiveRechargeAmount { .. })
            ));
        }
        assert_eq!(account, before);
    }

    #[test]
    fn test_rejects_negative_quota_without_mutation() {
        let mut account = account_with(10, 3, 1);
        let before = account.clone();
        let err = apply_recharge(&mut account, 5, -1, d(2024, 3, 1));
        assert!(matches!(
            err,
            Err(CreditLedgerError::NegativeLeaveQuota { .. })
        ));
        assert_eq!(account, before);
    }
}
