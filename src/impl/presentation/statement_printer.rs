use crate::entities::{LedgerEntryKind, LedgerStatement, PlayerId};

use super::utils::{format_credits, format_delta};

impl LedgerEntryKind {
    fn label(&self) -> &'static str {
        match self {
            LedgerEntryKind::Recharge => "Recharge",
            LedgerEntryKind::Training => "Training",
        }
    }
}

pub(crate) struct StatementPrinter;

impl StatementPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_statement(&self, player: &PlayerId, statement: &LedgerStatement) -> String {
        let mut output = String::new();

        output.push_str(&self.section_header(&format!("Statement: {}", player)));
        for entry in &statement.entries {
            output.push_str(&format!(
                "{}  {:<10} {:>8} {:>12}\n",
                entry.date,
                entry.kind.label(),
                format_delta(entry.delta),
                format_credits(entry.balance_after),
            ));
            if let Some(note) = &entry.note {
                let wrapped = textwrap::wrap(note, 74);
                for line in wrapped {
                    output.push_str(&format!("    ; {}\n", line));
                }
            }
        }
        output.push('\n');

        output.push_str(&self.section_header("Totals"));
        output.push_str(&format!("balance {:>12}\n", format_credits(statement.balance)));
        output.push_str(&format!("quota   {:>12}\n", format_credits(statement.quota)));
        output.push_str(&format!("used    {:>12}\n", format_credits(statement.used)));

        if let Some(mismatch) = &statement.mismatch {
            output.push('\n');
            output.push_str(&format!(
                "; WARNING: stored balance ({}) diverges from replayed history ({})\n",
                format_credits(mismatch.stored),
                format_credits(mismatch.replayed),
            ));
        }

        output
    }

    fn section_header(&self, title: &str) -> String {
        let bar_len = 80usize.saturating_sub(title.len() + 7);
        format!("; --- {} {}\n\n", title, "-".repeat(bar_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{player, BalanceMismatch, LedgerEntry};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_statement() -> LedgerStatement {
        LedgerStatement {
            entries: vec![
                LedgerEntry {
                    date: d(2024, 3, 1),
                    kind: LedgerEntryKind::Recharge,
                    delta: 50,
                    balance_after: 60,
                    note: None,
                },
                LedgerEntry {
                    date: d(2024, 3, 11),
                    kind: LedgerEntryKind::Training,
                    delta: -1,
                    balance_after: 59,
                    note: Some("over-quota charge".to_string()),
                },
            ],
            balance: 59,
            quota: 3,
            used: 4,
            mismatch: None,
        }
    }

    #[test]
    fn test_statement_lines_and_totals() {
        let printed = StatementPrinter::new().print_statement(&player("p1"), &sample_statement());
        assert!(printed.contains("; --- Statement: p1 "));
        assert!(printed.contains("2024-03-01  Recharge        +50           60"));
        assert!(printed.contains("2024-03-11  Training         -1           59"));
        assert!(printed.contains("    ; over-quota charge"));
        assert!(printed.contains("balance           59"));
        assert!(!printed.contains("WARNING"));
    }

    #[test]
    fn test_mismatch_prints_a_warning_comment() {
        let mut statement = sample_statement();
        statement.mismatch = Some(BalanceMismatch {
            stored: 58,
            replayed: 59,
        });
        let printed = StatementPrinter::new().print_statement(&player("p1"), &statement);
        assert!(printed
            .contains("; WARNING: stored balance (58) diverges from replayed history (59)"));
    }
}
