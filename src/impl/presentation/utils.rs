use num_format::{Locale, ToFormattedString as _};

/// Format a credit count with proper thousands separators.
///
/// For consistency, uses en locale (',' as thousands separator, i.e. 1,000)
/// regardless of the user's locale. Could be generalized in the future.
pub(crate) fn format_credits(amount: i64) -> String {
    let formatted = amount.unsigned_abs().to_formatted_string(&Locale::en);
    if amount < 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Deltas carry an explicit sign so a statement line reads as a mutation;
/// zero-delta entries (quota leaves, injuries) print a bare 0.
pub(crate) fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", format_credits(delta))
    } else {
        format_credits(delta)
    }
}
