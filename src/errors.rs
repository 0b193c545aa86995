use thiserror::Error;

use crate::entities::PlayerId;

#[derive(Debug, Error)]
pub enum CreditLedgerError {
    // IO-related.
    #[error("Error reading file '{path}'.")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Error writing document '{path}'.")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Parsing-related.
    #[error("Invalid CSV format.")]
    InvalidCsv(#[source] csv::Error),
    #[error("Invalid {ron_type} (invalid RON format): {details}.")]
    InvalidRon {
        ron_type: &'static str,
        details: String,
    },
    #[error("Invalid ISO date: {date}.")]
    InvalidIsoDate { date: String },
    #[error("Invalid credit amount: '{value}'.")]
    InvalidCreditAmount { value: String },
    #[error("Invalid club document (invalid JSON format).")]
    InvalidDocument(#[source] serde_json::Error),

    // Accounting-related.
    #[error("Recharge amount must be positive, got {amount}.")]
    NonPositiveRechargeAmount { amount: i64 },
    #[error("Leave quota must be non-negative, got {quota}.")]
    NegativeLeaveQuota { quota: i64 },
    #[error("Duplicate attendance record for player '{player}' within one session.")]
    DuplicateAttendanceRecord { player: PlayerId },

    // Roster-related.
    #[error("Player '{player}' is already registered.")]
    PlayerAlreadyRegistered { player: PlayerId },
    #[error("Unknown player '{player}'.")]
    UnknownPlayer { player: PlayerId },
}
