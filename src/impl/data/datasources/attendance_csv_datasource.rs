use std::str::FromStr as _;

use async_trait::async_trait;
use chrono::NaiveDate;
use ron::from_str;

use crate::{
    data::models::{
        attendance_status_model::AttendanceStatusModel, iso_date_model::ISODateModel,
    },
    entities::AttendanceStatus,
    errors::CreditLedgerError,
};

/// Parses an exported per-player attendance history. Columns: date, status
/// (a RON enum literal: Present, Leave, Injury, Absent).
#[async_trait]
pub(crate) trait AttendanceCsvDatasource: Send + Sync {
    fn from_string(
        &self,
        s: &str,
    ) -> Result<Vec<(NaiveDate, AttendanceStatus)>, CreditLedgerError>;

    async fn from_file<P>(
        &self,
        path: P,
    ) -> Result<Vec<(NaiveDate, AttendanceStatus)>, CreditLedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}

pub(crate) struct AttendanceCsvDatasourceImpl;

impl AttendanceCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AttendanceCsvDatasource for AttendanceCsvDatasourceImpl {
    fn from_string(
        &self,
        s: &str,
    ) -> Result<Vec<(NaiveDate, AttendanceStatus)>, CreditLedgerError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(CreditLedgerError::InvalidCsv).and_then(|r| {
                    // Extract from CSV record.
                    let raw_date = r.get(0).unwrap_or("");
                    let raw_status = r.get(1).unwrap_or("");

                    // Parse.
                    let date: ISODateModel = ISODateModel::from_str(raw_date)?;
                    let status: AttendanceStatusModel =
                        from_str(raw_status).map_err(|e| CreditLedgerError::InvalidRon {
                            ron_type: "AttendanceStatus",
                            details: e.to_string(),
                        })?;

                    // Build.
                    Ok((date.into(), status.into()))
                })
            })
            .collect()
    }

    async fn from_file<P>(
        &self,
        path: P,
    ) -> Result<Vec<(NaiveDate, AttendanceStatus)>, CreditLedgerError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| CreditLedgerError::Read {
                path: path.as_ref().display().to_string(),
                source: e,
            })?;
        self.from_string(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_attendance_rows() {
        let csv = "date,status\n2024-01-05,Present\n2024-01-12,Leave\n2024-01-19,Absent\n";
        let events = AttendanceCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].1, AttendanceStatus::Present);
        assert_eq!(events[1].1, AttendanceStatus::Leave);
        assert_eq!(events[2].1, AttendanceStatus::Absent);
    }

    #[test]
    fn test_rejects_unknown_status() {
        let csv = "date,status\n2024-01-05,Vacation\n";
        let err = AttendanceCsvDatasourceImpl::new().from_string(csv);
        assert!(matches!(err, Err(CreditLedgerError::InvalidRon { .. })));
    }
}
