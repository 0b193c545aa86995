use crate::entities::AttendanceStatus;

/// Parse-layer representation of an attendance status, as it appears in CSV
/// cells and in the persisted club document.
#[derive(Debug, Clone, Copy, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) enum AttendanceStatusModel {
    Present,
    Leave,
    Injury,
    Absent,
}

impl Into<AttendanceStatus> for AttendanceStatusModel {
    fn into(self) -> AttendanceStatus {
        match self {
            AttendanceStatusModel::Present => AttendanceStatus::Present,
            AttendanceStatusModel::Leave => AttendanceStatus::Leave,
            AttendanceStatusModel::Injury => AttendanceStatus::Injury,
            AttendanceStatusModel::Absent => AttendanceStatus::Absent,
        }
    }
}

impl From<AttendanceStatus> for AttendanceStatusModel {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => AttendanceStatusModel::Present,
            AttendanceStatus::Leave => AttendanceStatusModel::Leave,
            AttendanceStatus::Injury => AttendanceStatusModel::Injury,
            AttendanceStatus::Absent => AttendanceStatusModel::Absent,
        }
    }
}
