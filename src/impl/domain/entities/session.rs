use chrono::NaiveDate;

use super::attendance::AttendanceSet;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct SessionId(pub(crate) u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct TeamId(pub(crate) String);

// Shorthand constructors.

pub fn session(id: u64) -> SessionId {
    SessionId(id)
}

pub fn team(name: impl Into<String>) -> TeamId {
    TeamId(name.into())
}

/// A scheduled training, owned by the scheduling collaborator. Consumed here
/// as the carrier of an attendance snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSession {
    pub id: SessionId,
    pub date: NaiveDate,
    pub team_id: TeamId,
    pub attendance: AttendanceSet,
}
