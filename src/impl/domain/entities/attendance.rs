use std::collections::BTreeMap;

use crate::errors::CreditLedgerError;

use super::account::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Leave,
    Injury,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub player_id: PlayerId,
    pub status: AttendanceStatus,
}

/// One session's complete roster snapshot, keyed by player. At most one
/// record per player, enforced at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceSet(pub(crate) BTreeMap<PlayerId, AttendanceStatus>);

impl AttendanceSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(
        records: impl IntoIterator<Item = AttendanceRecord>,
    ) -> Result<Self, CreditLedgerError> {
        let mut map = BTreeMap::new();
        for record in records {
            if map.insert(record.player_id.clone(), record.status).is_some() {
                return Err(CreditLedgerError::DuplicateAttendanceRecord {
                    player: record.player_id,
                });
            }
        }
        Ok(Self(map))
    }

    pub fn status(&self, player: &PlayerId) -> Option<AttendanceStatus> {
        self.0.get(player).copied()
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, AttendanceStatus)> {
        self.0.iter().map(|(p, s)| (p, *s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of reconciling one session edit against the account store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Players whose accounts were mutated.
    pub updated: Vec<PlayerId>,
    /// Players named by a snapshot but missing from the store (non-fatal).
    pub skipped: Vec<PlayerId>,
}
