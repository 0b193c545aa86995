use std::path::PathBuf;

use async_trait::async_trait;

use crate::{data::models::club_document_model::ClubDocumentModel, errors::CreditLedgerError};

/// Whole-document persistence boundary. The document is an opaque blob: each
/// save overwrites it completely and the last writer wins.
#[async_trait]
pub(crate) trait DocumentDatasource: Send + Sync {
    async fn load(&self) -> Result<Option<ClubDocumentModel>, CreditLedgerError>;

    async fn save(&self, document: &ClubDocumentModel) -> Result<(), CreditLedgerError>;
}

pub(crate) struct JsonDocumentDatasourceImpl {
    path: PathBuf,
}

impl JsonDocumentDatasourceImpl {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentDatasource for JsonDocumentDatasourceImpl {
    async fn load(&self) -> Result<Option<ClubDocumentModel>, CreditLedgerError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(CreditLedgerError::InvalidDocument),
            // A missing document is a fresh club, not an error.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CreditLedgerError::Read {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }

    async fn save(&self, document: &ClubDocumentModel) -> Result<(), CreditLedgerError> {
        let json =
            serde_json::to_string_pretty(document).map_err(CreditLedgerError::InvalidDocument)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| CreditLedgerError::Write {
                path: self.path.display().to_string(),
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_document_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let ds = JsonDocumentDatasourceImpl::new(dir.path().join("club.json"));
        assert!(ds.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let ds = JsonDocumentDatasourceImpl::new(dir.path().join("club.json"));
        let document = ClubDocumentModel {
            accounts: vec![],
            sessions: vec![],
        };
        ds.save(&document).await.unwrap();
        let loaded = ds.load().await.unwrap().unwrap();
        assert!(loaded.accounts.is_empty());
        assert!(loaded.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("club.json");
        std::fs::write(&path, "not json").unwrap();
        let ds = JsonDocumentDatasourceImpl::new(path);
        assert!(matches!(
            ds.load().await,
            Err(CreditLedgerError::InvalidDocument(_))
        ));
    }
}
