use crate::domain::common::AggregateRoot;
use crate::shared::ids::optional_id;
use crate::shared::{EntityId, RecordStatus, StorageKey, ValidationError};
use serde::{Deserialize, Serialize};

/// Document attached to a task category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: EntityId,
    #[serde(default)]
    pub contract: String,
    #[serde(default, with = "optional_id")]
    pub category_id: Option<EntityId>,
    #[serde(default, alias = "category")]
    pub category_name: String,
    pub filename: String,
    /// Object URL of the picked file or a placeholder
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub status: RecordStatus,
}

/// What the upload form hands over.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentUpload {
    pub category_id: Option<EntityId>,
    pub category_name: String,
    pub filename: Option<String>,
    pub size_bytes: u64,
    pub url: String,
    pub status: RecordStatus,
}

impl DocumentUpload {
    pub fn validate(&self, max_bytes: u64) -> Result<(), ValidationError> {
        if self.category_id.is_none() {
            return Err(ValidationError::MissingDocumentCategory);
        }
        if self.filename.as_deref().map(str::trim).unwrap_or("").is_empty() {
            return Err(ValidationError::MissingFile);
        }
        if self.size_bytes > max_bytes {
            return Err(ValidationError::FileTooLarge {
                limit_mb: max_bytes / (1024 * 1024),
            });
        }
        Ok(())
    }
}

impl Document {
    pub fn from_upload(id: EntityId, contract: &str, upload: &DocumentUpload, max_bytes: u64) -> Result<Self, ValidationError> {
        upload.validate(max_bytes)?;
        Ok(Self {
            id,
            contract: contract.to_string(),
            category_id: upload.category_id,
            category_name: upload.category_name.clone(),
            filename: upload.filename.clone().unwrap_or_default(),
            url: upload.url.clone(),
            status: upload.status,
        })
    }
}

impl AggregateRoot for Document {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.filename
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "document"
    }

    fn element_name() -> &'static str {
        "Document"
    }

    fn list_name() -> &'static str {
        "Documents"
    }

    fn storage_key() -> StorageKey {
        StorageKey::Documents
    }

    fn seed() -> Vec<Self> {
        vec![
            Document {
                id: EntityId(1),
                contract: "CON001".to_string(),
                category_id: Some(EntityId(1)),
                category_name: "Maintenance".to_string(),
                filename: "cleaning-specs.pdf".to_string(),
                url: "#".to_string(),
                status: RecordStatus::Active,
            },
            Document {
                id: EntityId(2),
                contract: "CON001".to_string(),
                category_id: Some(EntityId(2)),
                category_name: "Security".to_string(),
                filename: "patrol-route.jpg".to_string(),
                url: "#".to_string(),
                status: RecordStatus::Inactive,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 10 * 1024 * 1024;

    #[test]
    fn test_upload_checks_in_order() {
        let mut upload = DocumentUpload::default();
        assert_eq!(upload.validate(LIMIT), Err(ValidationError::MissingDocumentCategory));
        upload.category_id = Some(EntityId(1));
        assert_eq!(upload.validate(LIMIT), Err(ValidationError::MissingFile));
        upload.filename = Some("manual.pdf".into());
        upload.size_bytes = LIMIT + 1;
        assert_eq!(
            upload.validate(LIMIT).unwrap_err().to_string(),
            "File size exceeds 10 MB"
        );
        upload.size_bytes = LIMIT;
        let doc = Document::from_upload(EntityId(7), "CON001", &upload, LIMIT).unwrap();
        assert_eq!(doc.filename, "manual.pdf");
    }

    #[test]
    fn test_reads_category_alias() {
        let doc: Document =
            serde_json::from_str(r##"{"id":1,"category":"Maintenance","filename":"Maintenance_Manual.pdf","url":"#"}"##)
                .unwrap();
        assert_eq!(doc.category_name, "Maintenance");
        assert_eq!(doc.category_id, None);
    }
}
