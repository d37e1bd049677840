use crate::domain::a010_document::aggregate::{Document, DocumentUpload};
use crate::domain::common::Repository;
use crate::shared::config::PortalConfig;
use crate::shared::{IdGenerator, KeyValueStore};
use crate::usecases::common::{UseCaseMetadata, UseCaseResult};

pub const SAVED_MESSAGE: &str = "Document saved";

pub struct UploadDocument;

impl UseCaseMetadata for UploadDocument {
    fn usecase_index() -> &'static str {
        "u004"
    }

    fn usecase_name() -> &'static str {
        "upload_document"
    }

    fn display_name() -> &'static str {
        "Upload document"
    }
}

impl UploadDocument {
    /// Store document metadata for `contract`; the file itself only lives
    /// behind its object URL.
    pub fn execute(
        store: &dyn KeyValueStore,
        contract: &str,
        upload: &DocumentUpload,
        config: &PortalConfig,
    ) -> UseCaseResult<Vec<Document>> {
        let repo = Repository::<Document>::new(store);
        let mut documents = repo.list()?;
        let mut ids = IdGenerator::new();
        ids.observe(documents.iter().map(|d| d.id));
        let doc = Document::from_upload(ids.next(), contract, upload, config.document_max_bytes)?;
        log::info!("{}: {} ({} bytes)", Self::full_name(), doc.filename, upload.size_bytes);
        documents.push(doc);
        repo.save_all(&documents)?;
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{EntityId, MemoryStore};

    fn upload(size: u64) -> DocumentUpload {
        DocumentUpload {
            category_id: Some(EntityId(1)),
            category_name: "Maintenance".into(),
            filename: Some("manual.pdf".into()),
            size_bytes: size,
            url: "blob:manual".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_upload_is_stored_under_contract() {
        let store = MemoryStore::new();
        let docs = UploadDocument::execute(&store, "CON004", &upload(1024), &PortalConfig::default()).unwrap();
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[2].contract, "CON004");
    }

    #[test]
    fn test_oversized_file_rejected() {
        let store = MemoryStore::new();
        let err = UploadDocument::execute(&store, "CON004", &upload(11 * 1024 * 1024), &PortalConfig::default()).unwrap_err();
        assert_eq!(err.message, "File size exceeds 10 MB");
    }
}
