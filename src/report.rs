use crate::document::Document;
use crate::error::GenerationError;
use base64::Engine;
use std::path::{Path, PathBuf};
use tracing::info;

/// A finished report: the PDF bytes and the name to save them under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    filename: String,
    bytes: Vec<u8>,
    page_count: usize,
}

impl Report {
    /// Serialise a finished document. Nothing partial is ever returned: either the
    /// whole document is written or generation fails.
    pub fn render<S: ToString>(filename: S, document: Document) -> Result<Report, GenerationError> {
        let page_count = document.page_count();
        let bytes = document.to_bytes()?;
        let filename = filename.to_string();
        info!(%filename, page_count, bytes = bytes.len(), "report rendered");
        Ok(Report {
            filename,
            bytes,
            page_count,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The PDF itself, e.g. for an inline preview
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The PDF as a `data:application/pdf;base64,...` URI, for embedding a preview
    /// in a web page
    pub fn data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:application/pdf;base64,{encoded}")
    }

    /// Save into `dir` under the report's own filename, returning the full path
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, GenerationError> {
        let path = dir.as_ref().join(&self.filename);
        self.save_as(&path)?;
        Ok(path)
    }

    /// Save to exactly `path`
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<(), GenerationError> {
        let path = path.as_ref();
        std::fs::write(path, &self.bytes).map_err(|source| GenerationError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "report saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;
    use crate::page::Page;

    fn report() -> Report {
        let mut doc = Document::default();
        doc.add_page(Page::new(A4, None));
        Report::render("Inmobidata-Propiedad-1.pdf", doc).expect("renders")
    }

    #[test]
    fn renders_pdf_bytes() {
        let report = report();
        assert!(report.bytes().starts_with(b"%PDF-"));
        assert_eq!(report.page_count(), 1);
        assert_eq!(report.filename(), "Inmobidata-Propiedad-1.pdf");
    }

    #[test]
    fn data_uri_wraps_the_pdf() {
        let report = report();
        let uri = report.data_uri();
        let payload = uri
            .strip_prefix("data:application/pdf;base64,")
            .expect("pdf data uri");
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .expect("valid base64");
        assert_eq!(decoded, report.bytes());
    }

    #[test]
    fn saves_under_its_filename() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = report();
        let path = report.save(dir.path()).expect("saves");
        assert_eq!(path, dir.path().join("Inmobidata-Propiedad-1.pdf"));
        assert_eq!(std::fs::read(&path).expect("readable"), report.bytes());
    }

    #[test]
    fn saving_into_a_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = report()
            .save(dir.path().join("no/such/dir"))
            .expect_err("missing directory");
        assert!(matches!(err, GenerationError::Save { .. }));
    }
}
