use async_trait::async_trait;
use std::path::PathBuf;
use tracing::instrument;

use crate::crawler::{decode::decode_document, errors::CrawlError};
use crate::extractor::{PageRecord, extract_page};

/// A fixed, ordered set of documents that can each be turned into a page record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Configured documents, in crawl order.
    fn documents(&self) -> Vec<String>;

    /// Read and extract one document.
    async fn extract(&self, document: &str) -> Result<PageRecord, CrawlError>;
}

/// HTML files read from a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalSite {
    root: PathBuf,
    documents: Vec<String>,
}

impl LocalSite {
    pub fn new<I, S>(root: impl Into<PathBuf>, documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into(),
            documents: documents.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl PageSource for LocalSite {
    fn documents(&self) -> Vec<String> {
        self.documents.clone()
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn extract(&self, document: &str) -> Result<PageRecord, CrawlError> {
        let path = self.root.join(document);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| CrawlError::from_io(path.clone(), e))?;
        let html = decode_document(&bytes);

        Ok(extract_page(&html, &format!("/{}", document), document))
    }
}
