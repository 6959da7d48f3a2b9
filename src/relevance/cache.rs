//! In-memory cache of crawled pages.
//!
//! The cache holds an immutable [`SiteSnapshot`] behind an `Arc`. A refresh
//! builds a complete new snapshot without holding any lock and then swaps
//! it in with one assignment, so readers see either the old or the new set
//! of pages, never a mix. Two requests that both find the cache stale may
//! both crawl; the later swap wins.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::crawler::PageSource;
use crate::extractor::PageRecord;

/// Pages from one crawl and when that crawl happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSnapshot {
    pub pages: Vec<PageRecord>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl SiteSnapshot {
    /// Empty snapshots always need a crawl; others once older than `max_age`.
    pub fn needs_refresh(&self, now: DateTime<Utc>, max_age: TimeDelta) -> bool {
        if self.pages.is_empty() {
            return true;
        }
        match self.refreshed_at {
            None => true,
            Some(refreshed_at) => now.signed_duration_since(refreshed_at) > max_age,
        }
    }
}

pub struct SiteCache {
    source: Arc<dyn PageSource>,
    max_age: TimeDelta,
    current: RwLock<Arc<SiteSnapshot>>,
}

impl SiteCache {
    pub fn new(source: Arc<dyn PageSource>, refresh_interval: Duration) -> Self {
        Self {
            source,
            max_age: TimeDelta::from_std(refresh_interval).unwrap_or(TimeDelta::MAX),
            current: RwLock::new(Arc::new(SiteSnapshot::default())),
        }
    }

    /// The snapshot currently in place.
    pub fn snapshot(&self) -> Arc<SiteSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Re-crawl if the cache is empty or older than the refresh interval.
    pub async fn ensure_fresh(&self) -> Arc<SiteSnapshot> {
        self.ensure_fresh_at(Utc::now()).await
    }

    pub async fn ensure_fresh_at(&self, now: DateTime<Utc>) -> Arc<SiteSnapshot> {
        let current = self.snapshot();
        if !current.needs_refresh(now, self.max_age) {
            return current;
        }
        self.refresh_at(now).await
    }

    /// Re-crawl unconditionally.
    pub async fn refresh(&self) -> Arc<SiteSnapshot> {
        self.refresh_at(Utc::now()).await
    }

    #[instrument(skip(self))]
    pub async fn refresh_at(&self, now: DateTime<Utc>) -> Arc<SiteSnapshot> {
        info!("Updating site content cache");
        let pages = self.crawl().await;
        info!(pages = pages.len(), "Site content cache updated");

        let fresh = Arc::new(SiteSnapshot {
            pages,
            refreshed_at: Some(now),
        });
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&fresh);
        fresh
    }

    async fn crawl(&self) -> Vec<PageRecord> {
        let mut pages = Vec::new();
        for document in self.source.documents() {
            match self.source.extract(&document).await {
                Ok(page) => {
                    info!(document = %document, "Crawled");
                    pages.push(page);
                }
                Err(e) => {
                    error!(document = %document, error = %e, "Error crawling document");
                }
            }
        }
        pages
    }
}
