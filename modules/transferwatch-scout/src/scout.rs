use std::sync::Arc;

use tracing::info;

use transferwatch_core::{classify, Category, ClassificationRule, EntityCatalog, Headline, Snapshot};

use crate::extract::extract_headlines;
use crate::fetch::{FetchError, PageFetcher};

/// Where headlines come from: the listing page URL plus the CSS selectors
/// that locate headline elements on it.
#[derive(Debug, Clone)]
pub struct Source {
    pub url: String,
    pub selectors: Vec<String>,
}

/// Fetches the source page and turns it into per-category snapshots.
///
/// Every snapshot request re-fetches the live page. Nothing here holds
/// state between calls, so the poller and the command surface can share
/// one scout without observing each other.
pub struct HeadlineScout {
    fetcher: Arc<dyn PageFetcher>,
    source: Source,
    catalog: EntityCatalog,
    rules: Vec<ClassificationRule>,
    snapshot_cap: usize,
}

impl HeadlineScout {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        source: Source,
        catalog: EntityCatalog,
        rules: Vec<ClassificationRule>,
        snapshot_cap: usize,
    ) -> Self {
        Self {
            fetcher,
            source,
            catalog,
            rules,
            snapshot_cap,
        }
    }

    /// Categories this scout produces, in rule order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.rules.iter().map(|r| r.category)
    }

    /// Fetch the page once and build a snapshot for every configured rule.
    pub async fn snapshot_all(&self) -> Result<Vec<Snapshot>, FetchError> {
        let headlines = self.headlines().await?;
        Ok(self
            .rules
            .iter()
            .map(|rule| self.build_snapshot(rule, &headlines))
            .collect())
    }

    /// Fetch the page and build a snapshot for one category. A category
    /// without a configured rule yields an empty snapshot.
    pub async fn snapshot_for(&self, category: Category) -> Result<Snapshot, FetchError> {
        let Some(rule) = self.rules.iter().find(|r| r.category == category) else {
            return Ok(Snapshot::empty(category));
        };
        let headlines = self.headlines().await?;
        Ok(self.build_snapshot(rule, &headlines))
    }

    fn build_snapshot(&self, rule: &ClassificationRule, headlines: &[Headline]) -> Snapshot {
        let matches = classify(headlines, rule, &self.catalog);
        Snapshot::build(rule.category, matches, self.snapshot_cap)
    }

    async fn headlines(&self) -> Result<Vec<Headline>, FetchError> {
        let html = self.fetcher.fetch(&self.source.url).await?;
        let headlines = extract_headlines(&html, &self.source.selectors, &self.source.url);
        info!(
            url = self.source.url.as_str(),
            count = headlines.len(),
            "Extracted headline candidates"
        );
        Ok(headlines)
    }
}
