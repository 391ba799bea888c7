//! Poll loop behavior tests.
//!
//! A scripted fetcher plays back a sequence of listing pages and the tests
//! assert what the gate lets through: first sighting dispatches, repeats
//! stay quiet, disappearance is recorded silently, fetch failures change
//! nothing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use discord_client::Embed;
use transferwatch_core::{default_rules, Category, CommitPolicy, EntityCatalog};
use transferwatch_scout::notify::Notifier;
use transferwatch_scout::{FetchError, HeadlineScout, PageFetcher, Poller, Source};

// ---------------------------------------------------------------------------
// Stubs
// ---------------------------------------------------------------------------

#[derive(Clone)]
enum StubPage {
    Html(String),
    Fail,
}

/// Plays back pages in order. The last page repeats forever, so a test can
/// script "change, then stay put" without counting ticks.
struct SequenceFetcher {
    pages: Mutex<VecDeque<StubPage>>,
}

impl SequenceFetcher {
    fn new(pages: Vec<StubPage>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
        }
    }
}

#[async_trait]
impl PageFetcher for SequenceFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        let mut pages = self.pages.lock().unwrap();
        let page = if pages.len() == 1 {
            pages.front().cloned()
        } else {
            pages.pop_front()
        };
        match page.expect("SequenceFetcher ran out of pages") {
            StubPage::Html(html) => Ok(html),
            StubPage::Fail => Err(FetchError::Status { status: 500 }),
        }
    }

    fn name(&self) -> &str {
        "sequence"
    }
}

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<Embed>>,
}

impl RecordingNotifier {
    fn sent(&self) -> Vec<Embed> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, embed: &Embed) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(embed.clone());
        Ok(())
    }
}

/// Fails the first `failures` sends, then behaves like a recorder.
struct FlakyNotifier {
    failures_left: AtomicU32,
    sent: Mutex<Vec<Embed>>,
}

impl FlakyNotifier {
    fn new(failures: u32) -> Self {
        Self {
            failures_left: AtomicU32::new(failures),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for FlakyNotifier {
    async fn send(&self, embed: &Embed) -> anyhow::Result<()> {
        if self.failures_left.load(Ordering::SeqCst) > 0 {
            self.failures_left.fetch_sub(1, Ordering::SeqCst);
            anyhow::bail!("simulated send failure");
        }
        self.sent.lock().unwrap().push(embed.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn page(headlines: &[&str]) -> StubPage {
    let items: String = headlines
        .iter()
        .map(|h| {
            format!(
                r#"<div class="type-article"><a href="/en/news/x"><h3 class="title">{h}</h3></a></div>"#
            )
        })
        .collect();
    StubPage::Html(format!("<html><body>{items}</body></html>"))
}

fn make_scout(fetcher: Arc<dyn PageFetcher>) -> Arc<HeadlineScout> {
    Arc::new(HeadlineScout::new(
        fetcher,
        Source {
            url: "https://news.example.com/transfers".to_string(),
            selectors: vec![".type-article .title".to_string()],
        },
        EntityCatalog::top_leagues(),
        default_rules(),
        10,
    ))
}

fn make_poller(
    scout: Arc<HeadlineScout>,
    notifier: Arc<dyn Notifier>,
    policy: CommitPolicy,
) -> Poller {
    Poller::new(scout, notifier, Duration::from_secs(600), policy)
}

const OFFICIAL_A: &str = "Official: Arsenal sign goalkeeper";
const OFFICIAL_B: &str = "Chelsea confirmed deal for midfielder";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_first_sighting_dispatches() {
    let fetcher = Arc::new(SequenceFetcher::new(vec![page(&[OFFICIAL_A])]));
    let notifier = Arc::new(RecordingNotifier::default());
    let poller = make_poller(make_scout(fetcher), notifier.clone(), CommitPolicy::Always);

    let outcome = poller.tick().await;

    assert_eq!(outcome.dispatched, 1);
    assert_eq!(outcome.send_failures, 0);
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].fields[0].value.contains(OFFICIAL_A));
}

#[tokio::test]
async fn test_unchanged_page_stays_quiet() {
    let fetcher = Arc::new(SequenceFetcher::new(vec![page(&[OFFICIAL_A])]));
    let notifier = Arc::new(RecordingNotifier::default());
    let poller = make_poller(make_scout(fetcher), notifier.clone(), CommitPolicy::Always);

    poller.tick().await;
    let second = poller.tick().await;

    assert_eq!(second.dispatched, 0);
    assert_eq!(second.unchanged, 2);
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_superset_redispatches_whole_snapshot() {
    let fetcher = Arc::new(SequenceFetcher::new(vec![
        page(&[OFFICIAL_A]),
        page(&[OFFICIAL_A, OFFICIAL_B]),
    ]));
    let notifier = Arc::new(RecordingNotifier::default());
    let poller = make_poller(make_scout(fetcher), notifier.clone(), CommitPolicy::Always);

    poller.tick().await;
    let second = poller.tick().await;

    assert_eq!(second.dispatched, 1);
    let sent = notifier.sent();
    assert_eq!(sent.len(), 2);
    // The whole current list goes out, not a diff.
    assert_eq!(sent[1].fields.len(), 2);
    assert!(sent[1].fields[0].value.contains(OFFICIAL_A));
    assert!(sent[1].fields[1].value.contains(OFFICIAL_B));
}

#[tokio::test]
async fn test_no_matching_headlines_is_quiet_from_the_start() {
    let fetcher = Arc::new(SequenceFetcher::new(vec![page(&[
        "Midfielder weighing options abroad",
    ])]));
    let notifier = Arc::new(RecordingNotifier::default());
    let poller = make_poller(make_scout(fetcher), notifier.clone(), CommitPolicy::Always);

    let outcome = poller.tick().await;

    // Empty matches an untouched baseline, so nothing counts as a change.
    assert_eq!(outcome.dispatched, 0);
    assert_eq!(outcome.unchanged, 2);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_disappearance_is_silent_but_reappearance_is_news() {
    let fetcher = Arc::new(SequenceFetcher::new(vec![
        page(&[OFFICIAL_A]),
        page(&[]),
        page(&[OFFICIAL_A]),
    ]));
    let notifier = Arc::new(RecordingNotifier::default());
    let poller = make_poller(make_scout(fetcher), notifier.clone(), CommitPolicy::Always);

    poller.tick().await;
    let second = poller.tick().await;
    assert_eq!(second.cleared, 1);
    assert_eq!(second.dispatched, 0);
    assert_eq!(notifier.sent().len(), 1);

    let third = poller.tick().await;
    assert_eq!(third.dispatched, 1);
    assert_eq!(notifier.sent().len(), 2);
}

#[tokio::test]
async fn test_fetch_failure_leaves_baselines_alone() {
    let fetcher = Arc::new(SequenceFetcher::new(vec![
        page(&[OFFICIAL_A]),
        StubPage::Fail,
        page(&[OFFICIAL_A]),
    ]));
    let notifier = Arc::new(RecordingNotifier::default());
    let poller = make_poller(make_scout(fetcher), notifier.clone(), CommitPolicy::Always);

    poller.tick().await;
    let failed = poller.tick().await;
    assert_eq!(failed.categories, 0);
    assert_eq!(failed.dispatched, 0);

    // Same content after the outage: still not news.
    let third = poller.tick().await;
    assert_eq!(third.dispatched, 0);
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_commit_always_drops_failed_dispatch() {
    let fetcher = Arc::new(SequenceFetcher::new(vec![page(&[OFFICIAL_A])]));
    let notifier = Arc::new(FlakyNotifier::new(1));
    let poller = make_poller(make_scout(fetcher), notifier.clone(), CommitPolicy::Always);

    let first = poller.tick().await;
    assert_eq!(first.send_failures, 1);

    // Baseline advanced despite the failure, so the item is never re-sent.
    let second = poller.tick().await;
    assert_eq!(second.dispatched, 0);
    assert_eq!(second.unchanged, 2);
    assert_eq!(notifier.sent_count(), 0);
}

#[tokio::test]
async fn test_commit_on_delivery_retries_failed_dispatch() {
    let fetcher = Arc::new(SequenceFetcher::new(vec![page(&[OFFICIAL_A])]));
    let notifier = Arc::new(FlakyNotifier::new(1));
    let poller = make_poller(make_scout(fetcher), notifier.clone(), CommitPolicy::OnDelivery);

    let first = poller.tick().await;
    assert_eq!(first.send_failures, 1);

    // Baseline held back, so the next tick tries again and succeeds.
    let second = poller.tick().await;
    assert_eq!(second.dispatched, 1);
    assert_eq!(notifier.sent_count(), 1);
}

#[tokio::test]
async fn test_on_demand_queries_never_advance_the_gate() {
    let fetcher = Arc::new(SequenceFetcher::new(vec![page(&[OFFICIAL_A])]));
    let notifier = Arc::new(RecordingNotifier::default());
    let scout = make_scout(fetcher);
    let poller = make_poller(scout.clone(), notifier.clone(), CommitPolicy::Always);

    // Repeated queries see the same content and stay idempotent.
    let first = scout.snapshot_for(Category::Official).await.unwrap();
    let second = scout.snapshot_for(Category::Official).await.unwrap();
    assert_eq!(first.fingerprint, second.fingerprint);
    assert!(!first.is_empty());

    // The poller still treats the content as net-new afterwards.
    let outcome = poller.tick().await;
    assert_eq!(outcome.dispatched, 1);
    assert_eq!(notifier.sent().len(), 1);
}
