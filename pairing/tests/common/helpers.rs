//! Test helpers and builder patterns for pairing tests

use chrono::{DateTime, Utc};
use pairing::services::MemoryStore;
use pairing::traits::{MockClock, MockNotifier};
use pairing::{Clock, CompletionTracker, Coordinator, DocumentStore, HistoryStore, Notifier};
use std::sync::{Arc, Mutex};

use super::fixtures::TestFixtures;

/// Clock whose time the test moves by hand
#[derive(Clone)]
pub struct TestClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl TestClock {
    pub fn at(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    /// Mock clock reading this test clock
    pub fn as_clock(&self) -> Arc<dyn Clock> {
        let now = self.now.clone();
        let mut clock = MockClock::new();
        clock.expect_now().returning(move || *now.lock().unwrap());
        Arc::new(clock)
    }
}

/// Notifier mock that accepts every delivery
pub fn accepting_notifier() -> MockNotifier {
    let mut notifier = MockNotifier::new();
    notifier.expect_notify_partner().returning(|_, _, _| Ok(())).times(0..);
    notifier
}

/// Builder for coordinators with sensible defaults
pub struct CoordinatorBuilder<H, C, N> {
    clock: TestClock,
    history: H,
    completions: C,
    notifier: N,
}

impl CoordinatorBuilder<MemoryStore, MemoryStore, MockNotifier> {
    pub fn new() -> Self {
        Self {
            clock: TestClock::at(TestFixtures::week_three()),
            history: MemoryStore::new(),
            completions: MemoryStore::new(),
            notifier: accepting_notifier(),
        }
    }
}

impl<H, C, N> CoordinatorBuilder<H, C, N>
where
    H: DocumentStore,
    C: DocumentStore,
    N: Notifier,
{
    pub fn with_clock(mut self, clock: TestClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_history<H2: DocumentStore>(self, history: H2) -> CoordinatorBuilder<H2, C, N> {
        CoordinatorBuilder {
            clock: self.clock,
            history,
            completions: self.completions,
            notifier: self.notifier,
        }
    }

    pub fn with_completions<C2: DocumentStore>(self, completions: C2) -> CoordinatorBuilder<H, C2, N> {
        CoordinatorBuilder {
            clock: self.clock,
            history: self.history,
            completions,
            notifier: self.notifier,
        }
    }

    pub fn with_notifier<N2: Notifier>(self, notifier: N2) -> CoordinatorBuilder<H, C, N2> {
        CoordinatorBuilder {
            clock: self.clock,
            history: self.history,
            completions: self.completions,
            notifier,
        }
    }

    pub async fn build(self) -> Coordinator<H, C, N> {
        let clock = self.clock.as_clock();
        let history = HistoryStore::open(self.history, clock.clone()).await;
        let tracker = CompletionTracker::open(self.completions, clock).await;
        Coordinator::new(history, tracker, self.notifier)
    }
}
