use async_trait::async_trait;
use helm_broker_application::ports::{AddonConverter, AddonStorage};
use helm_broker_domain::{Addon, AddonScope, DomainError, Service};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

type FindAllResult = Result<Vec<Addon>, DomainError>;

/// Storage double: each `expect_find_all` answers exactly one call, in order.
pub struct MockAddonStorage {
    expectations: Mutex<VecDeque<(AddonScope, FindAllResult)>>,
    calls: AtomicUsize,
}

impl MockAddonStorage {
    pub fn new() -> Self {
        Self {
            expectations: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn expect_find_all(self, scope: AddonScope, result: FindAllResult) -> Self {
        self.expectations
            .lock()
            .unwrap()
            .push_back((scope, result));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn assert_expectations(&self) {
        let pending = self.expectations.lock().unwrap().len();
        assert_eq!(pending, 0, "{} expected find_all call(s) never happened", pending);
    }
}

impl Default for MockAddonStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddonStorage for MockAddonStorage {
    async fn find_all(&self, scope: &AddonScope) -> Result<Vec<Addon>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (expected_scope, result) = self
            .expectations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected find_all call for scope {}", scope));
        assert_eq!(&expected_scope, scope, "find_all called with unexpected scope");
        result
    }
}

/// Storage whose lookup never completes; used to exercise cancellation.
pub struct PendingAddonStorage {
    calls: AtomicUsize,
}

impl PendingAddonStorage {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddonStorage for PendingAddonStorage {
    async fn find_all(&self, _scope: &AddonScope) -> Result<Vec<Addon>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending::<Result<Vec<Addon>, DomainError>>().await
    }
}

struct ConvertExpectation {
    addon: Addon,
    result: Result<Service, DomainError>,
    calls: usize,
}

/// Converter double: answers any number of calls for each expected addon.
pub struct MockAddonConverter {
    expectations: Mutex<Vec<ConvertExpectation>>,
}

impl MockAddonConverter {
    pub fn new() -> Self {
        Self {
            expectations: Mutex::new(Vec::new()),
        }
    }

    pub fn expect_convert(self, addon: Addon, result: Result<Service, DomainError>) -> Self {
        self.expectations.lock().unwrap().push(ConvertExpectation {
            addon,
            result,
            calls: 0,
        });
        self
    }

    pub fn calls(&self) -> usize {
        self.expectations.lock().unwrap().iter().map(|e| e.calls).sum()
    }

    pub fn assert_expectations(&self) {
        for exp in self.expectations.lock().unwrap().iter() {
            assert!(
                exp.calls > 0,
                "expected convert call for addon {} never happened",
                exp.addon.id
            );
        }
    }
}

impl Default for MockAddonConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl AddonConverter for MockAddonConverter {
    fn convert(&self, addon: &Addon) -> Result<Service, DomainError> {
        let mut expectations = self.expectations.lock().unwrap();
        let exp = expectations
            .iter_mut()
            .find(|e| &e.addon == addon)
            .unwrap_or_else(|| panic!("unexpected convert call for addon {}", addon.id));
        exp.calls += 1;
        exp.result.clone()
    }
}
