//! # Mock Catalog
//!
//! [`MockCatalog`] hands out a real [`CatalogClient`] whose mutations are
//! answered from a queue of scripted expectations instead of a running
//! [`CatalogActor`](crate::framework::CatalogActor). Reads are served from a
//! fixed catalog given at construction. Use it to test code that sits *around*
//! the client, such as the HTTP handlers, including failures that a real actor
//! never produces on demand (`ActorClosed`, `ActorDropped`, `IdsExhausted`).
//!
//! ## When to use Mocks vs the Real Actor
//!
//! | Feature | MockCatalog | CatalogActor |
//! |---------|-------------|--------------|
//! | **Reads** | A fixed catalog | The live catalog |
//! | **Mutations** | Scripted answers, nothing changes | Real validation and commit |
//! | **Error Injection** | Easy (`return_err`, [`MockCatalog::closed`]) | Only what the data allows |
//!
//! ## Example
//!
//! ```rust
//! use city_info::error::CatalogError;
//! use city_info::framework::{mock::MockCatalog, FrameworkError};
//! use city_info::model::{CityId, PointOfInterestDraft};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockCatalog::new();
//!     mock.expect_create().return_err(CatalogError::IdsExhausted);
//!
//!     let result = mock
//!         .client()
//!         .create_point_of_interest(CityId(1), PointOfInterestDraft::new("Park", None))
//!         .await;
//!     assert_eq!(result, Err(FrameworkError::Catalog(CatalogError::IdsExhausted)));
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next expectation panics the mock's task;
//! the waiting client then sees `ActorDropped`.

use crate::catalog::Catalog;
use crate::framework::message::{CatalogRequest, Response};
use crate::framework::{CatalogClient, FrameworkError};
use crate::model::{City, PointOfInterest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, RwLock};

type Answer<T> = Result<T, FrameworkError>;

/// A scripted answer for one request kind.
enum Expectation {
    Create(Answer<PointOfInterest>),
    Replace(Answer<PointOfInterest>),
    Patch(Answer<PointOfInterest>),
    Delete(Answer<()>),
}

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

/// A mock catalog with expectation tracking for fluent testing.
pub struct MockCatalog {
    client: CatalogClient,
    expectations: Queue,
    unexpected: Arc<Mutex<Vec<&'static str>>>,
    _handle: Option<tokio::task::JoinHandle<()>>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    /// Creates a new mock with no cities and no expectations. Must be called
    /// inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_cities(Vec::new())
    }

    /// Creates a mock whose reads answer from `cities`.
    pub fn with_cities(cities: Vec<City>) -> Self {
        let (sender, mut receiver) = mpsc::channel::<CatalogRequest>(100);
        let expectations: Queue = Arc::new(Mutex::new(VecDeque::new()));
        let unexpected = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let log = unexpected.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().expect("mock queue poisoned").pop_front();
                let name = request.name();
                if !answer(request, expectation) {
                    log.lock().expect("mock log poisoned").push(name);
                    panic!("Unexpected request or expectation mismatch: {name}");
                }
            }
        });

        Self {
            client: CatalogClient::new(sender, shared(cities)),
            expectations,
            unexpected,
            _handle: Some(handle),
        }
    }

    /// Creates a mock whose actor is already gone: every client call,
    /// read or mutation, fails with `ActorClosed`.
    pub fn closed() -> Self {
        let (sender, receiver) = mpsc::channel::<CatalogRequest>(1);
        drop(receiver);

        Self {
            client: CatalogClient::new(sender, shared(Vec::new())),
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            unexpected: Arc::new(Mutex::new(Vec::new())),
            _handle: None,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CatalogClient {
        self.client.clone()
    }

    pub fn expect_create(&self) -> ExpectationBuilder<PointOfInterest> {
        self.builder(Expectation::Create)
    }

    pub fn expect_replace(&self) -> ExpectationBuilder<PointOfInterest> {
        self.builder(Expectation::Replace)
    }

    pub fn expect_patch(&self) -> ExpectationBuilder<PointOfInterest> {
        self.builder(Expectation::Patch)
    }

    pub fn expect_delete(&self) -> ExpectationBuilder<()> {
        self.builder(Expectation::Delete)
    }

    fn builder<T>(&self, wrap: fn(Answer<T>) -> Expectation) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap,
        }
    }

    /// Requests that arrived without a matching expectation.
    pub fn unexpected(&self) -> Vec<&'static str> {
        self.unexpected.lock().expect("mock log poisoned").clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock queue poisoned").len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
        let unexpected = self.unexpected();
        if !unexpected.is_empty() {
            panic!("Unexpected requests: {unexpected:?}");
        }
    }
}

fn shared(cities: Vec<City>) -> Arc<RwLock<Catalog>> {
    Arc::new(RwLock::new(Catalog::new(cities)))
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<T> {
    expectations: Queue,
    wrap: fn(Answer<T>) -> Expectation,
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: impl Into<FrameworkError>) {
        self.push(Err(error.into()));
    }

    fn push(self, answer: Answer<T>) {
        self.expectations
            .lock()
            .expect("mock queue poisoned")
            .push_back((self.wrap)(answer));
    }
}

/// Answers `request` from `expectation`. Returns false on a mismatch, in which
/// case the request and its response channel are dropped unanswered.
fn answer(request: CatalogRequest, expectation: Option<Expectation>) -> bool {
    fn send<T>(respond_to: Response<T>, answer: Answer<T>) -> bool {
        let _ = respond_to.send(answer);
        true
    }

    match (request, expectation) {
        (CatalogRequest::CreatePointOfInterest { respond_to, .. }, Some(Expectation::Create(a))) => {
            send(respond_to, a)
        }
        (
            CatalogRequest::ReplacePointOfInterest { respond_to, .. },
            Some(Expectation::Replace(a)),
        ) => send(respond_to, a),
        (CatalogRequest::PatchPointOfInterest { respond_to, .. }, Some(Expectation::Patch(a))) => {
            send(respond_to, a)
        }
        (CatalogRequest::DeletePointOfInterest { respond_to, .. }, Some(Expectation::Delete(a))) => {
            send(respond_to, a)
        }
        _ => false,
    }
}
