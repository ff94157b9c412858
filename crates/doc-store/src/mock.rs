//! # Mock Collection & Testing Guide
//!
//! `MockCollection<D>` hands out a real [`CollectionClient<D>`] whose requests are
//! answered from a queue of expectations instead of a collection actor. It is meant for
//! unit-testing the logic that sits *around* a client (read-then-write sequences, error
//! mapping) without spawning the actor.
//!
//! | | MockCollection | Real actor |
//! |---|---|---|
//! | **State** | none, answers are scripted | real documents |
//! | **Order of calls** | asserted | not checked |
//! | **Error injection** | `return_err` | hard |
//!
//! ## Fluent API
//!
//! ```rust
//! use doc_store::mock::MockCollection;
//! use doc_store::{Document, StoreError};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Note { text: String }
//!
//! impl Document for Note {
//!     type Key = String;
//!     type Error = std::io::Error;
//!     const COLLECTION: &'static str = "notes";
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockCollection::<Note>::new();
//!     mock.expect_get("a".to_string())
//!         .return_ok(Some(Note { text: "hello".into() }));
//!     mock.expect_list().return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     let note = client.get("a".to_string()).await.unwrap();
//!     assert_eq!(note.unwrap().text, "hello");
//!     assert!(client.list().await.is_err());
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Raw Receiver
//!
//! [`create_mock_client`] returns the client and the receiving end of its channel. The
//! `expect_*` helpers pull the next request off the receiver and hand back its payload
//! and responder, so a test can inspect exactly what was sent before answering.

use crate::client::CollectionClient;
use crate::document::{Document, StoredDocument};
use crate::error::StoreError;
use crate::message::{CollectionRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<D: Document> {
    Get {
        key: D::Key,
        response: Result<Option<D>, StoreError>,
    },
    Set {
        key: D::Key,
        response: Result<D, StoreError>,
    },
    Delete {
        key: D::Key,
        response: Result<bool, StoreError>,
    },
    List {
        response: Result<Vec<StoredDocument<D>>, StoreError>,
    },
}

type Expectations<D> = Arc<Mutex<VecDeque<Expectation<D>>>>;

/// A scripted collection for fluent testing.
///
/// Requests must arrive in the order the expectations were registered, for the keys
/// they were registered with; anything else panics the background task, which the
/// caller sees as [`StoreError::ActorDropped`].
pub struct MockCollection<D: Document> {
    client: CollectionClient<D>,
    expectations: Expectations<D>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<D: Document> Default for MockCollection<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> MockCollection<D> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<D>>(100);
        let expectations: Expectations<D> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        CollectionRequest::Get { key, respond_to },
                        Some(Expectation::Get {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "Get for unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Set {
                            key,
                            document: _,
                            respond_to,
                        },
                        Some(Expectation::Set {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "Set for unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Delete { key, respond_to },
                        Some(Expectation::Delete {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "Delete for unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (CollectionRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {:?}", request);
                    }
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CollectionClient<D> {
        self.client.clone()
    }

    /// Expects a `get` for `key`.
    pub fn expect_get(&mut self, key: D::Key) -> ExpectationBuilder<D, Option<D>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { key, response }
        })
    }

    /// Expects a `set` for `key`.
    pub fn expect_set(&mut self, key: D::Key) -> ExpectationBuilder<D, D> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Set { key, response }
        })
    }

    /// Expects a `delete` for `key`.
    pub fn expect_delete(&mut self, key: D::Key) -> ExpectationBuilder<D, bool> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Delete { key, response }
        })
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ExpectationBuilder<D, Vec<StoredDocument<D>>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<D: Document, T> {
    expectations: Expectations<D>,
    make: Box<dyn FnOnce(Result<T, StoreError>) -> Expectation<D> + Send>,
}

impl<D: Document, T: 'static> ExpectationBuilder<D, T> {
    fn new(
        expectations: Expectations<D>,
        make: impl FnOnce(Result<T, StoreError>) -> Expectation<D> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Answers the request successfully.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Answers the request with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<D: Document>(
    buffer_size: usize,
) -> (CollectionClient<D>, mpsc::Receiver<CollectionRequest<D>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Returns the key and responder if the next message is a Get request.
pub async fn expect_get<D: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<D>>,
) -> Option<(D::Key, Response<Option<D>>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Get { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Returns the key, document and responder if the next message is a Set request.
pub async fn expect_set<D: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<D>>,
) -> Option<(D::Key, D, Response<D>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Set {
            key,
            document,
            respond_to,
        }) => Some((key, document, respond_to)),
        _ => None,
    }
}

/// Returns the key and responder if the next message is a Delete request.
pub async fn expect_delete<D: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<D>>,
) -> Option<(D::Key, Response<bool>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Delete { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Returns the responder if the next message is a List request.
pub async fn expect_list<D: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<D>>,
) -> Option<Response<Vec<StoredDocument<D>>>> {
    match receiver.recv().await {
        Some(CollectionRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}
