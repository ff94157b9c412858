//! # Collection Actor
//!
//! The `CollectionActor` is the server side of the store. It owns one collection of
//! documents and processes requests sequentially, so the map needs no lock.

use crate::client::CollectionClient;
use crate::document::{Document, StoredDocument};
use crate::error::StoreError;
use crate::message::CollectionRequest;
use crate::snapshot::Snapshot;
use crate::StoreConfig;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a collection of documents.
///
/// # Usage Pattern
///
/// 1. **Create**: `CollectionActor::new()` (in memory) or `CollectionActor::open()`
///    (restored from a snapshot) returns the actor and its client.
/// 2. **Run**: spawn `actor.run()` in a background task.
/// 3. **Use**: clone the client wherever the collection is needed.
///
/// The loop ends once every client has been dropped.
///
/// # Operations
///
/// * **Get**: clone of the document under the key, or `None`.
/// * **Set**: runs [`Document::on_write`], upserts, then persists the snapshot. If
///   persisting fails the previous value is put back and the error is returned.
/// * **Delete**: runs [`Document::on_delete`], removes, persists. Deleting a missing
///   key succeeds with `false`.
/// * **List**: every document, ascending by key.
pub struct CollectionActor<D: Document> {
    receiver: mpsc::Receiver<CollectionRequest<D>>,
    documents: BTreeMap<D::Key, D>,
    snapshot: Option<Snapshot>,
}

impl<D: Document> CollectionActor<D> {
    /// Creates an empty, in-memory collection actor and its client.
    ///
    /// `buffer_size` is the channel capacity; when it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<D>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            documents: BTreeMap::new(),
            snapshot: None,
        };
        (actor, CollectionClient::new(sender))
    }

    /// Creates a collection actor from a [`StoreConfig`], restoring the snapshot if one
    /// is configured.
    ///
    /// Every restored document goes through [`Document::on_write`], so a snapshot edited
    /// by hand cannot bring in a document the actor would refuse to store.
    pub async fn open(config: &StoreConfig) -> Result<(Self, CollectionClient<D>), StoreError> {
        let (mut actor, client) = Self::new(config.buffer_size);
        if let Some(path) = &config.snapshot {
            let snapshot = Snapshot::new(path);
            let mut documents = snapshot.load::<D>().await?;
            for (key, document) in documents.iter_mut() {
                if let Err(e) = document.on_write(key).await {
                    warn!(collection = D::COLLECTION, %key, error = %e, "Snapshot document rejected");
                    return Err(StoreError::Document(Box::new(e)));
                }
            }
            actor.documents = documents;
            actor.snapshot = Some(snapshot);
        }
        Ok((actor, client))
    }

    /// Number of documents currently held.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Runs the actor's event loop until the channel closes.
    pub async fn run(mut self) {
        let collection = D::COLLECTION;
        info!(collection, size = self.documents.len(), "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Get { key, respond_to } => {
                    let document = self.documents.get(&key).cloned();
                    debug!(collection, %key, found = document.is_some(), "Get");
                    let _ = respond_to.send(Ok(document));
                }
                CollectionRequest::Set {
                    key,
                    mut document,
                    respond_to,
                } => {
                    debug!(collection, %key, ?document, "Set");
                    if let Err(e) = document.on_write(&key).await {
                        warn!(collection, %key, error = %e, "on_write rejected document");
                        let _ = respond_to.send(Err(StoreError::Document(Box::new(e))));
                        continue;
                    }

                    let previous = self.documents.insert(key.clone(), document.clone());
                    if let Err(e) = self.persist().await {
                        warn!(collection, %key, error = %e, "Snapshot failed, write undone");
                        self.restore(key, previous);
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    info!(
                        collection,
                        %key,
                        created = previous.is_none(),
                        size = self.documents.len(),
                        "Stored"
                    );
                    let _ = respond_to.send(Ok(document));
                }
                CollectionRequest::Delete { key, respond_to } => {
                    let Some(document) = self.documents.get(&key) else {
                        debug!(collection, %key, "Delete of missing document");
                        let _ = respond_to.send(Ok(false));
                        continue;
                    };
                    if let Err(e) = document.on_delete(&key).await {
                        warn!(collection, %key, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(StoreError::Document(Box::new(e))));
                        continue;
                    }

                    let removed = self.documents.remove(&key);
                    if let Err(e) = self.persist().await {
                        warn!(collection, %key, error = %e, "Snapshot failed, delete undone");
                        self.restore(key, removed);
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    info!(collection, %key, size = self.documents.len(), "Deleted");
                    let _ = respond_to.send(Ok(true));
                }
                CollectionRequest::List { respond_to } => {
                    let documents: Vec<_> = self
                        .documents
                        .iter()
                        .map(|(key, data)| StoredDocument::new(key.clone(), data.clone()))
                        .collect();
                    debug!(collection, size = documents.len(), "List");
                    let _ = respond_to.send(Ok(documents));
                }
            }
        }

        info!(collection, size = self.documents.len(), "Shutdown");
    }

    async fn persist(&self) -> Result<(), StoreError> {
        match &self.snapshot {
            Some(snapshot) => snapshot.save::<D>(&self.documents).await,
            None => Ok(()),
        }
    }

    fn restore(&mut self, key: D::Key, previous: Option<D>) {
        match previous {
            Some(document) => {
                self.documents.insert(key, document);
            }
            None => {
                self.documents.remove(&key);
            }
        }
    }
}
