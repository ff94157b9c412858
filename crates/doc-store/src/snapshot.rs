//! # Snapshot Persistence
//!
//! A collection can be made durable by pointing it at a JSON snapshot file. The whole
//! collection is rewritten after every successful write, which is fine for the small
//! collections this store is meant for.
//!
//! ```text
//! {
//!   "collection": "inventory",
//!   "documents": {
//!     "apple": { "quantity": 3 }
//!   }
//! }
//! ```

use crate::document::Document;
use crate::error::StoreError;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize)]
struct SnapshotFile<K, D> {
    collection: String,
    documents: Entries<K, D>,
}

/// The `documents` map in file order, duplicates included.
///
/// Keys may normalize while deserializing (`" x "` and `"x"` can decode to the same
/// key), so collapsing into a map here would hide a conflict.
struct Entries<K, D>(Vec<(K, D)>);

impl<'de, K: Deserialize<'de>, D: Deserialize<'de>> Deserialize<'de> for Entries<K, D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        struct EntriesVisitor<K, D>(PhantomData<(K, D)>);

        impl<'de, K: Deserialize<'de>, D: Deserialize<'de>> Visitor<'de> for EntriesVisitor<K, D> {
            type Value = Entries<K, D>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of documents")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Serialize)]
struct SnapshotRef<'a, K: Ord, D> {
    collection: &'a str,
    documents: &'a BTreeMap<K, D>,
}

/// A JSON file holding one collection.
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the collection back. A missing file is an empty collection.
    pub async fn load<D: Document>(&self) -> Result<BTreeMap<D::Key, D>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot yet");
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        let file: SnapshotFile<D::Key, D> = serde_json::from_slice(&bytes)?;
        if file.collection != D::COLLECTION {
            return Err(StoreError::CollectionMismatch {
                expected: D::COLLECTION.to_string(),
                found: file.collection,
            });
        }
        let mut documents = BTreeMap::new();
        for (key, document) in file.documents.0 {
            match documents.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(StoreError::DuplicateKey {
                        key: entry.key().to_string(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(document);
                }
            }
        }
        debug!(path = %self.path.display(), size = documents.len(), "Snapshot loaded");
        Ok(documents)
    }

    /// Writes the collection to a sibling temp file and renames it over the snapshot.
    pub async fn save<D: Document>(
        &self,
        documents: &BTreeMap<D::Key, D>,
    ) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(&SnapshotRef {
            collection: D::COLLECTION,
            documents,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let temp = self.temp_path();
        tokio::fs::write(&temp, body).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
