// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Generic file-backed persistence for cachable entities.
//!
//! [`FileCache`] is parameterized over the entity type through two
//! capability traits: [`JsonCached`] (full-collection JSON files) and
//! [`CsvCached`] (one line per entity). [`Task`] implements both.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use uuid::Uuid;

use tusk_model::Task;

/// Local persistence failure.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Reading or writing the cache file failed.
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding the JSON collection failed.
    #[error("cache encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An entity that can live in a JSON collection file.
pub trait JsonCached: Serialize + DeserializeOwned {
    /// The entity's stable identifier within the cache.
    fn cache_id(&self) -> Uuid;
}

/// An entity that can live in a CSV file, one line each.
pub trait CsvCached: Sized {
    /// Encodes the entity as a single CSV line.
    fn to_csv(&self) -> String;

    /// Decodes a single CSV line; `None` if the line is malformed.
    fn from_csv(line: &str) -> Option<Self>;
}

impl JsonCached for Task {
    fn cache_id(&self) -> Uuid {
        self.id
    }
}

impl CsvCached for Task {
    fn to_csv(&self) -> String {
        Task::to_csv(self)
    }

    fn from_csv(line: &str) -> Option<Self> {
        Task::from_csv(line)
    }
}

/// In-memory id-to-entity collection with file persistence.
#[derive(Debug, Clone)]
pub struct FileCache<T> {
    items: HashMap<Uuid, T>,
}

impl<T: JsonCached> FileCache<T> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Adds or replaces an entity, keyed by its cache id.
    pub fn insert(&mut self, item: T) {
        self.items.insert(item.cache_id(), item);
    }

    /// Removes an entity by id, returning it if it was present.
    pub fn remove(&mut self, id: &Uuid) -> Option<T> {
        self.items.remove(id)
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<&T> {
        self.items.get(id)
    }

    /// Iterates over all entities, in no particular order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Number of cached entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Writes the whole collection to a pretty-printed JSON file.
    pub async fn save_json(&self, path: &Path) -> Result<(), CacheError> {
        let items: Vec<&T> = self.items.values().collect();
        let data = serde_json::to_vec_pretty(&items)?;
        fs::write(path, data).await?;
        tracing::debug!(path = %path.display(), count = self.items.len(), "cache saved");
        Ok(())
    }

    /// Replaces the collection with the contents of a JSON file.
    pub async fn load_json(&mut self, path: &Path) -> Result<(), CacheError> {
        let content = fs::read(path).await?;
        let items: Vec<T> = serde_json::from_slice(&content)?;
        self.items = items.into_iter().map(|i| (i.cache_id(), i)).collect();
        tracing::debug!(path = %path.display(), count = self.items.len(), "cache loaded");
        Ok(())
    }
}

impl<T: JsonCached + CsvCached> FileCache<T> {
    /// Writes the whole collection to a CSV file, one line per entity.
    pub async fn save_csv(&self, path: &Path) -> Result<(), CacheError> {
        let mut lines: Vec<String> = self.items.values().map(CsvCached::to_csv).collect();
        lines.push(String::new()); // trailing newline
        fs::write(path, lines.join("\n")).await?;
        tracing::debug!(path = %path.display(), count = self.items.len(), "cache saved");
        Ok(())
    }

    /// Replaces the collection with the contents of a CSV file.
    ///
    /// Malformed lines are skipped.
    pub async fn load_csv(&mut self, path: &Path) -> Result<(), CacheError> {
        let content = fs::read_to_string(path).await?;
        self.items = content
            .lines()
            .filter_map(T::from_csv)
            .map(|i| (i.cache_id(), i))
            .collect();
        tracing::debug!(path = %path.display(), count = self.items.len(), "cache loaded");
        Ok(())
    }
}

impl<T: JsonCached> Default for FileCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
