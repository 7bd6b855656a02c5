/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_trait::async_trait;
use collector::{SerieslyClient, SerieslyStore, Store, StoreError};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-memory seriesly server.
#[derive(Default)]
struct MemorySeriesly {
    dbs: Mutex<BTreeMap<String, Vec<Value>>>,
}

impl MemorySeriesly {
    fn documents(&self, db: &str) -> Vec<Value> {
        self.dbs
            .lock()
            .unwrap()
            .get(db)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl SerieslyClient for MemorySeriesly {
    async fn list_dbs(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.dbs.lock().unwrap().keys().cloned().collect())
    }

    async fn create_db(&self, name: &str) -> Result<(), StoreError> {
        self.dbs.lock().unwrap().insert(name.to_string(), Vec::new());
        Ok(())
    }

    async fn append(&self, db: &str, data: &Value) -> Result<(), StoreError> {
        self.dbs
            .lock()
            .unwrap()
            .get_mut(db)
            .expect("append to missing database")
            .push(data.clone());
        Ok(())
    }
}

#[tokio::test]
async fn test_samples_accumulate_per_database() {
    let store = SerieslyStore::new(MemorySeriesly::default());
    let seriesly = store.client();

    store
        .append(&json!({"ops": 1}), "east", None, None)
        .await
        .unwrap();
    store
        .append(&json!({"ops": 2}), "east", None, None)
        .await
        .unwrap();
    store
        .append(&json!({"mem": 3}), "east", Some("10.0.0.1"), Some("default"))
        .await
        .unwrap();

    assert_eq!(seriesly.documents("east"), vec![json!({"ops": 1}), json!({"ops": 2})]);
    assert_eq!(seriesly.documents("eastdefault10001"), vec![json!({"mem": 3})]);
    assert_eq!(seriesly.dbs.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_store_as_trait_object() {
    let store = SerieslyStore::new(MemorySeriesly::default());
    let sink: &dyn Store = &store;

    sink.append(&json!({"latency": 0.25}), "west", Some(""), Some("bucket-1"))
        .await
        .unwrap();

    assert_eq!(store.client().documents("westbucket-1"), vec![json!({"latency": 0.25})]);
}
