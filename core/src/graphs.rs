/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::LitmusConfig;
use crate::input::{graph_db_name, graph_key};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum GraphStoreError {
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("malformed view row {id}: {reason}")]
    Malformed { id: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewRow {
    pub id: String,
    #[serde(default)]
    pub key: Value,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Deserialize)]
struct ViewResponse {
    rows: Vec<ViewRow>,
}

/// A `[timestamp, url]` pair pointing at a rendered graph attachment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLink(pub Value, pub String);

#[derive(Debug, Clone)]
pub struct GraphRequest {
    pub testcase: String,
    pub env: String,
    pub base: String,
    pub target: String,
}

/// Document database holding rendered comparison graphs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphStore: Send + Sync {
    async fn get_or_create_db(&self, name: &str) -> Result<(), GraphStoreError>;

    async fn view(
        &self,
        db: &str,
        view_path: &str,
        key: &str,
    ) -> Result<Vec<ViewRow>, GraphStoreError>;
}

pub struct CouchGraphStore {
    client: reqwest::Client,
    base_url: String,
}

impl CouchGraphStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn db_url(&self, db: &str) -> String {
        format!("{}/{}", self.base_url, db)
    }
}

#[async_trait]
impl GraphStore for CouchGraphStore {
    async fn get_or_create_db(&self, name: &str) -> Result<(), GraphStoreError> {
        let url = self.db_url(name);
        let res = self.client.get(&url).send().await?;

        match res.status() {
            s if s.is_success() => return Ok(()),
            StatusCode::NOT_FOUND => {}
            s => {
                return Err(GraphStoreError::Status {
                    status: s.as_u16(),
                    url,
                });
            }
        }

        tracing::info!("Creating graph database {}", name);
        let res = self.client.put(&url).send().await?;

        // 412: created concurrently by someone else
        match res.status() {
            s if s.is_success() || s == StatusCode::PRECONDITION_FAILED => Ok(()),
            s => Err(GraphStoreError::Status {
                status: s.as_u16(),
                url,
            }),
        }
    }

    async fn view(
        &self,
        db: &str,
        view_path: &str,
        key: &str,
    ) -> Result<Vec<ViewRow>, GraphStoreError> {
        let (design, view) = view_path
            .split_once('/')
            .ok_or_else(|| GraphStoreError::NotFound(view_path.to_string()))?;
        let url = format!("{}/_design/{}/_view/{}", self.db_url(db), design, view);
        let key = serde_json::to_string(key).unwrap_or_default();

        let res = self
            .client
            .get(&url)
            .query(&[("key", key.as_str())])
            .send()
            .await?;

        match res.status() {
            s if s.is_success() => Ok(res.json::<ViewResponse>().await?.rows),
            StatusCode::NOT_FOUND => Err(GraphStoreError::NotFound(url)),
            s => Err(GraphStoreError::Status {
                status: s.as_u16(),
                url,
            }),
        }
    }
}

fn graph_link(
    config: &LitmusConfig,
    db_name: &str,
    row: &ViewRow,
) -> Result<GraphLink, GraphStoreError> {
    let malformed = |reason: &str| GraphStoreError::Malformed {
        id: row.id.clone(),
        reason: reason.to_string(),
    };

    let time = row
        .value
        .get("_time")
        .cloned()
        .ok_or_else(|| malformed("missing _time"))?;

    let attachment = row
        .value
        .get("_attachments")
        .and_then(Value::as_object)
        .and_then(|attachments| attachments.keys().next())
        .ok_or_else(|| malformed("missing attachment"))?;

    let link = [
        config.graph_url.trim_end_matches('/'),
        db_name,
        row.id.as_str(),
        attachment.as_str(),
    ]
    .join("/");

    Ok(GraphLink(time, link))
}

pub async fn collect_graph_links(
    store: &dyn GraphStore,
    config: &LitmusConfig,
    request: &GraphRequest,
) -> Result<Vec<GraphLink>, GraphStoreError> {
    let db_name = graph_db_name(&request.testcase);
    store.get_or_create_db(db_name).await?;

    let key = graph_key(
        &request.testcase,
        &request.env,
        &request.base,
        &request.target,
    );

    store
        .view(db_name, &config.graph_view_path, &key)
        .await?
        .iter()
        .map(|row| graph_link(config, db_name, row))
        .collect()
}
