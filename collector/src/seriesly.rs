/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::store::{Store, StoreError};
use async_trait::async_trait;
use serde_json::Value;

/// Minimal seriesly database API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SerieslyClient: Send + Sync {
    async fn list_dbs(&self) -> Result<Vec<String>, StoreError>;

    async fn create_db(&self, name: &str) -> Result<(), StoreError>;

    async fn append(&self, db: &str, data: &Value) -> Result<(), StoreError>;
}

pub struct HttpSerieslyClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSerieslyClient {
    pub fn new(host: &str) -> Self {
        let host = host.trim_end_matches('/');
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}:3133", host)
        };

        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SerieslyClient for HttpSerieslyClient {
    async fn list_dbs(&self) -> Result<Vec<String>, StoreError> {
        let dbs = self
            .client
            .get(format!("{}/_all_dbs", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<String>>()
            .await?;

        Ok(dbs)
    }

    async fn create_db(&self, name: &str) -> Result<(), StoreError> {
        self.client
            .put(format!("{}/{}", self.base_url, name))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn append(&self, db: &str, data: &Value) -> Result<(), StoreError> {
        self.client
            .post(format!("{}/{}", self.base_url, db))
            .json(data)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Database name for a sample: cluster, then bucket, then the server address
/// with its dots removed. Empty parts are skipped.
pub fn build_db_name(cluster: &str, server: Option<&str>, bucket: Option<&str>) -> String {
    let mut name = cluster.to_string();

    if let Some(bucket) = bucket.filter(|b| !b.is_empty()) {
        name.push_str(bucket);
    }

    if let Some(server) = server.filter(|s| !s.is_empty()) {
        name.extend(server.chars().filter(|c| *c != '.'));
    }

    name
}

pub struct SerieslyStore<C: SerieslyClient> {
    client: C,
}

impl<C: SerieslyClient> SerieslyStore<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

impl SerieslyStore<HttpSerieslyClient> {
    pub fn connect(host: &str) -> Self {
        Self::new(HttpSerieslyClient::new(host))
    }
}

#[async_trait]
impl<C: SerieslyClient> Store for SerieslyStore<C> {
    async fn append(
        &self,
        data: &Value,
        cluster: &str,
        server: Option<&str>,
        bucket: Option<&str>,
    ) -> Result<(), StoreError> {
        let db_name = build_db_name(cluster, server, bucket);
        if db_name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        if !self.client.list_dbs().await?.contains(&db_name) {
            tracing::info!("Creating seriesly database {}", db_name);
            self.client.create_db(&db_name).await?;
        }

        self.client.append(&db_name, data).await
    }
}
