/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("empty database name")]
    EmptyName,
}

/// Destination for sampled documents. `server` and `bucket` narrow the
/// target below the cluster level.
#[async_trait]
pub trait Store: Send + Sync {
    async fn append(
        &self,
        data: &Value,
        cluster: &str,
        server: Option<&str>,
        bucket: Option<&str>,
    ) -> Result<(), StoreError>;
}
