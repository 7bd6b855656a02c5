/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use litmus_core::config::LitmusConfig;
use litmus_core::database::open_db;
use litmus_core::graphs::{GraphStore, GraphStoreError, ViewRow};
use litmus_core::types::*;
use sea_orm::ConnectOptions;
use std::sync::Arc;

/// Canned graph store answers.
#[derive(Debug, Clone)]
pub enum FakeGraphStore {
    Rows(Vec<ViewRow>),
    Missing,
    Unavailable,
}

#[async_trait]
impl GraphStore for FakeGraphStore {
    async fn get_or_create_db(&self, _name: &str) -> Result<(), GraphStoreError> {
        Ok(())
    }

    async fn view(
        &self,
        db: &str,
        _view_path: &str,
        _key: &str,
    ) -> Result<Vec<ViewRow>, GraphStoreError> {
        match self {
            FakeGraphStore::Rows(rows) => Ok(rows.clone()),
            FakeGraphStore::Missing => Err(GraphStoreError::NotFound(db.to_string())),
            FakeGraphStore::Unavailable => Err(GraphStoreError::Status {
                status: 503,
                url: format!("http://graphs:5984/{}", db),
            }),
        }
    }
}

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("sqlite::memory:".to_string()),
        database_url_file: None,
        config_file: None,
        report_errors: false,
        sentry_dsn: None,
    }
}

pub async fn create_state(config: LitmusConfig, graphs: FakeGraphStore) -> Arc<ServerState> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = open_db(opt).await.expect("Failed to open in-memory database");

    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
        config,
        graph_store: Arc::new(graphs),
    })
}

pub async fn create_server() -> TestServer {
    create_server_with(LitmusConfig::default(), FakeGraphStore::Missing).await
}

pub async fn create_server_with(config: LitmusConfig, graphs: FakeGraphStore) -> TestServer {
    let state = create_state(config, graphs).await;
    TestServer::new(web::create_router(state)).expect("Failed to create test server")
}
