/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod config;
pub mod consts;
pub mod database;
pub mod graphs;
pub mod input;
pub mod report;
pub mod types;

use anyhow::Result;
use config::load_config;
use database::connect_db;
use graphs::CouchGraphStore;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting Litmus Server on {}:{}", cli.ip, cli.port);

    let config = load_config(cli.config_file.as_deref())?;
    let db = connect_db(&cli).await?;
    let graph_store = Arc::new(CouchGraphStore::new(&config.graph_url));

    Ok(Arc::new(ServerState {
        db,
        cli,
        config,
        graph_store,
    }))
}
