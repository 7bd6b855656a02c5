/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::config::LitmusConfig;
use super::graphs::GraphStore;
use super::input::port_in_range;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Parser, Debug, Clone)]
#[command(name = "Litmus", display_name = "Litmus", bin_name = "litmus-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "LITMUS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "LITMUS_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "LITMUS_PORT", value_parser = port_in_range, default_value_t = 8000)]
    pub port: u16,
    #[arg(
        long,
        env = "LITMUS_SERVE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub serve_url: String,
    #[arg(long, env = "LITMUS_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "LITMUS_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "LITMUS_CONFIG_FILE")]
    pub config_file: Option<String>,
    #[arg(long, env = "LITMUS_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
    #[arg(long, env = "LITMUS_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub config: LitmusConfig,
    pub graph_store: Arc<dyn GraphStore>,
}

impl fmt::Debug for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerState")
            .field("db", &self.db)
            .field("cli", &self.cli)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Public fields of a settings row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SettingsFields {
    pub testcase: String,
    pub metric: String,
    pub warning: f64,
    pub error: f64,
}

impl From<MSettings> for SettingsFields {
    fn from(settings: MSettings) -> Self {
        Self {
            testcase: settings.testcase,
            metric: settings.metric,
            warning: settings.warning,
            error: settings.error,
        }
    }
}

pub type ESettings = settings::Entity;
pub type ETestResults = test_results::Entity;
pub type EValue = value::Entity;

pub type MSettings = settings::Model;
pub type MTestResults = test_results::Model;
pub type MValue = value::Model;

pub type ASettings = settings::ActiveModel;
pub type ATestResults = test_results::ActiveModel;
pub type AValue = value::ActiveModel;

pub type CSettings = settings::Column;
pub type CTestResults = test_results::Column;
pub type CValue = value::Column;
