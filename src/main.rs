/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;
use litmus_core::init_state;
use litmus_core::types::Cli;
use tracing_subscriber::EnvFilter;

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let _guard = match (&cli.sentry_dsn, cli.report_errors) {
        (Some(dsn), true) => {
            tracing::info!("Error reporting enabled");
            Some(sentry::init(dsn.as_str()))
        }
        _ => None,
    };

    let state = init_state(cli).await?;
    web::serve_web(state).await?;

    Ok(())
}
