/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use crate::requests::FormData;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use litmus_core::database::{ResultKey, ResultUpdate, get_results_with_values, update_or_create};
use litmus_core::input::parse_value;
use litmus_core::report::{ReportTable, ReportType, build_report, filter_expr};
use litmus_core::types::*;
use std::sync::Arc;

/// Stores one sample per `metric`/`value` pair. The response reflects only
/// the last pair processed.
pub async fn post_results(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> WebResult<String> {
    let form = FormData::parse(&body);

    let build = form.require("build")?;
    let testcase = form.require("testcase")?;
    let env = form.require("env")?;

    let metrics = form.get_list("metric");
    if metrics.is_empty() {
        return Err(WebError::missing("metric"));
    }

    let values = form.get_list("value");
    if values.is_empty() {
        return Err(WebError::missing("value"));
    }

    // Parse everything up front so a bad value leaves the database untouched.
    let samples = metrics
        .into_iter()
        .zip(values)
        .map(|(metric, value)| {
            parse_value(value)
                .map(|value| (metric.to_string(), value))
                .map_err(WebError::BadRequest)
        })
        .collect::<WebResult<Vec<_>>>()?;

    let mut created = false;
    for (metric, value) in samples {
        let key = ResultKey {
            build: build.clone(),
            testcase: testcase.clone(),
            env: env.clone(),
            metric,
        };

        created = update_or_create(
            &state.db,
            &state.config,
            &key,
            ResultUpdate {
                value,
                ..Default::default()
            },
        )
        .await?;
    }

    Ok(if created { "Created" } else { "Updated" }.to_string())
}

pub async fn get_report(
    State(state): State<Arc<ServerState>>,
    RawQuery(query): RawQuery,
) -> WebResult<Json<ReportTable>> {
    let params = FormData::from_query(query);

    let selection = ReportType::from_param(params.get("type")).selection(&state.config);

    let mut filters = Vec::new();
    for field in params.keys().into_iter().filter(|k| *k != "type") {
        let value = params.get(field).unwrap_or_default();
        filters.push(filter_expr(field, value)?);
    }

    let rows = get_results_with_values(&state.db, &selection, filters).await?;

    Ok(Json(build_report(
        &rows,
        &state.config.baseline,
        state.config.average_results,
    )))
}
