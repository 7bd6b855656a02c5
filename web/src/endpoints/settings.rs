/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use crate::requests::FormData;
use axum::Json;
use axum::extract::{RawQuery, State};
use litmus_core::database::{find_settings, get_all_settings, get_tags as get_distinct_tags};
use litmus_core::types::*;
use std::sync::Arc;

/// All settings rows for an empty query or `?all`, otherwise the single row
/// for `testcase` and `metric`.
pub async fn get_settings(
    State(state): State<Arc<ServerState>>,
    RawQuery(query): RawQuery,
) -> WebResult<Json<Vec<SettingsFields>>> {
    let params = FormData::from_query(query);

    if params.is_empty() || params.contains("all") {
        let settings = get_all_settings(&state.db).await?;
        return Ok(Json(settings.into_iter().map(SettingsFields::from).collect()));
    }

    let testcase = params.require("testcase")?;
    let metric = params.require("metric")?;

    let settings = find_settings(&state.db, &testcase, &metric)
        .await?
        .ok_or_else(WebError::empty_result_set)?;

    Ok(Json(vec![SettingsFields::from(settings)]))
}

pub async fn get_tags(State(state): State<Arc<ServerState>>) -> WebResult<Json<Vec<String>>> {
    Ok(Json(get_distinct_tags(&state.db).await?))
}
