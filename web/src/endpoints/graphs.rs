/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use crate::requests::FormData;
use axum::Json;
use axum::extract::{RawQuery, State};
use axum::response::{IntoResponse, Response};
use litmus_core::graphs::{GraphRequest, GraphStoreError, collect_graph_links};
use litmus_core::types::*;
use std::sync::Arc;

/// Graph links for a base/target build comparison. A missing view or
/// document yields a JSON empty string.
pub async fn get_graphs(
    State(state): State<Arc<ServerState>>,
    RawQuery(query): RawQuery,
) -> WebResult<Response> {
    let params = FormData::from_query(query);

    let request = GraphRequest {
        testcase: params.require("testcase")?,
        env: params.require("env")?,
        base: params.require("base")?,
        target: params.require("target")?,
    };

    match collect_graph_links(state.graph_store.as_ref(), &state.config, &request).await {
        Ok(links) => Ok(Json(links).into_response()),
        Err(GraphStoreError::NotFound(resource)) => {
            tracing::debug!("Graph resource not found: {}", resource);
            Ok(Json("").into_response())
        }
        Err(err) => Err(err.into()),
    }
}
