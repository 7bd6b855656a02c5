/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use crate::requests::FormData;
use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use litmus_core::database::{ResultKey, ResultUpdate, find_result, update_or_create};
use litmus_core::types::*;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Annotation {
    Comment,
    Color,
}

impl Annotation {
    fn field(&self) -> &'static str {
        match self {
            Annotation::Comment => "comment",
            Annotation::Color => "color",
        }
    }
}

fn result_key(form: &FormData) -> WebResult<ResultKey> {
    let testcase = form.require("testcase")?;
    let env = form.require("env")?;
    let build = form.require("build")?;
    let metric = form.require("metric")?;

    Ok(ResultKey {
        build,
        testcase,
        env,
        metric,
    })
}

async fn post_annotation(
    state: &ServerState,
    body: &[u8],
    annotation: Annotation,
) -> WebResult<String> {
    let form = FormData::parse(body);
    let key = result_key(&form)?;
    let text = form.require(annotation.field())?;

    let update = match annotation {
        Annotation::Comment => ResultUpdate {
            comment: Some(text.clone()),
            ..Default::default()
        },
        Annotation::Color => ResultUpdate {
            color: Some(text.clone()),
            ..Default::default()
        },
    };

    update_or_create(&state.db, &state.config, &key, update).await?;

    Ok(text)
}

async fn get_annotation(
    state: &ServerState,
    query: Option<String>,
    annotation: Annotation,
) -> WebResult<String> {
    let form = FormData::from_query(query);
    let key = result_key(&form)?;

    let result = find_result(&state.db, &key)
        .await?
        .ok_or_else(WebError::empty_result_set)?;

    Ok(match annotation {
        Annotation::Comment => result.comment,
        Annotation::Color => result.color,
    })
}

pub async fn post_comment(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> WebResult<String> {
    post_annotation(&state, &body, Annotation::Comment).await
}

pub async fn get_comment(
    State(state): State<Arc<ServerState>>,
    RawQuery(query): RawQuery,
) -> WebResult<String> {
    get_annotation(&state, query, Annotation::Comment).await
}

pub async fn post_color(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> WebResult<String> {
    post_annotation(&state, &body, Annotation::Color).await
}

pub async fn get_color(
    State(state): State<Arc<ServerState>>,
    RawQuery(query): RawQuery,
) -> WebResult<String> {
    get_annotation(&state, query, Annotation::Color).await
}
