/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod annotations;
pub mod graphs;
pub mod results;
pub mod settings;

use crate::error::{WebError, WebResult};

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<String> {
    Ok("200 ALIVE".to_string())
}
