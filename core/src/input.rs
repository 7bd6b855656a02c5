/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

/// Short version prefix of a build string, e.g. `2.0.1` for
/// `2.0.1-170-rel`. Builds of four characters or less map to `unknown`.
pub fn gen_tag(build: &str) -> String {
    if build.chars().count() >= TAG_LENGTH {
        build.chars().take(TAG_LENGTH).collect()
    } else {
        UNKNOWN_TAG.to_string()
    }
}

pub fn parse_value(s: &str) -> Result<Option<f64>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    match s.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(format!("invalid value: {}", s)),
    }
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|_| format!("invalid timestamp: {}", s))
}

pub fn graph_key(testcase: &str, env: &str, base: &str, target: &str) -> String {
    [
        format!("{}.{}", testcase, GRAPH_PHASE).as_str(),
        env,
        base,
        target,
    ]
    .join(", ")
}

/// Graph documents of a testcase live in a database named after the part of
/// the testcase before its first hyphen.
pub fn graph_db_name(testcase: &str) -> &str {
    testcase
        .split_once('-')
        .map_or(testcase, |(prefix, _)| prefix)
}
