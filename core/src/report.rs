/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Aggregation of result rows into the dashboard table.
//!
//! The table is a list of rows: a header `["Testcase", "Env", "Metric",
//! "Timestamp", <build>...]` followed by one row per `(testcase, env, metric)`
//! group with one cell per build column.

use crate::config::LitmusConfig;
use crate::input::{format_timestamp, parse_timestamp};
use crate::types::*;
use chrono::NaiveDateTime;
use sea_orm::ColumnTrait;
use sea_orm::sea_query::SimpleExpr;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub const REPORT_HEADER: [&str; 4] = ["Testcase", "Env", "Metric", "Timestamp"];
const SAMPLE_SEPARATOR: &str = " / ";
const FIELD_SEPARATOR: &str = "-&-";

pub type ReportTable = Vec<Vec<Value>>;

/// Which test group a report covers, selected by the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    Default,
    All,
    Experimental,
    Kv,
    View,
    Xdcr,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestSelection {
    All,
    Include(Vec<String>),
    Exclude(Vec<String>),
}

impl ReportType {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None => ReportType::Default,
            Some("all") => ReportType::All,
            Some("exp") => ReportType::Experimental,
            Some("kv") => ReportType::Kv,
            Some("view") => ReportType::View,
            Some("xdcr") => ReportType::Xdcr,
            Some(_) => ReportType::Production,
        }
    }

    pub fn selection(&self, config: &LitmusConfig) -> TestSelection {
        match self {
            ReportType::Default => TestSelection::Include(config.default_tests()),
            ReportType::All => TestSelection::All,
            ReportType::Experimental => TestSelection::Exclude(config.production_tests()),
            ReportType::Kv => TestSelection::Include(config.kv_tests.clone()),
            ReportType::View => TestSelection::Include(config.view_tests.clone()),
            ReportType::Xdcr => TestSelection::Include(config.xdcr_tests.clone()),
            ReportType::Production => TestSelection::Include(config.production_tests()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("unknown filter field: {0}")]
    UnknownField(String),
    #[error("{0}")]
    InvalidValue(String),
}

/// Exact-match condition on a result row field.
pub fn filter_expr(field: &str, value: &str) -> Result<SimpleExpr, FilterError> {
    let column = match field {
        "build" => CTestResults::Build,
        "testcase" => CTestResults::Testcase,
        "env" => CTestResults::Env,
        "metric" => CTestResults::Metric,
        "tag" => CTestResults::Tag,
        "comment" => CTestResults::Comment,
        "color" => CTestResults::Color,
        "timestamp" => {
            let timestamp = parse_timestamp(value).map_err(FilterError::InvalidValue)?;
            return Ok(CTestResults::Timestamp.eq(timestamp));
        }
        _ => return Err(FilterError::UnknownField(field.to_string())),
    };

    Ok(column.eq(value))
}

/// Distinct builds in descending order, then each baseline build found is
/// moved to the front in turn, so the last baseline present ends up first.
pub fn order_builds<I>(builds: I, baseline: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut ordered: Vec<String> = builds
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect();

    for build in baseline {
        if let Some(pos) = ordered.iter().position(|b| b == build) {
            let build = ordered.remove(pos);
            ordered.insert(0, build);
        }
    }

    ordered
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKey {
    pub testcase: String,
    pub env: String,
    pub metric: String,
}

#[derive(Debug, Default)]
struct Group {
    timestamp: Option<NaiveDateTime>,
    cells: HashMap<String, Value>,
}

fn average_cell(values: &[MValue]) -> Value {
    if values.is_empty() {
        return Value::from("");
    }

    // Running mean; a plain sum overflows for large samples.
    let mean = values
        .iter()
        .enumerate()
        .fold(0.0, |mean, (i, v)| mean + (v.value - mean) / (i + 1) as f64);
    Value::from(mean)
}

fn composite_cell(row: &MTestResults, values: &[MValue]) -> Value {
    let samples = values
        .iter()
        .map(|v| v.value.to_string())
        .collect::<Vec<_>>()
        .join(SAMPLE_SEPARATOR);

    Value::from(
        [samples.as_str(), row.color.as_str(), row.comment.as_str()].join(FIELD_SEPARATOR),
    )
}

/// Builds the report table from result rows (in insertion order) and their
/// samples.
pub fn build_report(
    rows: &[(MTestResults, Vec<MValue>)],
    baseline: &[String],
    average: bool,
) -> ReportTable {
    let builds = order_builds(rows.iter().map(|(row, _)| row.build.clone()), baseline);

    let mut groups: BTreeMap<GroupKey, Group> = BTreeMap::new();
    for (row, values) in rows {
        let group = groups
            .entry(GroupKey {
                testcase: row.testcase.clone(),
                env: row.env.clone(),
                metric: row.metric.clone(),
            })
            .or_default();

        group.timestamp = Some(row.timestamp);

        let cell = if average {
            average_cell(values)
        } else {
            composite_cell(row, values)
        };
        group.cells.insert(row.build.clone(), cell);
    }

    let header: Vec<Value> = REPORT_HEADER
        .iter()
        .map(|h| Value::from(*h))
        .chain(builds.iter().map(|b| Value::from(b.as_str())))
        .collect();

    let mut table = vec![header];
    for (key, mut group) in groups {
        let mut line = vec![
            Value::from(key.testcase),
            Value::from(key.env),
            Value::from(key.metric),
            Value::from(group.timestamp.map(|t| format_timestamp(&t)).unwrap_or_default()),
        ];
        line.extend(
            builds
                .iter()
                .map(|build| group.cells.remove(build).unwrap_or_else(|| Value::from(""))),
        );
        table.push(line);
    }

    table
}
