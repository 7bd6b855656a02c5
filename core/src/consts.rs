/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Rendering of `test_results.timestamp` on the wire and in filters.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const UNKNOWN_TAG: &str = "unknown";
pub const TAG_LENGTH: usize = 5;

pub const GRAPH_PHASE: &str = "loop";

pub const EMPTY_RESULT_SET: &str = "empty result set";

pub const DEFAULT_WARNING: f64 = 0.1;
pub const DEFAULT_ERROR: f64 = 0.3;
pub const DEFAULT_GRAPH_URL: &str = "http://perf-cabinet.hq.couchbase.com:5984";
pub const DEFAULT_GRAPH_VIEW_PATH: &str = "litmus/default";

pub const DEFAULT_BASELINE: [&str; 3] = [
    "2.0.1-170-rel-enterprise",
    "2.0.0-1976-rel-enterprise",
    "1.8.1-938-rel-enterprise",
];

pub const DEFAULT_KV_TESTS: [&str; 9] = [
    "mixed-litmus",
    "read-litmus",
    "write-litmus",
    "reb-in-litmus",
    "reb-out-litmus",
    "reb-swap-litmus",
    "reb-in-dgm-litmus",
    "reb-out-dgm-litmus",
    "reb-swap-dgm-litmus",
];

pub const DEFAULT_VIEW_TESTS: [&str; 8] = [
    "vperf-lnx",
    "vperf-win",
    "reb-vperf-10M-in",
    "reb-vperf-10M-out",
    "reb-vperf-10M-swap",
    "reb-vperf-60M-in",
    "reb-xperf-views",
    "reb-vperf-8M-in",
];

pub const DEFAULT_XDCR_TESTS: [&str; 3] = [
    "xperf-mixed-bi",
    "xperf-mixed-uni-2-nodes",
    "xperf-mixed-bi-2-nodes",
];
