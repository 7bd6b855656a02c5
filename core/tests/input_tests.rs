/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

use chrono::NaiveDate;
use litmus_core::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("http").unwrap_err();
    assert_eq!(port, "`http` is not a port number");
}

#[test]
fn test_gen_tag() {
    assert_eq!(gen_tag("2.0.1-170-rel"), "2.0.1");
    assert_eq!(gen_tag("2.0.0-1723-rel-enterprise"), "2.0.0");
    assert_eq!(gen_tag("1.8.1"), "1.8.1");
    assert_eq!(gen_tag("12345"), "12345");
    assert_eq!(gen_tag("abc"), "unknown");
    assert_eq!(gen_tag("abcd"), "unknown");
    assert_eq!(gen_tag(""), "unknown");
}

#[test]
fn test_parse_value() {
    assert_eq!(parse_value("610").unwrap(), Some(610.0));
    assert_eq!(parse_value(" 0.25 ").unwrap(), Some(0.25));
    assert_eq!(parse_value("").unwrap(), None);
    assert_eq!(parse_value("   ").unwrap(), None);
    assert_eq!(parse_value("fast").unwrap_err(), "invalid value: fast");
    assert_eq!(parse_value("1e308").unwrap(), Some(1e308));
    assert_eq!(parse_value("nan").unwrap_err(), "invalid value: nan");
    assert_eq!(parse_value(" inf ").unwrap_err(), "invalid value: inf");
    assert_eq!(parse_value("-infinity").unwrap_err(), "invalid value: -infinity");
}

#[test]
fn test_timestamp_format() {
    let timestamp = NaiveDate::from_ymd_opt(2012, 10, 16)
        .unwrap()
        .and_hms_opt(11, 10, 30)
        .unwrap();

    assert_eq!(format_timestamp(&timestamp), "2012-10-16 11:10:30");
    assert_eq!(parse_timestamp("2012-10-16 11:10:30").unwrap(), timestamp);
    assert!(parse_timestamp("2012-10-16").is_err());
}

#[test]
fn test_graph_key() {
    assert_eq!(
        graph_key("lucky6", "terra", "2.0.0-1723", "2.0.1-118"),
        "lucky6.loop, terra, 2.0.0-1723, 2.0.1-118"
    );
}

#[test]
fn test_graph_db_name() {
    assert_eq!(graph_db_name("mixed-litmus"), "mixed");
    assert_eq!(graph_db_name("reb-in-dgm-litmus"), "reb");
    assert_eq!(graph_db_name("lucky6"), "lucky6");
    assert_eq!(graph_db_name("-leading"), "");
}
