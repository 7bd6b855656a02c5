/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use url::form_urlencoded;

/// Decoded `application/x-www-form-urlencoded` pairs, in request order.
/// Used for both POST bodies and query strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn parse(input: &[u8]) -> Self {
        Self {
            pairs: form_urlencoded::parse(input).into_owned().collect(),
        }
    }

    pub fn from_query(query: Option<String>) -> Self {
        query
            .map(|q| Self::parse(q.as_bytes()))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Last value given for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_list(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Distinct keys in order of first appearance.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for (k, _) in &self.pairs {
            if !keys.contains(&k.as_str()) {
                keys.push(k.as_str());
            }
        }
        keys
    }

    /// Trimmed value of a required field.
    pub fn require(&self, field: &str) -> WebResult<String> {
        self.get(field)
            .map(|v| v.trim().to_string())
            .ok_or_else(|| WebError::missing(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_keys_are_kept_in_order() {
        let form = FormData::parse(
            b"build=2.0.1-118&metric=Get+Delay%2C+ms&value=222&metric=Throughput&value=8793",
        );

        assert_eq!(form.get_list("metric"), vec!["Get Delay, ms", "Throughput"]);
        assert_eq!(form.get_list("value"), vec!["222", "8793"]);
        assert_eq!(form.get("metric"), Some("Throughput"));
        assert_eq!(form.keys(), vec!["build", "metric", "value"]);
    }

    #[test]
    fn test_require_trims_and_reports_missing_field() {
        let form = FormData::parse(b"testcase=+lucky6+&env=");

        assert_eq!(form.require("testcase").unwrap(), "lucky6");
        assert_eq!(form.require("env").unwrap(), "");
        assert_eq!(form.require("build").unwrap_err().to_string(), "build");
    }

    #[test]
    fn test_from_query() {
        assert!(FormData::from_query(None).is_empty());

        let form = FormData::from_query(Some("all".to_string()));
        assert!(form.contains("all"));
        assert_eq!(form.get("all"), Some(""));
    }
}
