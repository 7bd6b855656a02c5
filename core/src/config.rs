/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::consts::*;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

/// Dashboard configuration. Loaded once at startup and shared read-only with
/// every handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LitmusConfig {
    /// Builds pinned to the front of the report, in processing order.
    pub baseline: Vec<String>,
    pub warning: f64,
    pub error: f64,
    /// Average the samples of a result instead of listing them.
    pub average_results: bool,
    pub graph_url: String,
    pub graph_view_path: String,
    pub kv_tests: Vec<String>,
    pub view_tests: Vec<String>,
    pub xdcr_tests: Vec<String>,
    /// Defaults to kv + view + xdcr.
    pub production_tests: Option<Vec<String>>,
    /// Defaults to the kv group.
    pub default_tests: Option<Vec<String>>,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Validation error in field '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub is_valid: bool,
}

fn to_strings<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for LitmusConfig {
    fn default() -> Self {
        Self {
            baseline: to_strings(DEFAULT_BASELINE),
            warning: DEFAULT_WARNING,
            error: DEFAULT_ERROR,
            average_results: false,
            graph_url: DEFAULT_GRAPH_URL.to_string(),
            graph_view_path: DEFAULT_GRAPH_VIEW_PATH.to_string(),
            kv_tests: to_strings(DEFAULT_KV_TESTS),
            view_tests: to_strings(DEFAULT_VIEW_TESTS),
            xdcr_tests: to_strings(DEFAULT_XDCR_TESTS),
            production_tests: None,
            default_tests: None,
        }
    }
}

impl LitmusConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: LitmusConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        Ok(config)
    }

    pub fn production_tests(&self) -> Vec<String> {
        match &self.production_tests {
            Some(tests) => tests.clone(),
            None => self
                .kv_tests
                .iter()
                .chain(self.view_tests.iter())
                .chain(self.xdcr_tests.iter())
                .cloned()
                .collect(),
        }
    }

    pub fn default_tests(&self) -> Vec<String> {
        self.default_tests
            .clone()
            .unwrap_or_else(|| self.kv_tests.clone())
    }

    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        if self.warning < 0.0 {
            errors.push(ValidationError {
                field: "warning".to_string(),
                message: "Threshold must not be negative".to_string(),
            });
        }

        if self.error < 0.0 {
            errors.push(ValidationError {
                field: "error".to_string(),
                message: "Threshold must not be negative".to_string(),
            });
        }

        if self.warning > self.error {
            errors.push(ValidationError {
                field: "warning".to_string(),
                message: format!(
                    "Warning threshold {} exceeds error threshold {}",
                    self.warning, self.error
                ),
            });
        }

        let mut seen_baselines = HashSet::new();
        for build in &self.baseline {
            if build.trim().is_empty() {
                errors.push(ValidationError {
                    field: "baseline".to_string(),
                    message: "Baseline build must not be empty".to_string(),
                });
            } else if !seen_baselines.insert(build) {
                errors.push(ValidationError {
                    field: format!("baseline.{}", build),
                    message: "Duplicate baseline build found".to_string(),
                });
            }
        }

        if url::Url::parse(&self.graph_url).is_err() {
            errors.push(ValidationError {
                field: "graph_url".to_string(),
                message: format!("Invalid URL: {}", self.graph_url),
            });
        }

        match self.graph_view_path.split_once('/') {
            Some((design, view))
                if !design.is_empty() && !view.is_empty() && !view.contains('/') => {}
            _ => errors.push(ValidationError {
                field: "graph_view_path".to_string(),
                message: "View path must have the form <design>/<view>".to_string(),
            }),
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

pub fn load_config(config_file: Option<&str>) -> Result<LitmusConfig> {
    let config = match config_file {
        Some(path) => {
            tracing::info!("Loading litmus configuration from: {}", path);
            LitmusConfig::from_file(path)?
        }
        None => {
            tracing::info!("No config file configured, using built-in defaults");
            LitmusConfig::default()
        }
    };

    let validation = config.validate();
    if !validation.is_valid {
        let error_messages: Vec<String> = validation
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();

        anyhow::bail!(
            "Configuration validation failed:\n{}",
            error_messages.join("\n")
        );
    }

    Ok(config)
}
