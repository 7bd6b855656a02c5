/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Sinks for samples gathered by cluster agents.

pub mod seriesly;
pub mod store;

pub use seriesly::{HttpSerieslyClient, SerieslyClient, SerieslyStore};
pub use store::{Store, StoreError};
