/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20121016_000000_create_table_settings;
mod m20121016_000100_create_table_test_results;
mod m20121016_000200_create_table_value;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20121016_000000_create_table_settings::Migration),
            Box::new(m20121016_000100_create_table_test_results::Migration),
            Box::new(m20121016_000200_create_table_value::Migration),
        ]
    }
}
