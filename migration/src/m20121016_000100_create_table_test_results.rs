/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestResults::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestResults::Build).string().not_null())
                    .col(ColumnDef::new(TestResults::Testcase).string().not_null())
                    .col(ColumnDef::new(TestResults::Env).string().not_null())
                    .col(ColumnDef::new(TestResults::Metric).string().not_null())
                    .col(ColumnDef::new(TestResults::Tag).string().not_null())
                    .col(ColumnDef::new(TestResults::Settings).integer().not_null())
                    .col(
                        ColumnDef::new(TestResults::Timestamp)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestResults::Comment)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(TestResults::Color)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-test_results-settings")
                            .from(TestResults::Table, TestResults::Settings)
                            .to(Settings::Table, Settings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Natural key of a result row; ingest relies on it for get-or-create.
        manager
            .create_index(
                Index::create()
                    .name("idx-test_results-natural-key")
                    .table(TestResults::Table)
                    .col(TestResults::Build)
                    .col(TestResults::Testcase)
                    .col(TestResults::Env)
                    .col(TestResults::Metric)
                    .col(TestResults::Tag)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-test_results-testcase")
                    .table(TestResults::Table)
                    .col(TestResults::Testcase)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestResults::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TestResults {
    Table,
    Id,
    Build,
    Testcase,
    Env,
    Metric,
    Tag,
    Settings,
    Timestamp,
    Comment,
    Color,
}

#[derive(DeriveIden)]
enum Settings {
    Table,
    Id,
}
