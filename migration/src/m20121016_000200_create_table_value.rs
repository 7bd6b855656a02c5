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
                    .table(Value::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Value::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Value::TestResults).integer().not_null())
                    .col(ColumnDef::new(Value::Value).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-value-test_results")
                            .from(Value::Table, Value::TestResults)
                            .to(TestResults::Table, TestResults::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Value::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Value {
    Table,
    Id,
    TestResults,
    Value,
}

#[derive(DeriveIden)]
enum TestResults {
    Table,
    Id,
}
