/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::{Local, SubsecRound};
use migration::Migrator;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{OnConflict, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::log::LevelFilter;

use super::config::LitmusConfig;
use super::input::gen_tag;
use super::report::TestSelection;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(20)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8));

    open_db(opt).await
}

/// Connects and brings the schema up to date.
pub async fn open_db(opt: ConnectOptions) -> Result<DatabaseConnection> {
    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

/// Natural key of a result row; the tag is derived from the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultKey {
    pub build: String,
    pub testcase: String,
    pub env: String,
    pub metric: String,
}

impl ResultKey {
    pub fn tag(&self) -> String {
        gen_tag(&self.build)
    }
}

/// Changes applied to a result row besides the timestamp. Blank comments and
/// colors leave the stored field untouched.
#[derive(Debug, Clone, Default)]
pub struct ResultUpdate {
    pub value: Option<f64>,
    pub comment: Option<String>,
    pub color: Option<String>,
}

async fn get_or_create_settings<C: ConnectionTrait>(
    db: &C,
    config: &LitmusConfig,
    testcase: &str,
    metric: &str,
) -> Result<MSettings, DbErr> {
    let find = || {
        ESettings::find()
            .filter(
                Condition::all()
                    .add(CSettings::Testcase.eq(testcase))
                    .add(CSettings::Metric.eq(metric)),
            )
            .one(db)
    };

    if let Some(settings) = find().await? {
        return Ok(settings);
    }

    let asettings = ASettings {
        testcase: Set(testcase.to_string()),
        metric: Set(metric.to_string()),
        warning: Set(config.warning),
        error: Set(config.error),
        ..Default::default()
    };

    ESettings::insert(asettings)
        .on_conflict(
            OnConflict::columns([CSettings::Testcase, CSettings::Metric])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    find()
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("settings {}/{}", testcase, metric)))
}

fn natural_key(key: &ResultKey) -> Condition {
    Condition::all()
        .add(CTestResults::Build.eq(key.build.as_str()))
        .add(CTestResults::Testcase.eq(key.testcase.as_str()))
        .add(CTestResults::Env.eq(key.env.as_str()))
        .add(CTestResults::Metric.eq(key.metric.as_str()))
        .add(CTestResults::Tag.eq(key.tag()))
}

async fn get_or_create_result<C: ConnectionTrait>(
    db: &C,
    key: &ResultKey,
    settings: &MSettings,
) -> Result<(MTestResults, bool), DbErr> {
    if let Some(result) = ETestResults::find().filter(natural_key(key)).one(db).await? {
        return Ok((result, false));
    }

    let aresult = ATestResults {
        build: Set(key.build.clone()),
        testcase: Set(key.testcase.clone()),
        env: Set(key.env.clone()),
        metric: Set(key.metric.clone()),
        tag: Set(key.tag()),
        settings: Set(settings.id),
        timestamp: Set(Local::now().naive_local().trunc_subsecs(0)),
        comment: Set(String::new()),
        color: Set(String::new()),
        ..Default::default()
    };

    let inserted = ETestResults::insert(aresult)
        .on_conflict(
            OnConflict::columns([
                CTestResults::Build,
                CTestResults::Testcase,
                CTestResults::Env,
                CTestResults::Metric,
                CTestResults::Tag,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    let result = ETestResults::find()
        .filter(natural_key(key))
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("test results {:?}", key)))?;

    Ok((result, inserted > 0))
}

/// Resolves or creates the settings and result rows for `key`, stamps the
/// result with the current local time and applies `update`. Returns whether
/// the result row was created.
pub async fn update_or_create(
    db: &DatabaseConnection,
    config: &LitmusConfig,
    key: &ResultKey,
    update: ResultUpdate,
) -> Result<bool, DbErr> {
    let txn = db.begin().await?;

    let settings = get_or_create_settings(&txn, config, &key.testcase, &key.metric).await?;
    let (result, created) = get_or_create_result(&txn, key, &settings).await?;
    let result_id = result.id;

    let mut aresult: ATestResults = result.into();
    aresult.timestamp = Set(Local::now().naive_local().trunc_subsecs(0));

    if let Some(comment) = update.comment.filter(|c| !c.is_empty()) {
        aresult.comment = Set(comment);
    }

    if let Some(color) = update.color.filter(|c| !c.is_empty()) {
        aresult.color = Set(color);
    }

    aresult.update(&txn).await?;

    if let Some(value) = update.value {
        let avalue = AValue {
            test_results: Set(result_id),
            value: Set(value),
            ..Default::default()
        };

        avalue.insert(&txn).await?;
    }

    txn.commit().await?;

    tracing::debug!(
        build = %key.build,
        testcase = %key.testcase,
        metric = %key.metric,
        created,
        "Stored test result"
    );

    Ok(created)
}

/// Result rows matching the selection and filters, in insertion order, each
/// paired with its samples in insertion order.
pub async fn get_results_with_values(
    db: &DatabaseConnection,
    selection: &TestSelection,
    filters: Vec<SimpleExpr>,
) -> Result<Vec<(MTestResults, Vec<MValue>)>, DbErr> {
    let mut condition = Condition::all();

    match selection {
        TestSelection::All => {}
        TestSelection::Include(tests) => {
            condition = condition.add(CTestResults::Testcase.is_in(tests.iter().cloned()));
        }
        TestSelection::Exclude(tests) => {
            condition = condition.add(CTestResults::Testcase.is_not_in(tests.iter().cloned()));
        }
    }

    for filter in filters {
        condition = condition.add(filter);
    }

    let results = ETestResults::find()
        .filter(condition)
        .order_by_asc(CTestResults::Id)
        .all(db)
        .await?;

    if results.is_empty() {
        return Ok(Vec::new());
    }

    let mut values: HashMap<i32, Vec<MValue>> = HashMap::new();
    for value in EValue::find()
        .filter(CValue::TestResults.is_in(results.iter().map(|r| r.id)))
        .order_by_asc(CValue::Id)
        .all(db)
        .await?
    {
        values.entry(value.test_results).or_default().push(value);
    }

    Ok(results
        .into_iter()
        .map(|result| {
            let samples = values.remove(&result.id).unwrap_or_default();
            (result, samples)
        })
        .collect())
}

pub async fn find_result(
    db: &DatabaseConnection,
    key: &ResultKey,
) -> Result<Option<MTestResults>, DbErr> {
    ETestResults::find()
        .filter(
            Condition::all()
                .add(CTestResults::Testcase.eq(key.testcase.as_str()))
                .add(CTestResults::Env.eq(key.env.as_str()))
                .add(CTestResults::Build.eq(key.build.as_str()))
                .add(CTestResults::Metric.eq(key.metric.as_str())),
        )
        .order_by_asc(CTestResults::Id)
        .one(db)
        .await
}

pub async fn get_all_settings(db: &DatabaseConnection) -> Result<Vec<MSettings>, DbErr> {
    ESettings::find()
        .order_by_asc(CSettings::Id)
        .all(db)
        .await
}

pub async fn find_settings(
    db: &DatabaseConnection,
    testcase: &str,
    metric: &str,
) -> Result<Option<MSettings>, DbErr> {
    ESettings::find()
        .filter(
            Condition::all()
                .add(CSettings::Testcase.eq(testcase))
                .add(CSettings::Metric.eq(metric)),
        )
        .one(db)
        .await
}

pub async fn get_tags(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    ETestResults::find()
        .select_only()
        .column(CTestResults::Tag)
        .distinct()
        .order_by_asc(CTestResults::Tag)
        .into_tuple::<String>()
        .all(db)
        .await
}
