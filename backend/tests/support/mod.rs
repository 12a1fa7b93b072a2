//! Shared helpers for backend integration tests that need PostgreSQL.
//!
//! Database setup runs over blocking Diesel connections so tests can prepare
//! fixtures before handing the database to the async adapters.

use backend::domain::UserId;
use diesel::pg::PgConnection;
use diesel::sql_types::{BigInt, Text, Uuid as SqlUuid};
use diesel::{Connection, QueryableByName, RunQueryDsl};
use pg_embedded_setup_unpriv::TestCluster;

/// Returns true when `SKIP_TEST_CLUSTER` is `1`, `true` or `yes`.
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip when `SKIP_TEST_CLUSTER` is set, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

fn connect(url: &str) -> Result<PgConnection, String> {
    PgConnection::establish(url).map_err(|err| err.to_string())
}

/// Drop and recreate `name`, returning its connection URL.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let mut admin = connect(&cluster.connection().database_url("postgres"))?;
    diesel::sql_query(format!("DROP DATABASE IF EXISTS \"{name}\""))
        .execute(&mut admin)
        .map_err(|err| format!("drop database: {err}"))?;
    diesel::sql_query(format!("CREATE DATABASE \"{name}\""))
        .execute(&mut admin)
        .map_err(|err| format!("create database: {err}"))?;
    Ok(cluster.connection().database_url(name))
}

/// Insert `count` users and return their ids.
pub fn insert_users(url: &str, count: usize) -> Result<Vec<UserId>, String> {
    let mut conn = connect(url)?;
    (0..count)
        .map(|index| {
            let id = UserId::random();
            diesel::sql_query("INSERT INTO users (id, display_name) VALUES ($1, $2)")
                .bind::<SqlUuid, _>(*id.as_uuid())
                .bind::<Text, _>(format!("Host {index}"))
                .execute(&mut conn)
                .map_err(|err| format!("insert user: {err}"))?;
            Ok(id)
        })
        .collect()
}

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// Run a `SELECT COUNT(*) AS count ...` statement.
pub fn count_rows(url: &str, query: &str) -> Result<i64, String> {
    let mut conn = connect(url)?;
    diesel::sql_query(query)
        .get_result::<CountRow>(&mut conn)
        .map(|row| row.count)
        .map_err(|err| format!("count rows: {err}"))
}

/// Execute a raw statement, returning the database error text on failure.
pub fn execute(url: &str, statement: &str) -> Result<usize, String> {
    let mut conn = connect(url)?;
    diesel::sql_query(statement)
        .execute(&mut conn)
        .map_err(|err| err.to_string())
}
