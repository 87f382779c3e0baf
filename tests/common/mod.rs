#![allow(dead_code)]
use std::path::PathBuf;
use database_helper::database::enums::sql_value::SqlValue;
use database_helper::database::errors::DatabaseError;
use database_helper::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use database_helper::database::traits::database_backend::DatabaseBackend;
use tempfile::TempDir;

pub const LEAGUE_TABLE: &str = "epl_03_04";

pub const LEAGUE_COLUMNS: [&str; 10] = ["Pos", "Team", "Pld", "W", "D", "L", "GF", "GA", "GD", "Pts"];

// Pos, Team, Pld, W, D, L, GF, GA, GD, Pts
pub const LEAGUE: [(i64, &str, i64, i64, i64, i64, i64, i64, i64, i64); 20] = [
    (1, "Arsenal", 38, 26, 12, 0, 73, 26, 47, 90),
    (2, "Chelsea", 38, 24, 7, 7, 67, 30, 37, 79),
    (3, "Manchester United", 38, 23, 6, 9, 64, 35, 29, 75),
    (4, "Liverpool", 38, 16, 12, 10, 55, 37, 18, 60),
    (5, "Newcastle", 38, 13, 17, 8, 52, 40, 12, 56),
    (6, "Aston Villa", 38, 15, 11, 12, 48, 44, 4, 56),
    (7, "Charlton", 38, 14, 11, 13, 51, 51, 0, 53),
    (8, "Bolton", 38, 14, 11, 13, 48, 56, -8, 53),
    (9, "Fulham", 38, 14, 10, 14, 52, 46, 6, 52),
    (10, "Birmingham", 38, 12, 14, 12, 43, 48, -5, 50),
    (11, "Middlesbrough", 38, 13, 9, 16, 44, 52, -8, 48),
    (12, "Southampton", 38, 12, 11, 15, 44, 45, -1, 47),
    (13, "Portsmouth", 38, 12, 9, 17, 47, 54, -7, 45),
    (14, "Tottenham", 38, 13, 6, 19, 47, 57, -10, 45),
    (15, "Blackburn Rovers", 38, 12, 8, 18, 51, 59, -8, 44),
    (16, "Manchester City", 38, 9, 14, 15, 55, 54, 1, 41),
    (17, "Everton", 38, 9, 12, 17, 45, 57, -12, 39),
    (18, "Leicester City", 38, 6, 15, 17, 48, 65, -17, 33),
    (19, "Leeds United", 38, 8, 9, 21, 40, 79, -39, 33),
    (20, "Wolves", 38, 7, 12, 19, 38, 77, -39, 33),
];

pub const LEAGUE_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS epl_03_04 (
    Pos INTEGER NOT NULL,
    Team TEXT NOT NULL,
    Pld INTEGER NOT NULL,
    W INTEGER NOT NULL,
    D INTEGER NOT NULL,
    L INTEGER NOT NULL,
    GF INTEGER NOT NULL,
    GA INTEGER NOT NULL,
    GD INTEGER NOT NULL,
    Pts INTEGER NOT NULL)";

/// A connector on a database file inside a fresh temporary directory. The
/// directory lives as long as the returned guard.
pub fn create_temp_sqlite() -> (TempDir, DatabaseConnectorSQLite) {
    let temp_dir = TempDir::new().unwrap();
    let connector = DatabaseConnectorSQLite::new(temp_dir.path().join("example.db"));
    (temp_dir, connector)
}

pub fn missing_directory_path() -> PathBuf {
    std::env::temp_dir()
        .join("database-helper-missing-directory")
        .join("nested")
        .join("example.db")
}

pub fn team_details(team: &(i64, &str, i64, i64, i64, i64, i64, i64, i64, i64)) -> Vec<(&'static str, SqlValue)> {
    let (pos, name, pld, w, d, l, gf, ga, gd, pts) = *team;
    vec![
        ("Pos", SqlValue::from(pos)),
        ("Team", SqlValue::from(name)),
        ("Pld", SqlValue::from(pld)),
        ("W", SqlValue::from(w)),
        ("D", SqlValue::from(d)),
        ("L", SqlValue::from(l)),
        ("GF", SqlValue::from(gf)),
        ("GA", SqlValue::from(ga)),
        ("GD", SqlValue::from(gd)),
        ("Pts", SqlValue::from(pts)),
    ]
}

pub async fn populate_league(database: &dyn DatabaseBackend) -> Result<(), DatabaseError> {
    database.execute_sql(LEAGUE_SCHEMA, &[]).await?;
    for team in LEAGUE.iter() {
        database.insert(LEAGUE_TABLE, &team_details(team)).await?;
    }
    Ok(())
}

pub fn text(value: &str) -> SqlValue {
    SqlValue::Text(value.to_string())
}
