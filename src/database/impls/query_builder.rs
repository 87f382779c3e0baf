use once_cell::sync::Lazy;
use regex::Regex;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::enums::sql_value::SqlValue;
use crate::database::errors::DatabaseError;
use crate::database::structs::query_builder::QueryBuilder;
use crate::database::structs::select_options::SelectOptions;

pub const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_$]{0,63}$";

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern compiles"));

impl QueryBuilder {
    pub fn new(engine: DatabaseDrivers) -> Self {
        Self { engine }
    }

    /// True for a bare identifier such as `users` or `created_at`.
    pub fn is_valid_identifier(identifier: &str) -> bool {
        IDENTIFIER.is_match(identifier)
    }

    /// Accepts `name` or `schema.name`, each part matching the identifier
    /// allow-list, and returns it quoted for the engine.
    pub fn quote_identifier(&self, identifier: &str) -> Result<String, DatabaseError> {
        let parts: Vec<&str> = identifier.split('.').collect();
        if parts.len() > 2 || !parts.iter().all(|part| Self::is_valid_identifier(part)) {
            return Err(DatabaseError::InvalidIdentifier(identifier.to_string()));
        }
        Ok(parts
            .iter()
            .map(|part| match self.engine {
                DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("`{}`", part),
            })
            .collect::<Vec<String>>()
            .join("."))
    }

    pub fn placeholder(&self) -> &'static str {
        match self.engine {
            DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => "?",
        }
    }

    fn placeholders(&self, count: usize) -> String {
        vec![self.placeholder(); count].join(", ")
    }

    /// `key = ?`, or `key IS NULL` for a null key value, which then takes no
    /// bound argument.
    pub fn key_condition(&self, key_name: &str, key_value: &SqlValue) -> Result<String, DatabaseError> {
        let key = self.quote_identifier(key_name)?;
        if key_value.is_null() {
            return Ok(format!("{} IS NULL", key));
        }
        Ok(format!("{} = {}", key, self.placeholder()))
    }

    pub fn insert(&self, table: &str, columns: &[&str]) -> Result<String, DatabaseError> {
        if columns.is_empty() {
            return Err(DatabaseError::InvalidArgument(format!("no columns given to insert into {}", table)));
        }
        let quoted = columns
            .iter()
            .map(|column| self.quote_identifier(column))
            .collect::<Result<Vec<String>, DatabaseError>>()?;
        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.quote_identifier(table)?,
            quoted.join(", "),
            self.placeholders(columns.len())
        ))
    }

    pub fn update(
        &self,
        table: &str,
        columns: &[&str],
        key_name: &str,
        key_value: &SqlValue,
    ) -> Result<String, DatabaseError> {
        if columns.is_empty() {
            return Err(DatabaseError::InvalidArgument(format!("no columns given to update in {}", table)));
        }
        let assignments = columns
            .iter()
            .map(|column| Ok(format!("{} = {}", self.quote_identifier(column)?, self.placeholder())))
            .collect::<Result<Vec<String>, DatabaseError>>()?;
        Ok(format!(
            "UPDATE {} SET {} WHERE {}",
            self.quote_identifier(table)?,
            assignments.join(", "),
            self.key_condition(key_name, key_value)?
        ))
    }

    /// Empty `columns` selects every column.
    pub fn select(&self, table: &str, columns: &[&str], options: &SelectOptions) -> Result<String, DatabaseError> {
        let projection = if columns.is_empty() {
            String::from("*")
        } else {
            columns
                .iter()
                .map(|column| self.quote_identifier(column))
                .collect::<Result<Vec<String>, DatabaseError>>()?
                .join(", ")
        };
        let mut statement = format!("SELECT {} FROM {}", projection, self.quote_identifier(table)?);
        if let Some((key_name, key_value)) = &options.key {
            statement.push_str(&format!(" WHERE {}", self.key_condition(key_name, key_value)?));
        }
        if let Some((column, direction)) = &options.order {
            statement.push_str(&format!(" ORDER BY {} {}", self.quote_identifier(column)?, direction.as_sql()));
        }
        if let Some(limit) = options.limit {
            statement.push_str(&format!(" LIMIT {}", limit));
        }
        Ok(statement)
    }

    pub fn create_database(&self, database_name: &str) -> Result<String, DatabaseError> {
        match self.engine {
            DatabaseDrivers::mysql => Ok(format!("CREATE DATABASE IF NOT EXISTS {}", self.quote_identifier(database_name)?)),
            DatabaseDrivers::sqlite3 => Err(DatabaseError::InvalidArgument(format!(
                "{} databases are files, there is nothing to create",
                self.engine.engine_name()
            ))),
        }
    }
}
