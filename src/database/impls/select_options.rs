use crate::database::enums::order_direction::OrderDirection;
use crate::database::enums::sql_value::SqlValue;
use crate::database::structs::select_options::SelectOptions;

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only rows where `key_name` equals `key_value`.
    pub fn with_key(mut self, key_name: &str, key_value: impl Into<SqlValue>) -> Self {
        self.key = Some((key_name.to_string(), key_value.into()));
        self
    }

    pub fn with_order(mut self, column: &str, direction: OrderDirection) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The value to bind for the key filter. A null key is matched with
    /// `IS NULL` and binds nothing.
    pub(crate) fn key_value(&self) -> Option<SqlValue> {
        self.key
            .as_ref()
            .map(|(_, value)| value.clone())
            .filter(|value| !value.is_null())
    }
}
