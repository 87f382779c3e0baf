use crate::database::enums::order_direction::OrderDirection;
use crate::database::enums::sql_value::SqlValue;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectOptions {
    pub key: Option<(String, SqlValue)>,
    pub order: Option<(String, OrderDirection)>,
    pub limit: Option<u64>,
}
