use std::fmt;
use std::str::FromStr;
use crate::database::enums::order_direction::OrderDirection;
use crate::database::errors::DatabaseError;

impl OrderDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            OrderDirection::asc => "ASC",
            OrderDirection::desc => "DESC",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for OrderDirection {
    type Err = DatabaseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(OrderDirection::asc),
            "desc" => Ok(OrderDirection::desc),
            _ => Err(DatabaseError::InvalidArgument(format!("unknown order direction '{}'", value))),
        }
    }
}
