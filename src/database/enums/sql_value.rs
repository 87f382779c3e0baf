use serde::{
    Deserialize,
    Serialize
};

/// A single column value, either bound as a statement parameter or decoded
/// from a result row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
    Boolean(bool),
}
