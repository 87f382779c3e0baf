pub mod enums;
pub mod errors;
pub mod impls;
pub mod structs;
pub mod traits;
