pub mod config;
pub mod privilege;
pub mod value;
