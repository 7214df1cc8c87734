pub mod config;
pub mod interface;
