pub mod catalog;
pub mod config;
pub mod models;
pub mod query;
