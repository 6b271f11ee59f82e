pub mod app_state;
pub mod chain;
pub mod config;
