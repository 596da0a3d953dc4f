pub mod args;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod naming;
pub mod record;
pub mod sink;
pub mod strategy;
pub mod table;
pub mod visuals;
