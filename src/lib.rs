pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod scrape;
pub mod stats;
