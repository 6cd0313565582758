pub mod browser;
pub mod config;
pub mod display;
pub mod engine;
pub mod list;
