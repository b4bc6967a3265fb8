// Export our modules for use in the binary and tests
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod db;
pub mod event;
pub mod export;
pub mod logging;
pub mod resource;
pub mod store;
pub mod terminal;
pub mod ui;
pub mod upload;

#[cfg(test)]
mod testing;

pub use app::{App, AppScreen, Collection};
pub use config::AppConfig;
