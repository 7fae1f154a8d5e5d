pub mod catalog;
pub mod cli;
pub mod config;
pub mod generation;
pub mod http;
pub mod logging;
pub mod ui;
pub mod upload;
pub mod worker;
