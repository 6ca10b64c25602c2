//! Configuration domain module

mod app_config;
mod backend;

pub use app_config::{AppConfig, DEFAULT_APP_NAME, DEFAULT_TITLE};
pub use backend::BackendKind;
