pub mod app_config;

pub use app_config::{Cli, Config, ConfigError};
