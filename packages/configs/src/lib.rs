//! Harness-level configuration: CLI flags layered over env/file defaults,
//! split into `cli_config` and `app_config`.

pub mod app_config;
pub mod cli_config;

pub use app_config::AppConfig;
pub use cli_config::CliConfig;
