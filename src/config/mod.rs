#[cfg(feature = "cli")]
pub mod cli;
pub mod source;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
