//! Centralized configuration (command line flags, environment variables, defaults).
//!
//! `.env` is read by the binaries before parsing, so every flag below can also come from there.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Environment variable naming the JSON data file.
pub const DATA_FILE_ENV: &str = "SABOREXPRESS_DATA_FILE";
/// Environment variable naming the HTTP bind address.
pub const BIND_ENV: &str = "SABOREXPRESS_BIND";

pub const DEFAULT_DATA_FILE: &str = "dados/restaurantes.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Where the registry is persisted.
#[derive(Debug, Clone, Args)]
pub struct StorageSettings {
    /// Path of the JSON document holding every establishment.
    #[arg(long, env = DATA_FILE_ENV, default_value = DEFAULT_DATA_FILE, value_name = "FILE")]
    pub data_file: String,
}

impl StorageSettings {
    /// The data file path with a leading `~` expanded.
    pub fn data_file_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_file).into_owned())
    }
}

/// Settings for the `api_server` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "api_server", version, about = "Sabor Express catalog HTTP API")]
pub struct ServerSettings {
    #[command(flatten)]
    pub storage: StorageSettings,

    /// Address the HTTP listener binds to.
    #[arg(long, env = BIND_ENV, default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Settings for the interactive `saborexpress` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "saborexpress", version, about = "Sabor Express interactive console")]
pub struct ConsoleSettings {
    #[command(flatten)]
    pub storage: StorageSettings,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_defaults() {
        let settings = ServerSettings::parse_from(["api_server"]);
        if std::env::var_os(BIND_ENV).is_none() {
            assert_eq!(settings.bind, DEFAULT_BIND_ADDR);
        }
        assert!(!settings.verbose);
    }

    #[test]
    fn data_file_flag_expands_tilde() {
        let settings = ConsoleSettings::parse_from(["saborexpress", "--data-file", "~/sabor.json"]);
        let path = settings.storage.data_file_path();
        assert!(!path.to_string_lossy().starts_with('~') || std::env::var_os("HOME").is_none());
        assert!(path.ends_with("sabor.json"));
    }
}
