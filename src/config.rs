//! Configuration module
//!
//! CLI parsing plus the settings and shared state the server runs with.
//! The only external knob is the listening port; everything else is fixed.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::routing::{self, PatternError, Route};

/// Port used when the CLI does not name one.
const DEFAULT_PORT: u16 = 8000;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(
    name = "graphviz-ide",
    about = "Serve a directory of Graphviz sources as browsable images"
)]
pub struct Cli {
    /// Port to listen on
    #[arg(default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// Runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Interface the listener binds
    pub host: String,
    /// Port the listener binds
    pub port: u16,
    /// Directory scanned for graph sources
    pub graph_dir: PathBuf,
    /// Suffix a file needs to appear in the index
    pub source_suffix: String,
    /// External renderer binary
    pub renderer: String,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            port: cli.port,
            ..Self::default()
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            graph_dir: PathBuf::from("."),
            source_suffix: ".dot".to_string(),
            renderer: "dot".to_string(),
        }
    }
}

/// Application state shared by every connection
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub routes: Vec<Route>,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, PatternError> {
        Ok(Self {
            settings,
            routes: routing::routes()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_8000() {
        let cli = Cli::try_parse_from(["graphviz-ide"]).unwrap();
        assert_eq!(cli.port, 8000);
    }

    #[test]
    fn test_positional_port() {
        let cli = Cli::try_parse_from(["graphviz-ide", "9090"]).unwrap();
        assert_eq!(cli.port, 9090);
    }

    #[test]
    fn test_non_numeric_port_is_rejected() {
        assert!(Cli::try_parse_from(["graphviz-ide", "http"]).is_err());
    }

    #[test]
    fn test_socket_addr_binds_all_interfaces() {
        let settings = Settings::from_cli(&Cli::try_parse_from(["graphviz-ide", "8080"]).unwrap());
        let addr = settings.socket_addr().unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_state_holds_route_table() {
        let state = AppState::new(Settings::default()).unwrap();
        assert_eq!(state.routes.len(), 3);
        assert_eq!(state.settings.source_suffix, ".dot");
    }
}
