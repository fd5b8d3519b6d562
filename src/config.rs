//! Command-line and environment configuration shared by every service binary.

use std::net::SocketAddr;
use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

/// Settings every bookstore service reads at startup.
///
/// Each option can come from a flag or from the environment; flags win.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(version, about = "Bookstore CRUD microservice")]
pub struct ServiceConfig {
    /// Store connection string: `sqlite://<path>`, `sqlite::memory:` or `memory://`.
    #[arg(long, env = "DATABASE_URI")]
    pub database_uri: String,

    /// Address to listen on. Each binary has its own default port.
    #[arg(long, env = "BIND_ADDR")]
    pub addr: Option<SocketAddr>,

    /// Load the example books before serving.
    #[arg(long, env = "SEED_DATA", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub seed: bool,

    /// Seconds to wait for the store before giving up.
    #[arg(long, env = "CONNECT_TIMEOUT_SECS", default_value_t = 10)]
    pub connect_timeout_secs: u64,
}

impl ServiceConfig {
    /// The configured address, or `default` when none was given.
    pub fn addr_or(&self, default: SocketAddr) -> SocketAddr {
        self.addr.unwrap_or(default)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
