//! HTTP server configuration sourced from the environment.

use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Startup preferences for the HTTP server.
pub struct ServerConfig {
    bind_addr: SocketAddr,
    seed_example_data: bool,
}

impl ServerConfig {
    /// Construct a configuration binding the given address, with example
    /// data seeding enabled.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            seed_example_data: true,
        }
    }

    /// Read configuration from the environment.
    ///
    /// `TRIVIA_BIND_ADDR` overrides the listen address (default
    /// `0.0.0.0:8080`); `TRIVIA_SEED_EXAMPLE_DATA=0` starts with an empty
    /// catalog instead of the bundled example data.
    pub fn from_env() -> std::io::Result<Self> {
        let addr = env::var("TRIVIA_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = addr
            .parse()
            .map_err(|e| std::io::Error::other(format!("invalid TRIVIA_BIND_ADDR {addr}: {e}")))?;
        let seed_example_data = env::var("TRIVIA_SEED_EXAMPLE_DATA")
            .map(|v| v != "0")
            .unwrap_or(true);
        Ok(Self {
            bind_addr,
            seed_example_data,
        })
    }

    /// Override the seeding preference.
    #[must_use]
    pub fn with_seed_example_data(mut self, seed: bool) -> Self {
        self.seed_example_data = seed;
        self
    }

    /// The socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether to start with the bundled example catalog.
    pub fn seed_example_data(&self) -> bool {
        self.seed_example_data
    }
}
