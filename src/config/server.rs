//! Server configuration.

use std::net::{IpAddr, Ipv4Addr};

use serde::Deserialize;

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin.
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
}

const fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

const fn default_port() -> u16 {
    8080
}

const fn default_cors_permissive() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_permissive: default_cors_permissive(),
        }
    }
}
