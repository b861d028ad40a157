//! NED data structures: module endpoints, connections and output naming.

use crate::config::TopologyConfig;
use std::fmt;

/// Package clause written at the top of the generated file
pub const DEFAULT_PACKAGE: &str = "temp";
/// Name of the generated network declaration
pub const DEFAULT_NETWORK: &str = "RemoteExecNetwork";

/// Names baked into the generated NED file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NedLayout {
    /// Package the declarations live in
    pub package: String,
    /// Name of the composite network
    pub network: String,
}

/// Default implementation for NedLayout
impl Default for NedLayout {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            network: DEFAULT_NETWORK.to_string(),
        }
    }
}

/// Submodule arrays declared by the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Client,
    Server,
}

impl ModuleKind {
    /// Submodule array name inside the network
    pub fn array_name(&self) -> &'static str {
        match self {
            ModuleKind::Client => "client",
            ModuleKind::Server => "server",
        }
    }
}

/// One side of a connection: a gate on an indexed submodule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub module: ModuleKind,
    pub index: i64,
    pub gate: &'static str,
}

impl Endpoint {
    pub fn client(index: i64, gate: &'static str) -> Self {
        Self { module: ModuleKind::Client, index, gate }
    }

    pub fn server(index: i64, gate: &'static str) -> Self {
        Self { module: ModuleKind::Server, index, gate }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}].{}++", self.module.array_name(), self.index, self.gate)
    }
}

/// A directed link statement, e.g. `client[0].out++ --> server[1].in++;`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: Endpoint,
    pub to: Endpoint,
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {};", self.from, self.to)
    }
}

/// Number of statements in each connection block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionStats {
    /// Client-server statements, both directions counted
    pub client_server: u64,
    /// Client-client gossip statements
    pub gossip: u64,
}

impl ConnectionStats {
    /// Expected counts for a config: `2*c*s` and `c*(c-1)`.
    ///
    /// Negative counts behave like zero since they produce no loop iterations.
    pub fn for_config(config: &TopologyConfig) -> Self {
        let clients = config.client_count.max(0) as u64;
        let servers = config.server_count.max(0) as u64;
        Self {
            client_server: 2 * clients * servers,
            gossip: clients * clients.saturating_sub(1),
        }
    }

    pub fn total(&self) -> u64 {
        self.client_server + self.gossip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_display() {
        let conn = Connection {
            from: Endpoint::client(1, "gout"),
            to: Endpoint::client(0, "gin"),
        };
        assert_eq!(conn.to_string(), "client[1].gout++ --> client[0].gin++;");

        let conn = Connection {
            from: Endpoint::server(4, "out"),
            to: Endpoint::client(2, "in"),
        };
        assert_eq!(conn.to_string(), "server[4].out++ --> client[2].in++;");
    }

    #[test]
    fn test_stats() {
        let stats = ConnectionStats::for_config(&TopologyConfig::default());
        assert_eq!(stats.client_server, 30);
        assert_eq!(stats.gossip, 6);
        assert_eq!(stats.total(), 36);

        let config = TopologyConfig {
            client_count: -4,
            server_count: 5,
            ..TopologyConfig::default()
        };
        assert_eq!(ConnectionStats::for_config(&config), ConnectionStats::default());
    }
}
