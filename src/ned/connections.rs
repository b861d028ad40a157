//! Connection enumeration for the RemoteExec network.
//!
//! Statement order is part of the output contract: regenerating with the
//! same config must reproduce the file byte for byte.

use crate::config::TopologyConfig;
use crate::ned::types::{Connection, Endpoint};

/// Generate the client-server links
///
/// For each client (outer) and server (inner), emits the client to server
/// link followed by the server to client link.
pub fn client_server_connections(config: &TopologyConfig) -> Vec<Connection> {
    let mut connections = Vec::new();
    for client_id in 0..config.client_count {
        for server_id in 0..config.server_count {
            connections.push(Connection {
                from: Endpoint::client(client_id, "out"),
                to: Endpoint::server(server_id, "in"),
            });
            connections.push(Connection {
                from: Endpoint::server(server_id, "out"),
                to: Endpoint::client(client_id, "in"),
            });
        }
    }
    connections
}

/// Generate the all-to-all gossip links between clients
pub fn gossip_connections(config: &TopologyConfig) -> Vec<Connection> {
    let mut connections = Vec::new();
    for src_client in 0..config.client_count {
        for dst_client in 0..config.client_count {
            // Don't connect a client to itself
            if src_client != dst_client {
                connections.push(Connection {
                    from: Endpoint::client(src_client, "gout"),
                    to: Endpoint::client(dst_client, "gin"),
                });
            }
        }
    }
    connections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ned::types::ConnectionStats;

    fn config(clients: i64, servers: i64) -> TopologyConfig {
        TopologyConfig {
            client_count: clients,
            server_count: servers,
            ..TopologyConfig::default()
        }
    }

    #[test]
    fn test_client_server_order() {
        let lines: Vec<String> = client_server_connections(&config(2, 2))
            .iter()
            .map(|c| c.to_string())
            .collect();

        assert_eq!(
            lines,
            vec![
                "client[0].out++ --> server[0].in++;",
                "server[0].out++ --> client[0].in++;",
                "client[0].out++ --> server[1].in++;",
                "server[1].out++ --> client[0].in++;",
                "client[1].out++ --> server[0].in++;",
                "server[0].out++ --> client[1].in++;",
                "client[1].out++ --> server[1].in++;",
                "server[1].out++ --> client[1].in++;",
            ]
        );
    }

    #[test]
    fn test_gossip_skips_self() {
        let connections = gossip_connections(&config(3, 0));
        assert_eq!(connections.len(), 6);
        assert!(connections.iter().all(|c| c.from.index != c.to.index));
        assert_eq!(connections[0].to_string(), "client[0].gout++ --> client[1].gin++;");
        assert_eq!(connections[5].to_string(), "client[2].gout++ --> client[1].gin++;");
    }

    #[test]
    fn test_counts_match_stats() {
        for clients in 0..6 {
            for servers in 0..6 {
                let cfg = config(clients, servers);
                let stats = ConnectionStats::for_config(&cfg);
                assert_eq!(client_server_connections(&cfg).len() as u64, stats.client_server);
                assert_eq!(gossip_connections(&cfg).len() as u64, stats.gossip);
            }
        }
    }

    #[test]
    fn test_negative_counts_emit_nothing() {
        let cfg = config(-1, -3);
        assert!(client_server_connections(&cfg).is_empty());
        assert!(gossip_connections(&cfg).is_empty());
    }
}
