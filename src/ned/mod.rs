//! NED network description generation.
//!
//! This module turns a [`TopologyConfig`](crate::config::TopologyConfig) into
//! an OMNeT++ NED file describing the RemoteExec network: a `Client` and a
//! `Server` simple module plus a network that instantiates arrays of both.
//!
//! ## Wiring
//!
//! - Every client is linked to every server in both directions
//!   (`out` to `in`), enumerated client-major.
//! - Every client is linked to every other client through the gossip gates
//!   (`gout` to `gin`), enumerated source-major.
//!
//! Connections always use `++` so each statement takes the next free gate
//! index on both ends.

pub mod connections;
pub mod types;
pub mod writer;

// Re-export key types and functions for easier access
pub use connections::{client_server_connections, gossip_connections};
pub use types::{Connection, ConnectionStats, Endpoint, NedLayout};
pub use writer::{emit_ned, render_ned, write_ned};
