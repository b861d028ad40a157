//! # nedgen - NED network generator for RemoteExec simulations
//!
//! This library generates the OMNeT++ NED description of the RemoteExec
//! client/server network from four scale parameters kept in a small
//! `key=value` topology file.
//!
//! ## Overview
//!
//! The generated network declares a `Client` and a `Server` simple module and
//! a composite network instantiating `numClients` clients and `numServers`
//! servers. Every client talks to every server in both directions, and every
//! client gossips with every other client.
//!
//! ## Architecture
//!
//! - `config`: the topology parameters, recognized file keys and loader errors
//! - `config_loader`: topology file parsing, fallback to defaults and bootstrap
//! - `ned`: connection enumeration and NED rendering
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nedgen::{config_loader, ned};
//! use std::path::Path;
//!
//! config_loader::bootstrap_topology_file(Path::new("topo.txt"))?;
//! let config = config_loader::load_topology(Path::new("topo.txt"));
//! ned::emit_ned(Path::new("RemoteExecNetwork.ned"), &config, &ned::NedLayout::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Topology File Format
//!
//! ```text
//! # Topology configuration
//! num_clients=3
//! num_servers=5
//! array_size=99
//! num_subtasks=3
//! ```
//!
//! Unknown keys are ignored and missing keys keep their defaults. A malformed
//! line makes the whole file fall back to the defaults.
//!
//! ## Error Handling
//!
//! Topology file problems are reported through `log` and never abort a run.
//! Output failures are returned as `color_eyre` reports.

pub mod config;
pub mod config_loader;
pub mod ned;
