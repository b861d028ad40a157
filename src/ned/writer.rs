//! NED file rendering and output.

use crate::config::TopologyConfig;
use crate::ned::connections::{client_server_connections, gossip_connections};
use crate::ned::types::{ConnectionStats, NedLayout};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const CLIENT_MODULE: &str = "simple Client
{
parameters:
    int arraySize;
    int numSubtasks;
    int numServers;
    int numClients;
gates:
    input in[]; // message from server
    output out[]; // sending to server
    input gin[]; // gossip receive
    output gout[]; // gossip send
}

";

const SERVER_MODULE: &str = "simple Server
{
gates:
    input in[]; // receiving from client
    output out[]; // sending to client
}

";

/// Render the complete NED document for a topology
pub fn render_ned(config: &TopologyConfig, layout: &NedLayout) -> String {
    let mut ned = String::new();

    ned.push_str(&format!("package {};\n\n", layout.package));
    ned.push_str(CLIENT_MODULE);
    ned.push_str(SERVER_MODULE);

    ned.push_str(&format!("network {}\n{{\n", layout.network));
    ned.push_str("parameters:\n");
    ned.push_str(&format!("    int numClients = default({});\n", config.client_count));
    ned.push_str(&format!("    int numServers = default({});\n", config.server_count));

    // Client parameters are literal values, not references to the network parameters
    ned.push_str("submodules:\n");
    ned.push_str("    client[numClients]: Client {\n");
    ned.push_str("        parameters:\n");
    ned.push_str(&format!("            arraySize = {};\n", config.array_size));
    ned.push_str(&format!("            numSubtasks = {};\n", config.subtask_count));
    ned.push_str(&format!("            numServers = {};\n", config.server_count));
    ned.push_str(&format!("            numClients = {};\n", config.client_count));
    ned.push_str("    }\n");
    ned.push_str("    server[numServers]: Server;\n");

    ned.push_str("connections allowunconnected:\n");
    for connection in client_server_connections(config)
        .into_iter()
        .chain(gossip_connections(config))
    {
        ned.push_str(&format!("    {}\n", connection));
    }

    ned.push_str("}\n");
    ned
}

/// Write the NED document for a topology into any writer
pub fn write_ned<W: Write>(
    out: &mut W,
    config: &TopologyConfig,
    layout: &NedLayout,
) -> std::io::Result<()> {
    out.write_all(render_ned(config, layout).as_bytes())?;
    out.flush()
}

/// Create (or truncate) `output_path` and write the NED document into it.
///
/// Parent directories are not created. A failure part way through can leave
/// a truncated file behind.
pub fn emit_ned(
    output_path: &Path,
    config: &TopologyConfig,
    layout: &NedLayout,
) -> Result<ConnectionStats> {
    info!("Writing NED network {:?} to {:?}", layout.network, output_path);
    debug!("Topology: {:?}", config);

    let file = File::create(output_path)
        .wrap_err_with(|| format!("Failed to create NED file '{}'", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_ned(&mut writer, config, layout)
        .wrap_err_with(|| format!("Failed to write NED file '{}'", output_path.display()))?;

    let stats = ConnectionStats::for_config(config);
    info!(
        "Emitted {} client-server and {} gossip connections",
        stats.client_server, stats.gossip
    );
    Ok(stats)
}
