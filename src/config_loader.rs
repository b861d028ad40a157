use crate::config::{ConfigKey, TopologyConfig, TopologyError};
use log::{debug, error, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load the topology configuration, falling back to defaults on any failure.
///
/// A missing file is only a warning. A malformed line discards every
/// override read so far; the whole run uses the built-in defaults.
pub fn load_topology(topology_path: &Path) -> TopologyConfig {
    info!("Loading topology from: {:?}", topology_path);

    match read_topology_file(topology_path) {
        Ok(config) => config,
        Err(TopologyError::NotFound { path }) => {
            warn!("Topology file {:?} not found. Using default values.", path);
            TopologyConfig::default()
        }
        Err(e) => {
            error!("Error reading topology file: {}", e);
            warn!("Using default values.");
            TopologyConfig::default()
        }
    }
}

/// Read and parse a topology file without any fallback
pub fn read_topology_file(topology_path: &Path) -> Result<TopologyConfig, TopologyError> {
    let content = fs::read_to_string(topology_path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            TopologyError::NotFound {
                path: topology_path.to_path_buf(),
            }
        } else {
            TopologyError::Io {
                path: topology_path.to_path_buf(),
                source: e,
            }
        }
    })?;

    parse_topology(&content)
}

/// Parse `key=value` topology text on top of the default configuration
pub fn parse_topology(content: &str) -> Result<TopologyConfig, TopologyError> {
    let mut config = TopologyConfig::default();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| TopologyError::MissingSeparator {
                line: index + 1,
                content: line.to_string(),
            })?;
        let key = key.trim();
        let value = value.trim();

        match ConfigKey::from_key(key) {
            Some(config_key) => {
                let parsed = value
                    .parse::<i64>()
                    .map_err(|source| TopologyError::InvalidValue {
                        line: index + 1,
                        key: config_key.as_str(),
                        value: value.to_string(),
                        source,
                    })?;
                config.set(config_key, parsed);
            }
            None => debug!("Ignoring unrecognized topology key {:?}", key),
        }
    }

    Ok(config)
}

/// Create a topology file holding the default values if none exists yet.
///
/// Returns `true` when a new file was written.
pub fn bootstrap_topology_file(topology_path: &Path) -> Result<bool, TopologyError> {
    if topology_path.exists() {
        return Ok(false);
    }

    fs::write(topology_path, TopologyConfig::default().to_topology_file()).map_err(|e| {
        TopologyError::Io {
            path: topology_path.to_path_buf(),
            source: e,
        }
    })?;

    info!("Created default topology file {:?}", topology_path);
    Ok(true)
}

/// Bootstrap the topology file at `topology_path` if needed, then load it.
///
/// A failed bootstrap is only a warning; loading then falls back to defaults.
pub fn prepare_topology(topology_path: &Path) -> TopologyConfig {
    if let Err(e) = bootstrap_topology_file(topology_path) {
        warn!("Could not create default topology file: {}", e);
    }
    load_topology(topology_path)
}
