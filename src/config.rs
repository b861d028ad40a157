use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::path::PathBuf;

/// Default number of client modules
pub const DEFAULT_CLIENT_COUNT: i64 = 3;
/// Default number of server modules
pub const DEFAULT_SERVER_COUNT: i64 = 5;
/// Default task array size handed to every client
pub const DEFAULT_ARRAY_SIZE: i64 = 99;
/// Default number of subtasks each task is split into
pub const DEFAULT_SUBTASK_COUNT: i64 = 3;

/// Comment line written at the top of a freshly bootstrapped topology file
pub const TOPOLOGY_FILE_HEADER: &str = "# Topology configuration";

/// Scale parameters for the generated RemoteExec network.
///
/// Values are not range-checked; whatever the topology file holds is baked
/// verbatim into the NED output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Number of client modules (`num_clients`)
    pub client_count: i64,
    /// Number of server modules (`num_servers`)
    pub server_count: i64,
    /// Size of the array each client works on (`array_size`)
    pub array_size: i64,
    /// Number of subtasks a task is divided into (`num_subtasks`)
    pub subtask_count: i64,
}

/// Default implementation for TopologyConfig
impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            client_count: DEFAULT_CLIENT_COUNT,
            server_count: DEFAULT_SERVER_COUNT,
            array_size: DEFAULT_ARRAY_SIZE,
            subtask_count: DEFAULT_SUBTASK_COUNT,
        }
    }
}

impl TopologyConfig {
    /// Read the field addressed by a topology file key
    pub fn get(&self, key: ConfigKey) -> i64 {
        match key {
            ConfigKey::NumClients => self.client_count,
            ConfigKey::NumServers => self.server_count,
            ConfigKey::ArraySize => self.array_size,
            ConfigKey::NumSubtasks => self.subtask_count,
        }
    }

    /// Overwrite the field addressed by a topology file key
    pub fn set(&mut self, key: ConfigKey, value: i64) {
        match key {
            ConfigKey::NumClients => self.client_count = value,
            ConfigKey::NumServers => self.server_count = value,
            ConfigKey::ArraySize => self.array_size = value,
            ConfigKey::NumSubtasks => self.subtask_count = value,
        }
    }

    /// Render the `key=value` lines for every recognized key, in file order
    pub fn to_key_value_lines(&self) -> Vec<String> {
        ConfigKey::ALL
            .iter()
            .map(|key| format!("{}={}", key.as_str(), self.get(*key)))
            .collect()
    }

    /// Render a complete topology file, header comment included
    pub fn to_topology_file(&self) -> String {
        let mut content = String::new();
        content.push_str(TOPOLOGY_FILE_HEADER);
        content.push('\n');
        for line in self.to_key_value_lines() {
            content.push_str(&line);
            content.push('\n');
        }
        content
    }
}

/// Keys recognized in a topology file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    NumClients,
    NumServers,
    ArraySize,
    NumSubtasks,
}

impl ConfigKey {
    /// Every recognized key, in the order they are written to disk
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::NumClients,
        ConfigKey::NumServers,
        ConfigKey::ArraySize,
        ConfigKey::NumSubtasks,
    ];

    /// Look up a key by its file spelling. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// The spelling used in the topology file
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::NumClients => "num_clients",
            ConfigKey::NumServers => "num_servers",
            ConfigKey::ArraySize => "array_size",
            ConfigKey::NumSubtasks => "num_subtasks",
        }
    }
}

/// Errors that can occur while reading a topology file
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("Topology file {path:?} not found")]
    NotFound { path: PathBuf },

    #[error("Failed to access topology file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: expected key=value, got {content:?}")]
    MissingSeparator { line: usize, content: String },

    #[error("Line {line}: invalid integer {value:?} for {key}: {source}")]
    InvalidValue {
        line: usize,
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
