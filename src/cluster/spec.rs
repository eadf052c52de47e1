// ABOUTME: Cluster definition data structures and YAML loading
// ABOUTME: Describes hosts, their IPs and env overrides, plus the cluster-wide env list

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ClusterError, Result};

const CLUSTER_KIND: &str = "Cluster";

fn default_api_version() -> String {
    "sealer.cloud/v2".to_string()
}

fn default_kind() -> String {
    CLUSTER_KIND.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: ClusterSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterSpec {
    pub image: Option<String>,
    /// Cluster-wide `KEY=VALUE` entries applied to every host
    #[serde(default)]
    pub env: Vec<String>,
    #[serde(default)]
    pub hosts: Vec<Host>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Host {
    #[serde(default)]
    pub ips: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Host-specific `KEY=VALUE` entries, taking precedence over the cluster env
    #[serde(default)]
    pub env: Vec<String>,
}

impl Host {
    pub fn new(ips: Vec<String>, env: Vec<String>) -> Self {
        Self {
            ips,
            roles: Vec::new(),
            env,
        }
    }

    pub fn has_ip(&self, ip: &str) -> bool {
        self.ips.iter().any(|candidate| candidate == ip)
    }
}

impl Cluster {
    /// Build a cluster in memory from hosts and a cluster-wide env list
    pub fn new(name: &str, hosts: Vec<Host>, env: Vec<String>) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: Metadata {
                name: name.to_string(),
            },
            spec: ClusterSpec {
                image: None,
                env,
                hosts,
            },
        }
    }

    /// Parse a cluster from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ClusterError::IoError)?;
        Self::from_yaml(&content)
    }

    /// Parse a cluster from a YAML string.
    ///
    /// Clusterfiles often bundle several documents (configs, plugins) with the
    /// cluster itself; the first document of kind `Cluster` is used. A lone
    /// document without a `kind` field is accepted as the cluster.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let mut documents = Vec::new();
        for document in serde_yaml::Deserializer::from_str(content) {
            let value = serde_yaml::Value::deserialize(document).map_err(ClusterError::YamlError)?;
            if !value.is_null() {
                documents.push(value);
            }
        }

        let selected = documents
            .iter()
            .position(|doc| doc.get("kind").and_then(|k| k.as_str()) == Some(CLUSTER_KIND))
            .or_else(|| match documents.as_slice() {
                [only] if only.get("kind").is_none() => Some(0),
                _ => None,
            })
            .ok_or(ClusterError::NotFound)?;

        serde_yaml::from_value(documents.swap_remove(selected)).map_err(ClusterError::YamlError)
    }

    /// Find the host owning the given IP; the last matching host wins
    pub fn host_by_ip(&self, ip: &str) -> Option<&Host> {
        self.spec.hosts.iter().rev().find(|host| host.has_ip(ip))
    }

    /// All host IPs in declaration order
    pub fn host_ips(&self) -> Vec<&str> {
        self.spec
            .hosts
            .iter()
            .flat_map(|host| host.ips.iter().map(String::as_str))
            .collect()
    }
}
