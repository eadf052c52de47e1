// ABOUTME: Host environment resolution from cluster and host env lists
// ABOUTME: Merges host overrides with cluster-wide entries and groups KEY=VALUE pairs by key

use indexmap::IndexMap;
use tracing::debug;

use super::value::EnvValue;
use crate::cluster::Cluster;

/// Resolved environment of a single host, keyed in order of first appearance
pub type HostEnv = IndexMap<String, EnvValue>;

/// Append every entry of `src` not already present in `dst`.
///
/// Containment is checked on the whole `KEY=VALUE` string, so `A=1` and
/// `A=2` are distinct and both survive the merge.
pub fn merge_list(mut dst: Vec<String>, src: &[String]) -> Vec<String> {
    for entry in src {
        if dst.contains(entry) {
            continue;
        }
        dst.push(entry.clone());
    }
    dst
}

/// Group `KEY=VALUE` entries by key.
///
/// Entries are split on the first `=`; entries without one are skipped. A key
/// seen once maps to a scalar, a key seen several times to an ordered list.
pub fn convert_env(env_list: &[String]) -> HostEnv {
    let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();

    for entry in env_list {
        let Some((key, value)) = entry.split_once('=') else {
            debug!("Skipping env entry without '=': {}", entry);
            continue;
        };
        grouped
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    grouped
        .into_iter()
        .filter_map(|(key, values)| EnvValue::from_values(values).map(|value| (key, value)))
        .collect()
}

/// Resolve the environment for `host_ip`: host entries first, then cluster entries
pub fn resolve_host_env(cluster: &Cluster, host_ip: &str) -> HostEnv {
    let host_env = match cluster.host_by_ip(host_ip) {
        Some(host) => host.env.clone(),
        None => {
            debug!("No host matches {}, using cluster env only", host_ip);
            Vec::new()
        }
    };

    let merged = merge_list(host_env, &cluster.spec.env);
    convert_env(&merged)
}
