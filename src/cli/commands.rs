// ABOUTME: Command implementations for the hostenv CLI
// ABOUTME: Handles execution of shell, render, env and hosts commands

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use super::args::EnvFormat;
use crate::cluster::Cluster;
use crate::env::{EnvProcessor, HostEnv, Processor};

fn load_cluster(cluster_file: &Path) -> Result<Cluster> {
    let cluster = Cluster::from_file(cluster_file).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load cluster file '{}': {}",
            cluster_file.display(),
            e
        )
    })?;
    info!(
        "Loaded cluster '{}' with {} hosts",
        cluster.metadata.name,
        cluster.spec.hosts.len()
    );
    Ok(cluster)
}

fn new_processor(cluster: &Cluster) -> Result<Processor<'_>> {
    Processor::new(cluster).map_err(|e| anyhow::anyhow!("Failed to create env processor: {}", e))
}

/// Print a shell command wrapped with the host's env
pub fn wrap_shell(cluster_file: &Path, host: &str, command: &[String]) -> Result<()> {
    let cluster = load_cluster(cluster_file)?;
    let processor = new_processor(&cluster)?;

    println!("{}", processor.wrapper_shell(host, &command.join(" ")));
    Ok(())
}

/// Render every template under `dir` for `host`
pub fn render_templates(cluster_file: &Path, host: &str, dir: &Path) -> Result<Vec<PathBuf>> {
    let cluster = load_cluster(cluster_file)?;
    let processor = new_processor(&cluster)?;

    let rendered = processor
        .render_all(host, dir)
        .map_err(|e| anyhow::anyhow!("Failed to render env templates: {}", e))?;

    for output in &rendered {
        println!("{}", output.display());
    }
    info!(
        "Rendered {} templates under {}",
        rendered.len(),
        dir.display()
    );

    Ok(rendered)
}

/// Print the resolved env of `host`
pub fn show_env(cluster_file: &Path, host: &str, format: EnvFormat) -> Result<()> {
    let cluster = load_cluster(cluster_file)?;
    let processor = new_processor(&cluster)?;
    let env = processor.host_env(host);

    print!("{}", format_env(&env, format)?);
    Ok(())
}

/// List host IPs in the cluster file
pub fn list_hosts(cluster_file: &Path) -> Result<()> {
    let cluster = load_cluster(cluster_file)?;

    for ip in cluster.host_ips() {
        println!("{}", ip);
    }
    Ok(())
}

fn format_env(env: &HostEnv, format: EnvFormat) -> Result<String> {
    match format {
        EnvFormat::Text => {
            let mut out = String::new();
            for (key, value) in env {
                out.push_str(&format!("{}={}\n", key, value));
            }
            Ok(out)
        }
        EnvFormat::Json => {
            let json = serde_json::to_string_pretty(env)
                .map_err(|e| anyhow::anyhow!("Failed to serialize env to JSON: {}", e))?;
            Ok(format!("{}\n", json))
        }
    }
}
