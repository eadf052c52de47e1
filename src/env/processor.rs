// ABOUTME: Env processor exposing host env to shell commands and template directories
// ABOUTME: Binds a cluster definition to the resolver and the template renderer

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::Result;
use super::render;
use super::resolver::{self, HostEnv};
use crate::cluster::Cluster;
use crate::template::TemplateEngine;

/// Injects a host's resolved environment into shells and template files
pub trait EnvProcessor {
    /// Prefix `shell` with `KEY=VALUE ` pairs for every variable of `host`.
    ///
    /// `cat /etc/hosts` for a host with `DATADISK=/data` becomes
    /// `DATADISK=/data cat /etc/hosts`. Nothing is quoted or escaped.
    fn wrapper_shell(&self, host: &str, shell: &str) -> String;

    /// Render every `*.tmpl` file under `dir` with the env of `host`
    fn render_all(&self, host: &str, dir: &Path) -> Result<Vec<PathBuf>>;
}

pub struct Processor<'a> {
    cluster: &'a Cluster,
    engine: TemplateEngine,
}

impl<'a> Processor<'a> {
    pub fn new(cluster: &'a Cluster) -> Result<Self> {
        Ok(Self::with_engine(cluster, TemplateEngine::new()?))
    }

    /// Use a preconfigured engine, e.g. one with extra helpers registered
    pub fn with_engine(cluster: &'a Cluster, engine: TemplateEngine) -> Self {
        Self { cluster, engine }
    }

    /// Resolved env for `host`; host entries take precedence over cluster entries
    pub fn host_env(&self, host: &str) -> HostEnv {
        resolver::resolve_host_env(self.cluster, host)
    }
}

impl EnvProcessor for Processor<'_> {
    fn wrapper_shell(&self, host: &str, shell: &str) -> String {
        let mut env = String::new();
        for (key, value) in self.host_env(host) {
            env.push_str(&format!("{}={} ", key, value));
        }

        debug!("Wrapped shell for {}: {}{}", host, env, shell);
        format!("{}{}", env, shell)
    }

    fn render_all(&self, host: &str, dir: &Path) -> Result<Vec<PathBuf>> {
        let env = self.host_env(host);
        info!(
            "Rendering templates in {} for host {} ({} variables)",
            dir.display(),
            host,
            env.len()
        );

        render::render_dir(&self.engine, &env, dir)
    }
}
