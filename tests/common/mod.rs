// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides cluster file builders and scratch directories for template rendering

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use hostenv::cluster::{Cluster, Host};

pub struct TestClusterBuilder {
    name: String,
    env: Vec<String>,
    hosts: Vec<TestHost>,
}

pub struct TestHost {
    pub ips: Vec<String>,
    pub roles: Vec<String>,
    pub env: Vec<String>,
}

impl TestClusterBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            env: Vec::new(),
            hosts: Vec::new(),
        }
    }

    pub fn with_env(mut self, entry: &str) -> Self {
        self.env.push(entry.to_string());
        self
    }

    pub fn add_host(mut self, ips: &[&str], env: &[&str]) -> Self {
        self.hosts.push(TestHost {
            ips: ips.iter().map(|s| s.to_string()).collect(),
            roles: vec!["master".to_string()],
            env: env.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn build(&self) -> Cluster {
        let hosts = self
            .hosts
            .iter()
            .map(|h| Host {
                ips: h.ips.clone(),
                roles: h.roles.clone(),
                env: h.env.clone(),
            })
            .collect();
        Cluster::new(&self.name, hosts, self.env.clone())
    }

    pub fn write_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(path, self.generate_yaml())?;
        Ok(())
    }

    pub fn generate_yaml(&self) -> String {
        let mut yaml = format!(
            "apiVersion: sealer.cloud/v2\nkind: Cluster\nmetadata:\n  name: {}\nspec:\n",
            self.name
        );

        if !self.env.is_empty() {
            yaml.push_str("  env:\n");
            for entry in &self.env {
                yaml.push_str(&format!("    - \"{}\"\n", entry));
            }
        }

        yaml.push_str("  hosts:\n");
        for host in &self.hosts {
            yaml.push_str("    - ips:\n");
            for ip in &host.ips {
                yaml.push_str(&format!("        - {}\n", ip));
            }
            yaml.push_str("      roles:\n");
            for role in &host.roles {
                yaml.push_str(&format!("        - {}\n", role));
            }
            if !host.env.is_empty() {
                yaml.push_str("      env:\n");
                for entry in &host.env {
                    yaml.push_str(&format!("        - \"{}\"\n", entry));
                }
            }
        }

        yaml
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn cluster_file(&self) -> PathBuf {
        self.path().join("Clusterfile")
    }

    pub fn create_cluster_file(&self, builder: &TestClusterBuilder) -> PathBuf {
        let cluster_file = self.cluster_file();
        builder
            .write_to_file(&cluster_file)
            .expect("Failed to write cluster file");
        cluster_file
    }

    /// Write a file relative to the environment root, creating parent dirs
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.path().join(relative)).expect("Failed to read file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_builder_yaml_round_trips() {
        let builder = TestClusterBuilder::new("builder")
            .with_env("B=2")
            .add_host(&["10.0.0.1"], &["A=1"]);

        let parsed = Cluster::from_yaml(&builder.generate_yaml()).unwrap();
        assert_eq!(parsed, builder.build());
    }

    #[test]
    fn test_environment_setup() {
        let env = TestEnvironment::new();
        assert!(env.path().exists());
        assert!(env
            .cluster_file()
            .to_string_lossy()
            .ends_with("Clusterfile"));
    }
}
