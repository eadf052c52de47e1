// ABOUTME: Cluster module for hostenv
// ABOUTME: Exports the cluster definition types and their YAML loader

pub mod error;
pub mod spec;

pub use error::{ClusterError, Result};
pub use spec::{Cluster, ClusterSpec, Host, Metadata};
