// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for hostenv

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hostenv")]
#[command(about = "Resolve per-host cluster env and inject it into shell commands and templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(short = 'f', long, global = true, help = "Path to the cluster file")]
    pub clusterfile: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a shell command prefixed with the host's env
    Shell {
        #[arg(long, help = "Host IP to resolve env for")]
        host: String,

        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            help = "Shell command to wrap"
        )]
        command: Vec<String>,
    },

    /// Render every *.tmpl file under a directory with the host's env
    Render {
        #[arg(long, help = "Host IP to resolve env for")]
        host: String,

        #[arg(help = "Directory to walk for templates")]
        dir: PathBuf,
    },

    /// Print the resolved env of a host
    Env {
        #[arg(long, help = "Host IP to resolve env for")]
        host: String,

        #[arg(long, value_enum, default_value_t = EnvFormat::Text)]
        format: EnvFormat,
    },

    /// List the host IPs declared in the cluster file
    Hosts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvFormat {
    Text,
    Json,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
