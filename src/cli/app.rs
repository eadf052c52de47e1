// ABOUTME: Main application orchestration for hostenv CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Initialize logging based on configuration.
    ///
    /// Logs go to stderr; stdout carries command output such as wrapped shells.
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub fn run(&self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting hostenv v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        let cluster_file = self.config.cluster_file(args.clusterfile);
        debug!("Using cluster file: {}", cluster_file.display());

        match args.command {
            Commands::Shell { host, command } => {
                commands::wrap_shell(&cluster_file, &host, &command)
            }

            Commands::Render { host, dir } => {
                commands::render_templates(&cluster_file, &host, &dir).map(|_| ())
            }

            Commands::Env { host, format } => commands::show_env(&cluster_file, &host, format),

            Commands::Hosts => commands::list_hosts(&cluster_file),
        }
    }

    /// Create application and arguments from the command line
    pub fn from_args() -> Result<(Self, Args)> {
        let args = Args::parse_args();
        let config = Config::load(args.config.clone())?;
        Ok((Self::new(config), args))
    }
}
