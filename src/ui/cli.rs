// Command-line interface definitions and parsing for pathsweep

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pathsweep", author, version, about, long_about = None)]
pub struct Cli {
    /// Scan to run; starts the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Core Options
    /// Request timeout in seconds (default: 8)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        global = true,
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// Requests kept in flight (default: 20)
    #[arg(
        short = 'w',
        long,
        value_name = "COUNT",
        global = true,
        help_heading = "Core Options"
    )]
    pub workers: Option<usize>,

    // Inputs
    /// Path list for directory scans (default: directoary.txt)
    #[arg(long, value_name = "FILE", global = true, help_heading = "Inputs")]
    pub directory_list: Option<String>,

    /// Path list for breach scans (default: databreach.txt)
    #[arg(long, value_name = "FILE", global = true, help_heading = "Inputs")]
    pub breach_list: Option<String>,

    /// Sites for breach scans (comma-separated)
    #[arg(
        long,
        value_name = "URLS",
        value_delimiter = ',',
        global = true,
        help_heading = "Inputs"
    )]
    pub sites: Option<Vec<String>>,

    /// Site list file for breach scans (default: sites.txt)
    #[arg(long, value_name = "FILE", global = true, help_heading = "Inputs")]
    pub sites_file: Option<String>,

    // Output & Verbosity
    /// Suppress live lines and progress output
    #[arg(short = 'q', long, global = true, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, global = true, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable progress bars
    #[arg(long, global = true, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Network & Security
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", global = true, help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    /// Skip SSL certificate verification
    #[arg(long, global = true, help_heading = "Network & Security")]
    pub insecure: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", global = true, help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, global = true, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe the directory list against one target
    Dir {
        /// Base URL the paths are resolved against
        #[arg(short = 'u', long, value_name = "URL")]
        target: String,
    },
    /// Probe the breach list against every configured site
    Breach,
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        workers: cli.workers,
        directory_list: cli.directory_list.clone(),
        breach_list: cli.breach_list.clone(),
        breach_sites: cli.sites.as_ref().map(|sites| {
            sites
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        }),
        sites_file: cli.sites_file.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        no_progress: cli.no_progress,
        user_agent: cli.user_agent.clone(),
        skip_ssl_verification: cli.insecure,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
