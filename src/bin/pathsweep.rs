use clap::{CommandFactory, Parser};
use pathsweep::ScanMode;
use pathsweep::config::{CliConfig, Config};
use pathsweep::core::error::{Result, ScanError};
use pathsweep::reporting::logging;
use pathsweep::scan::Scanner;
use pathsweep::ui::completion::print_completions;
use pathsweep::ui::menu::Menu;
use pathsweep::ui::output;
use pathsweep::ui::prompt::{is_interrupt, stdin_prompt};
use pathsweep::ui::session::{
    InteractiveSession, OutputSettings, print_mode_notice, scan_breach, scan_directory,
    warn_on_abort,
};
use pathsweep::ui::{Cli, Commands, cli_to_config};

const INTERRUPTED: &str = "Stopped by user.";
const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    tokio::select! {
        result = run_pathsweep_logic(&cli) => match result {
            Ok(exit_code) => std::process::exit(exit_code),
            Err(e) if is_interrupt(&e) => interrupted(),
            Err(e) => {
                output::print_error(&format!("Error: {e}"));
                std::process::exit(1);
            }
        },
        _ = tokio::signal::ctrl_c() => interrupted(),
    }
}

fn interrupted() -> ! {
    output::print_warning(INTERRUPTED);
    std::process::exit(EXIT_INTERRUPTED);
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        _ => None,
    }
}

/// Main scan logic extracted from main() for testing
pub async fn run_pathsweep_logic(cli: &Cli) -> Result<i32> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let settings = OutputSettings::new(&cli_config, &config);
    logging::init_logger(settings.verbose, settings.quiet);
    logging::log_config_info(&config);

    match cli.command {
        Some(Commands::Dir { ref target }) => {
            let scanner = Scanner::from_config(config)?;
            print_mode_notice(ScanMode::Directory, scanner.config(), &settings);
            let outcome = match scanner.load_directory_paths() {
                Ok(paths) => scan_directory(&scanner, target, &paths, &settings).await,
                Err(e) => Err(e),
            };
            exit_code(outcome, scanner.config())
        }
        Some(Commands::Breach) => {
            let scanner = Scanner::from_config(config)?;
            print_mode_notice(ScanMode::Breach, scanner.config(), &settings);
            let outcome = scan_breach(&scanner, &settings).await;
            exit_code(outcome, scanner.config())
        }
        Some(Commands::CompletionGenerate { .. }) => Ok(0),
        None => run_interactive(config, settings).await.map(|_| 0),
    }
}

/// 0 when the scan finished, 1 when it was aborted for missing input
fn exit_code<T>(outcome: Result<T>, config: &Config) -> Result<i32> {
    Ok(match warn_on_abort(outcome, config)? {
        Some(_) => 0,
        None => 1,
    })
}

/// Run the menu on a blocking thread so the signal handler stays responsive
async fn run_interactive(config: Config, settings: OutputSettings) -> Result<()> {
    let handle = tokio::runtime::Handle::current();
    let scanner = Scanner::from_config(config)?;

    tokio::task::spawn_blocking(move || {
        let header = (settings.is_text() && !settings.quiet).then(output::banner);
        let mut session = InteractiveSession::new(scanner, handle, settings);
        let mut prompt = stdin_prompt();
        Menu::new(header).run(prompt.as_mut(), &mut session)
    })
    .await
    .map_err(|e| ScanError::Io(std::io::Error::other(e)))?
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
