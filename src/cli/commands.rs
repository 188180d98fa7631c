//! Command dispatch: one function per subcommand

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::{run_demo, TreeService};
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::InvalidArgs(
            "no command given, see --help".to_string(),
        ));
    };

    if let Commands::Completion { shell } = command {
        return _completion(*shell);
    }

    let settings = Settings::load(cli.config.as_deref())?;
    execute_with_settings(cli, settings)
}

/// Dispatch with settings already resolved, skipping the config file lookup.
pub fn execute_with_settings(cli: &Cli, settings: Settings) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::InvalidArgs(
            "no command given, see --help".to_string(),
        ));
    };
    debug!("settings: {:?}", settings);

    match command {
        Commands::Run { expr } => _run(TreeService::new(settings), expr),
        Commands::Tree { expr } => _tree(TreeService::new(settings), expr),
        Commands::Info { expr } => _info(TreeService::new(settings), expr),
        Commands::Demo => _demo(&settings),
        Commands::Config { command } => _config(&settings, command),
        Commands::Completion { shell } => _completion(*shell),
    }
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[instrument(skip(service))]
fn _run(service: TreeService, expr: &str) -> CliResult<()> {
    let rendered = service.evaluate(expr)?;
    output::info(&rendered);
    Ok(())
}

#[instrument(skip(service))]
fn _tree(service: TreeService, expr: &str) -> CliResult<()> {
    let tree = service.view(expr)?;
    output::info(&tree);
    Ok(())
}

#[instrument(skip(service))]
fn _info(service: TreeService, expr: &str) -> CliResult<()> {
    let stats = service.stats(expr)?;
    output::action("depth", &stats.depth);
    output::action("nodes", &stats.nodes);
    output::action("leaves", &stats.leaves);
    Ok(())
}

#[instrument(skip(settings))]
fn _demo(settings: &Settings) -> CliResult<()> {
    let steps = run_demo().map_err(ApplicationError::from)?;
    for step in steps {
        output::header(step.label);
        output::detail(&settings.format.render(&step.outcome));
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::action("global", &path.display()),
            None => {
                return Err(CliError::Io {
                    context: "resolve global config directory".to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "no home directory"),
                })
            }
        },
    }
    Ok(())
}
